//! Tag naming which branch of an `Outcome` is active.
use strum_macros::{Display, EnumString, IntoStaticStr};

/// The two branches of an `Outcome`. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// Success, with or without a value.
    Ok,
    /// Failure.
    Err,
}
