//! Error types raised by the unsafe accessors of `Outcome`.
//!
//! The three variants are deliberately distinct: callers must be able to tell a success
//! that carries nothing apart from asking the wrong branch for its payload.
use thiserror::Error;

/// Failure kinds returned by `Outcome::get_ok`, `Outcome::get_err` and the combinators that
/// extract through them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractError {
    /// A success value was requested from a success that holds no value.
    #[error("Empty result: the success variant holds no value")]
    EmptyResult,

    /// A success value was requested from a failure.
    #[error("Err has no ok value")]
    ErrHasNoOk,

    /// A failure payload was requested from a success, with or without a value.
    #[error("Ok has no err value")]
    OkHasNoErr,
}
