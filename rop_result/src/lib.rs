//!
//! A two-variant outcome container for fallible computations.
//!
//! This crate aggregates:
//! - `outcome` — the `Outcome<T, E>` type, its factories and unsafe accessors.
//! - `combinators` — `map`, `and_then`, `try_and_then`, `map_err`, `or_else`, the
//!   `if_ok`/`if_err` hooks and the total unwrap family.
//! - `error` — `ExtractError`, returned when a payload is requested from the wrong branch
//!   or from an empty success.
//! - `result` — handy `Result<T, ExtractError>` alias.
//! - `variant` — `Variant` tag naming the active branch.
//!
//! ```
//! use rop_result::{ExtractError, Outcome, err, ok};
//!
//! let mapped = ok::<i32, bool>(3).map(|x| x + 5)?.map_err(|x| !x);
//! assert_eq!(mapped, ok(8));
//!
//! let failed: Outcome<i32, bool> = err(false);
//! assert_eq!(failed.get_ok(), Err(ExtractError::ErrHasNoOk));
//! # Ok::<(), ExtractError>(())
//! ```
#![warn(missing_docs)]
pub mod combinators;
pub mod error;
pub mod outcome;
pub mod result;
pub mod variant;

pub use error::ExtractError;
pub use outcome::{Outcome, empty, err, ok};
pub use result::Result;
pub use variant::Variant;
