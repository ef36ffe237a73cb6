//! Crate-wide result alias tying the unsafe accessors to `ExtractError`.
//!
//! `get_ok`, `get_err`, `map` and `and_then` return `result::Result<T>`, so a mismatch
//! propagates with `?`. Callers can still override the error parameter when needed.
use crate::error::ExtractError;

/// Convenient alias for `std::result::Result<T, ExtractError>`.
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
