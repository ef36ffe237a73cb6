//! The `Outcome` sum type: construction, inspection and extraction.
//!
//! An `Outcome` is either a success or a failure. The success branch wraps an `Option`, so
//! three logical states exist on top of the two variants:
//!
//! - `Ok(Some(v))` — succeeded with a value.
//! - `Ok(None)` — succeeded with nothing to report ("empty").
//! - `Err(e)` — failed; the payload is always present.
//!
//! Instances are never mutated by the operations here. Every transformation consumes the
//! receiver and produces a new value (see `combinators`). Equality and hashing are derived,
//! so two outcomes are equal iff they are the same variant with equal payloads.
use std::fmt;

use log::trace;

use crate::error::ExtractError;
use crate::result::Result;
use crate::variant::Variant;

/// Outcome of a fallible computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T, E> {
    /// Success, with an optional value.
    Ok(Option<T>),
    /// Failure carrying its error.
    Err(E),
}

/// Creates a success holding `value`.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(Some(value))
}

/// Creates a success holding no value.
pub fn empty<T, E>() -> Outcome<T, E> {
    Outcome::Ok(None)
}

/// Creates a failure holding `error`.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Creates a success from an optional value; `None` yields an empty success.
    pub fn from_option(value: Option<T>) -> Self {
        Outcome::Ok(value)
    }

    /// Returns the active branch.
    pub fn variant(&self) -> Variant {
        match self {
            Outcome::Ok(_) => Variant::Ok,
            Outcome::Err(_) => Variant::Err,
        }
    }

    /// `true` for any success, empty or not.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// `true` for a failure.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// `true` only for a success that carries a value.
    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Ok(Some(_)))
    }

    /// Converts into the success value, discarding any error.
    ///
    /// `None` for a failure and for an empty success.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => None,
        }
    }

    /// Converts into the failure payload. `None` for any success.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Extracts the success value.
    ///
    /// # Errors
    ///
    /// - `ExtractError::EmptyResult` when called on an empty success.
    /// - `ExtractError::ErrHasNoOk` when called on a failure.
    pub fn get_ok(self) -> Result<T> {
        match self {
            Outcome::Ok(Some(value)) => Ok(value),
            Outcome::Ok(None) => {
                trace!("get_ok called on an empty {} outcome", Variant::Ok);
                Err(ExtractError::EmptyResult)
            }
            Outcome::Err(_) => {
                trace!("get_ok called on an {} outcome", Variant::Err);
                Err(ExtractError::ErrHasNoOk)
            }
        }
    }

    /// Extracts the failure payload.
    ///
    /// # Errors
    ///
    /// `ExtractError::OkHasNoErr` when called on any success.
    pub fn get_err(self) -> Result<E> {
        match self {
            Outcome::Ok(_) => {
                trace!("get_err called on an {} outcome", Variant::Ok);
                Err(ExtractError::OkHasNoErr)
            }
            Outcome::Err(error) => Ok(error),
        }
    }

    /// Borrows the payload without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value.as_ref()),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into a standard `Result`, keeping the optional success value.
    pub fn into_result(self) -> std::result::Result<Option<T>, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T: Clone, E> Outcome<&T, E> {
    /// Maps an `Outcome<&T, E>` to an `Outcome<T, E>` by cloning the success value.
    pub fn cloned(self) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value.cloned()),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(Some(value)),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(Some(value)) => write!(f, "{}({})", self.variant(), value),
            Outcome::Ok(None) => write!(f, "{}(<empty>)", self.variant()),
            Outcome::Err(error) => write!(f, "{}({})", self.variant(), error),
        }
    }
}
