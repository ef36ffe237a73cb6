//! Transformation, hook and unwrap operations over `Outcome`.
//!
//! Success-side operations never touch a failure's error and failure-side operations never
//! touch a success value. The unwrap family is total. Only `map`, `and_then` and
//! `try_and_then` can return an `ExtractError`, because they extract the success value
//! through `Outcome::get_ok`; on an empty success this yields `ExtractError::EmptyResult`
//! instead of short-circuiting.
//!
//! Caller-supplied closures run synchronously, at most once per call. A panic inside one
//! propagates to the caller unchanged.
use std::fmt;

use log::{debug, error};

use crate::outcome::{Outcome, err, ok};
use crate::result::Result;

impl<T, E> Outcome<T, E> {
    /// Applies `op` to the success value and wraps the return value in a new success.
    /// A failure passes through untouched.
    ///
    /// # Errors
    ///
    /// `ExtractError::EmptyResult` when called on an empty success.
    pub fn map<U, F>(self, op: F) -> Result<Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| ok(op(value)))
    }

    /// Applies `op` to the success value and returns its outcome.
    /// A failure passes through untouched.
    ///
    /// # Errors
    ///
    /// `ExtractError::EmptyResult` when called on an empty success.
    pub fn and_then<U, F>(self, op: F) -> Result<Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Err(error) => Ok(Outcome::Err(error)),
            success => Ok(op(success.get_ok()?)),
        }
    }

    /// Like `and_then`, but `op` may fail with its own error type `X`.
    ///
    /// A failure from `op` is converted into `Outcome::Err(E::from(x))` here, so a chain of
    /// fallible calls needs no handling at each step.
    ///
    /// # Errors
    ///
    /// `ExtractError::EmptyResult` when called on an empty success.
    pub fn try_and_then<U, X, F>(self, op: F) -> Result<Outcome<U, E>>
    where
        F: FnOnce(T) -> std::result::Result<Outcome<U, E>, X>,
        X: fmt::Debug,
        E: From<X>,
    {
        self.and_then(|value| match op(value) {
            Ok(outcome) => outcome,
            Err(signal) => {
                debug!("Mapper failed, converting to err: {:?}", signal);
                Outcome::Err(E::from(signal))
            }
        })
    }

    /// Applies `op` to the failure payload and wraps it in a new failure.
    /// A success, empty or not, passes through untouched.
    pub fn map_err<U, F>(self, op: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        self.or_else(|error| err(op(error)))
    }

    /// Applies `op` to the failure payload and returns its outcome.
    /// A success passes through untouched.
    pub fn or_else<U, F>(self, op: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> Outcome<T, U>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error),
        }
    }

    /// Calls `consumer` with the success value, if there is one.
    pub fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(Some(value)) = self {
            consumer(value);
        }
    }

    /// Calls `consumer` with the failure payload, if this is a failure.
    pub fn if_err<F>(&self, consumer: F)
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(error) = self {
            consumer(error);
        }
    }

    /// Logs a failure at error level with `context` and returns `self` unchanged.
    pub fn log_err(self, context: &str) -> Self
    where
        E: fmt::Display,
    {
        self.if_err(|e| error!("{}: {}", context, e));
        self
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(Some(value)) => value,
            _ => default,
        }
    }

    /// Returns the failure payload or `default`.
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Outcome::Err(error) => error,
            Outcome::Ok(_) => default,
        }
    }

    /// Returns the success value or the result of `supplier`.
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Ok(Some(value)) => value,
            _ => supplier(),
        }
    }

    /// Returns the failure payload or the result of `supplier`.
    pub fn unwrap_err_or_else<F>(self, supplier: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Outcome::Err(error) => error,
            Outcome::Ok(_) => supplier(),
        }
    }

    /// Returns the success value, or the error built by `signal` when there is none.
    ///
    /// # Errors
    ///
    /// Whatever `signal` returns, for a failure or an empty success.
    pub fn ok_or_else<X, F>(self, signal: F) -> std::result::Result<T, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Outcome::Ok(Some(value)) => Ok(value),
            _ => Err(signal()),
        }
    }

    /// Returns the failure payload, or the error built by `signal` for a success.
    ///
    /// # Errors
    ///
    /// Whatever `signal` returns, for any success.
    pub fn err_or_else<X, F>(self, signal: F) -> std::result::Result<E, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Outcome::Err(error) => Ok(error),
            Outcome::Ok(_) => Err(signal()),
        }
    }
}
