//! Conversion of `err` arguments into a failure payload.
//!
//! [`err`](crate::err) accepts either a payload or an outcome that is already
//! a failure. The latter is flattened one level, so re-wrapping a propagated
//! failure never produces a failure of a failure.
//!
//! An outcome is statically known to be a failure when its success type is
//! uninhabited, which is why the flattening impl is for
//! `Outcome<Infallible, E>`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, Outcome};
//! use std::convert::Infallible;
//!
//! let first: Outcome<Infallible, &str> = err("disk full");
//! let second: Outcome<u64, &str> = err(first);
//! assert_eq!(second.error(), Some(&"disk full"));
//! ```
use core::convert::Infallible;

use crate::types::Outcome;

/// Converts a value into the failure payload `E`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a failure payload of type `{E}`",
    label = "this type does not implement `IntoFailure<{E}>`",
    note = "pass the payload itself, or an `Outcome<Infallible, {E}>` to flatten"
)]
pub trait IntoFailure<E> {
    /// Returns the payload to store in the failure variant.
    fn into_failure(self) -> E;
}

impl<E> IntoFailure<E> for E {
    /// Identity conversion for payloads.
    #[inline]
    fn into_failure(self) -> E {
        self
    }
}

impl<E> IntoFailure<E> for Outcome<Infallible, E> {
    /// Unwraps the inner payload of a failure outcome.
    #[inline]
    fn into_failure(self) -> E {
        match self {
            Outcome::Ok(never) => match never {},
            Outcome::Err(error) => error,
        }
    }
}
