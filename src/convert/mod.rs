//! Construction helpers for [`Outcome`].
//!
//! [`ok`] and [`err`] are the canonical ways to build an outcome. Both are
//! total: they never raise, whatever the payload.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::{err, ok};
//! use outcome_rail::Outcome;
//!
//! // Operations without a meaningful value succeed with `()`.
//! let saved: Outcome<(), std::io::Error> = ok(());
//! assert!(saved.is_ok());
//!
//! let refused: Outcome<(), &str> = err("permission denied");
//! assert_eq!(refused.error(), Some(&"permission denied"));
//! ```

use crate::traits::IntoFailure;
use crate::types::Outcome;

/// Builds a success outcome holding `value` as-is.
///
/// # Arguments
///
/// * `value` - The success value, `()` for operations that produce nothing
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome};
///
/// let o: Outcome<&str, i32> = ok("Radio");
/// assert_eq!(o.unwrap_or("other"), "Radio");
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Builds a failure outcome.
///
/// The argument is either a payload, used directly, or an outcome that is
/// statically a failure (`Outcome<Infallible, E>`), whose inner payload is
/// taken instead. The second form keeps a re-wrapped failure one level deep.
///
/// # Arguments
///
/// * `failure` - A payload of any type, or a failure outcome to flatten
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Outcome};
/// use std::convert::Infallible;
///
/// let direct: Outcome<i32, u8> = err(7);
/// assert_eq!(direct.error(), Some(&7));
///
/// let previous: Outcome<Infallible, u8> = err(7);
/// let rewrapped: Outcome<i32, u8> = err(previous);
/// assert_eq!(rewrapped.error(), Some(&7));
/// ```
#[inline]
pub fn err<T, E, P>(failure: P) -> Outcome<T, E>
where
    P: IntoFailure<E>,
{
    Outcome::Err(failure.into_failure())
}
