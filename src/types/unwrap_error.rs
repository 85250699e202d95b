use core::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raised by [`Outcome::unwrap`](crate::Outcome::unwrap) when the failure
/// payload is not error-like.
///
/// Plain payloads such as `0`, `None` or a string slice carry no error
/// semantics of their own, so they are wrapped here to give the raise a
/// diagnosable error type. The offending payload is kept in
/// [`value`](Self::value); it is `None` when the payload was the unit
/// sentinel `()`.
///
/// # Examples
///
/// ```
/// use outcome_rail::UnwrapError;
///
/// let error = UnwrapError::new("Television");
/// assert_eq!(error.value(), Some(&"Television"));
/// assert_eq!(error.to_string(), "Result is not Ok.");
///
/// let empty = UnwrapError::<()>::empty();
/// assert!(empty.value().is_none());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UnwrapError<V> {
    value: Option<V>,
}

impl<V> UnwrapError<V> {
    /// Wraps a failure payload.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an error carrying no payload.
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Returns the carried payload, if any.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consumes the error, returning the carried payload.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

impl<V> Default for UnwrapError<V> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Display for UnwrapError<V> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Result is not Ok.")
    }
}

impl<V: Debug> std::error::Error for UnwrapError<V> {}
