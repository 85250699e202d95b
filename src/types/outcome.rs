#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Failure;
use crate::types::BoxError;

/// Value-based outcome of an operation that may fail.
///
/// `Outcome<T, E>` holds exactly one of a success value `T` or a failure
/// payload `E`. Unlike a raised panic, the failure travels as an ordinary
/// value, and its type is chosen by the caller rather than being fixed to a
/// single error hierarchy.
///
/// An outcome never changes variant after construction: there are no
/// mutating methods, only inspection and consuming conversions.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure payload type, [`BoxError`] by default
///
/// # Variants
///
/// * `Ok(T)` - Contains the computed value
/// * `Err(E)` - Contains the failure payload
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ok, Outcome};
///
/// let success: Outcome<i32, &str> = ok(42);
/// assert!(success.is_ok());
/// assert_eq!(success.unwrap_or(0), 42);
///
/// let failure: Outcome<i32, &str> = err("boom");
/// assert!(failure.is_err());
/// assert_eq!(failure.unwrap_or(0), 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E = BoxError> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome holds a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Ok(1);
    /// assert!(o.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome holds a failure payload.
    ///
    /// Always the negation of [`is_ok`](Self::is_ok).
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the success value, or `alternate` on failure.
    ///
    /// Never raises; the failure payload is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(5).unwrap_or(1), 5);
    /// assert_eq!(Outcome::<i32, &str>::Err("no").unwrap_or(1), 1);
    /// ```
    #[inline]
    pub fn unwrap_or(self, alternate: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => alternate,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns a reference to the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, i32>::Ok("value");
    /// assert_eq!(o.value(), Some(&"value"));
    /// assert_eq!(o.error(), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the failure payload, if any.
    #[must_use]
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the success value if present.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure payload if present.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows both payload slots.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::Ok(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Ok(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a computation that may fail, running it only on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 { ok(x / 2) } else { err("odd") }
    /// }
    ///
    /// assert_eq!(ok(8).and_then(halve), Outcome::Ok(4));
    /// assert_eq!(ok(3).and_then(halve), Outcome::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from a failure, running `f` only when the outcome is `Err`.
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Converts into the standard library [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<T, E>
where
    E: Failure,
{
    /// Returns the success value, raising the failure otherwise.
    ///
    /// On `Err` this never returns. The payload is raised according to its
    /// [`Failure`] implementation: error-like payloads become the panic
    /// payload unchanged, so `catch_unwind` can downcast back to `E`; plain
    /// values are wrapped in [`UnwrapError`](crate::UnwrapError) first.
    ///
    /// # Panics
    ///
    /// Panics whenever the outcome is `Err`. Guard with
    /// [`is_ok`](Self::is_ok) or use [`unwrap_or`](Self::unwrap_or) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome, UnwrapError};
    /// use std::panic::{self, AssertUnwindSafe};
    ///
    /// let success: Outcome<i32, i32> = ok(7);
    /// assert_eq!(success.unwrap(), 7);
    ///
    /// let failure: Outcome<i32, i32> = err(0);
    /// let payload = panic::catch_unwind(AssertUnwindSafe(|| failure.unwrap())).unwrap_err();
    /// let raised = payload.downcast::<UnwrapError<i32>>().unwrap();
    /// assert_eq!(raised.value(), Some(&0));
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => error.raise(),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting from a success holding another outcome.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
