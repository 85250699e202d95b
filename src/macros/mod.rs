//! Declarative helpers for classifying failure payloads and capturing calls.
//!
//! - [`macro@crate::impl_failure`] - Implements [`Failure`](crate::traits::Failure)
//!   for one or more types, either as error-like (`error:`) or as plain
//!   values (`value:`).
//! - [`macro@crate::capture_call`] - Calls a function with a variadic argument
//!   list through [`capture_fn`](crate::capture_fn).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{capture_call, impl_failure, err, Outcome};
//!
//! #[derive(Debug)]
//! struct Code(u16);
//!
//! impl_failure!(value: Code);
//!
//! let failure: Outcome<(), Code> = err(Code(404));
//! assert_eq!(failure.error().map(|code| code.0), Some(404));
//!
//! let sum = capture_call!(|a: i32, b: i32| a + b, 40, 2);
//! assert_eq!(sum.unwrap(), 42);
//! ```

/// Implements [`Failure`](crate::traits::Failure) for the listed types.
///
/// # Syntax
///
/// - `impl_failure!(error: A, B, ...)` - the types are error-like and raise
///   unchanged from [`Outcome::unwrap`](crate::Outcome::unwrap). Each type
///   must implement `Display + Send + 'static`.
/// - `impl_failure!(value: A, B, ...)` - the types are plain values and raise
///   wrapped in [`UnwrapError`](crate::UnwrapError). Each type must implement
///   `Debug + Send + 'static`.
///
/// # Examples
///
/// ```
/// use outcome_rail::impl_failure;
/// use std::fmt;
///
/// #[derive(Debug)]
/// enum DbError {
///     Unavailable,
/// }
///
/// impl fmt::Display for DbError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("database unavailable")
///     }
/// }
///
/// impl std::error::Error for DbError {}
///
/// impl_failure!(error: DbError);
/// ```
#[macro_export]
macro_rules! impl_failure {
    (error: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Failure for $ty {
                #[inline]
                fn raise(self) -> ! {
                    $crate::traits::failure::raise_error(self)
                }
            }
        )+
    };
    (value: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Failure for $ty {
                #[inline]
                fn raise(self) -> ! {
                    $crate::traits::failure::raise_value(self)
                }
            }
        )+
    };
}

/// Calls `f` with a variadic argument list, capturing any panic.
///
/// Expands to [`capture_fn`](crate::capture_fn) with the arguments packed
/// into a tuple, so `capture_call!(f, a, b)` is `capture_fn(f, (a, b))`.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture_call;
///
/// let answer = capture_call!(|| 84349);
/// assert_eq!(answer.unwrap(), 84349);
///
/// let total = capture_call!(|a: i32, b: i32, c: i32| a + b + c, 1, 2, 3);
/// assert_eq!(total.unwrap(), 6);
/// ```
#[macro_export]
macro_rules! capture_call {
    ($f:expr $(,)?) => {
        $crate::capture_fn($f, ())
    };
    ($f:expr, $($arg:expr),+ $(,)?) => {
        $crate::capture_fn($f, ($($arg,)+))
    };
}
