//! Classification of failure payloads as error-like or plain values.
//!
//! [`Outcome::unwrap`](crate::Outcome::unwrap) must always raise on a
//! failure. What it raises depends on the payload:
//!
//! - error-like payloads (anything that is already a proper error) are raised
//!   unchanged, so a `catch_unwind` further up can downcast back to the very
//!   value that was stored;
//! - plain values (`0`, `None`, `"text"`, ...) are wrapped in
//!   [`UnwrapError`] so the raise is always diagnosable;
//! - the unit sentinel `()` raises an [`UnwrapError`] carrying nothing.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{impl_failure, err, Outcome};
//! use std::panic::{self, AssertUnwindSafe};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl_failure!(error: Timeout);
//!
//! let outcome: Outcome<(), Timeout> = err(Timeout);
//! let payload = panic::catch_unwind(AssertUnwindSafe(|| outcome.unwrap())).unwrap_err();
//! assert!(payload.is::<Timeout>());
//! ```
use core::any::Any;
use core::fmt::{Debug, Display};
use std::panic;
use std::sync::Arc;

use crate::types::{Panic, UnwrapError};

/// A failure payload that knows how to raise itself.
///
/// Implement it with [`impl_failure!`](crate::impl_failure) for your own
/// types, picking `error:` for types that should propagate unchanged and
/// `value:` for types that should be wrapped in [`UnwrapError`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be raised as an outcome failure",
    label = "this type does not implement `Failure`",
    note = "use `impl_failure!(error: {Self})` or `impl_failure!(value: {Self})` to classify it"
)]
pub trait Failure: Send + 'static {
    /// Raises this payload as a panic. Never returns.
    #[track_caller]
    fn raise(self) -> !;
}

/// Raises an error-like payload unchanged.
#[track_caller]
pub fn raise_error<E>(error: E) -> !
where
    E: Display + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::error!(error = %error, "unwrapped a failed outcome");

    panic::panic_any(error)
}

/// Raises a plain payload wrapped in [`UnwrapError`].
#[track_caller]
pub fn raise_value<V>(value: V) -> !
where
    V: Debug + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::error!(value = ?value, "unwrapped a failed outcome holding a plain value");

    panic::panic_any(UnwrapError::new(value))
}

/// Raises an [`UnwrapError`] with no carried payload.
#[track_caller]
pub fn raise_empty() -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!("unwrapped a failed outcome holding no value");

    panic::panic_any(UnwrapError::<()>::empty())
}

impl Failure for () {
    #[inline]
    fn raise(self) -> ! {
        raise_empty()
    }
}

impl Failure for Panic {
    /// Resumes the captured unwind with its original payload.
    fn raise(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(panic = %self, "unwrapped a captured panic");

        panic::resume_unwind(self.into_payload())
    }
}

impl<V> Failure for UnwrapError<V>
where
    V: Debug + Send + 'static,
{
    #[inline]
    fn raise(self) -> ! {
        raise_error(self)
    }
}

impl<V> Failure for Option<V>
where
    V: Debug + Send + 'static,
{
    #[inline]
    fn raise(self) -> ! {
        raise_value(self)
    }
}

impl<V> Failure for Vec<V>
where
    V: Debug + Send + 'static,
{
    #[inline]
    fn raise(self) -> ! {
        raise_value(self)
    }
}

impl<E> Failure for Arc<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn raise(self) -> ! {
        raise_error(self)
    }
}

impl Failure for Box<dyn std::error::Error + Send + Sync + 'static> {
    #[inline]
    fn raise(self) -> ! {
        raise_error(self)
    }
}

impl Failure for Box<dyn std::error::Error + Send + 'static> {
    #[inline]
    fn raise(self) -> ! {
        raise_error(self)
    }
}

impl Failure for Box<dyn Any + Send + 'static> {
    /// A raw panic payload re-raises exactly as it was caught.
    #[inline]
    fn raise(self) -> ! {
        Panic::from_payload(self).raise()
    }
}

crate::impl_failure!(
    error: std::io::Error,
    core::fmt::Error,
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::num::TryFromIntError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::char::ParseCharError,
    std::string::FromUtf8Error,
    std::sync::mpsc::RecvError,
);

crate::impl_failure!(
    value: bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

#[cfg(feature = "async-tokio")]
crate::impl_failure!(error: tokio::task::JoinError);
