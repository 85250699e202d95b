//! Synchronous capture of raising calls.
//!
//! [`capture_fn`] runs a callable inline and turns a panic into an
//! `Outcome::Err` holding the panic payload, whatever its type. Nothing is
//! re-raised from the adapter itself.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::capture_fn;
//!
//! let parsed = capture_fn(|s: &str| s.parse::<u32>().unwrap(), ("17",));
//! assert_eq!(parsed.unwrap(), 17);
//!
//! let broken = capture_fn(|s: &str| s.parse::<u32>().unwrap(), ("x",));
//! assert!(broken.is_err());
//! ```
use std::panic::{self, AssertUnwindSafe};

use crate::convert::{err, ok};
use crate::traits::Call;
use crate::types::{Outcome, Panic};

/// Invokes `f` with `args` immediately, capturing a panic as the failure.
///
/// Returns `Ok` with the return value on normal completion, or `Err` with
/// the raised [`Panic`] payload. The call happens on the current thread with
/// no suspension; any blocking or side effects are the callable's own.
///
/// The callable is treated as unwind safe. If it panics halfway through
/// mutating shared state, that state is observable afterwards as it was left.
///
/// The default panic hook still runs, so the panic message is printed as
/// usual before it is captured.
///
/// # Arguments
///
/// * `f` - Any `FnOnce` of up to eight parameters
/// * `args` - The arguments as a tuple; `()` for none, `(x,)` for one
///
/// # Examples
///
/// ```
/// use outcome_rail::capture_fn;
/// use std::panic;
///
/// #[derive(Debug, PartialEq)]
/// struct Splat(u32);
///
/// let outcome = capture_fn(|| -> u32 { panic::panic_any(Splat(9)) }, ());
/// let panic = outcome.into_error().unwrap();
/// assert_eq!(panic.downcast::<Splat>().unwrap(), Splat(9));
///
/// let sum = capture_fn(|a: i32, b: i32, c: i32| a + b + c, (1, 2, 3));
/// assert_eq!(sum.unwrap(), 6);
/// ```
pub fn capture_fn<F, A>(f: F, args: A) -> Outcome<F::Output, Panic>
where
    F: Call<A>,
{
    match panic::catch_unwind(AssertUnwindSafe(move || f.invoke(args))) {
        Ok(value) => ok(value),
        Err(payload) => {
            let panic = Panic::from_payload(payload);

            #[cfg(feature = "tracing")]
            tracing::warn!(panic = %panic, "captured panic from synchronous call");

            err(panic)
        },
    }
}
