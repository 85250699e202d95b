//! Value-based outcomes for operations that may fail.
//!
//! [`Outcome<T, E>`] holds either a success value or a failure payload of a
//! caller-chosen type. The capture adapters turn raising code into outcomes:
//! [`capture_fn`] for synchronous calls and, with the `async` feature,
//! [`async_ext::capture`] for futures.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and Inspecting Outcomes
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! let found: Outcome<u32, &str> = ok(1000);
//! assert!(found.is_ok());
//! assert_eq!(found.unwrap(), 1000);
//!
//! let missing: Outcome<u32, &str> = err("not found");
//! assert!(missing.is_err());
//! assert_eq!(missing.unwrap_or(0), 0);
//! ```
//!
//! ## Unwrapping a Failure
//!
//! ```
//! use outcome_rail::{err, Outcome, UnwrapError};
//! use std::panic::{self, AssertUnwindSafe};
//!
//! let failure: Outcome<u32, Option<u32>> = err(None);
//! let raised = panic::catch_unwind(AssertUnwindSafe(|| failure.unwrap())).unwrap_err();
//! let unwrap_error = raised.downcast::<UnwrapError<Option<u32>>>().unwrap();
//! assert_eq!(unwrap_error.value(), Some(&None));
//! ```
//!
//! ## Capturing a Panicking Call
//!
//! ```
//! use outcome_rail::capture_fn;
//!
//! let total = capture_fn(|a: i32, b: i32, c: i32| a + b + c, (1, 2, 3));
//! assert_eq!(total.unwrap(), 6);
//!
//! let failed = capture_fn(|| -> i32 { panic!("Splat") }, ());
//! assert!(failed.is_err());
//! ```

/// Synchronous capture of panicking calls
pub mod capture;
/// Outcome construction helpers
pub mod convert;
/// Macros for failure classification and variadic capture
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits behind unwrapping, flattening and capture
pub mod traits;
/// Outcome, UnwrapError and Panic
pub mod types;

/// Async capture adapters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use capture::capture_fn;
pub use convert::{err, ok};
pub use traits::{Call, Failure, IntoFailure};
pub use types::{BoxError, Outcome, Panic, UnwrapError};
