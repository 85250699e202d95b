//! Core traits behind outcome construction, unwrapping and capture.
//!
//! - [`Failure`]: How a failure payload is raised by `unwrap`
//! - [`IntoFailure`]: What `err` accepts, flattening failure outcomes
//! - [`Call`]: Invocation with a tuple of arguments, used by `capture_fn`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Call, IntoFailure};
//!
//! let payload: &str = "refused".into_failure();
//! assert_eq!(payload, "refused");
//!
//! assert_eq!((|x: u8| x + 1).invoke((1,)), 2);
//! ```

pub mod call;
pub mod failure;
pub mod into_failure;

pub use call::Call;
pub use failure::Failure;
pub use into_failure::IntoFailure;
