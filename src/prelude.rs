//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`capture_call!`], [`impl_failure!`]
//! - **Types**: [`Outcome`], [`Panic`], [`UnwrapError`], [`BoxError`]
//! - **Functions**: [`ok`], [`err`], [`capture_fn`]
//! - **Traits**: [`Failure`], [`IntoFailure`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16, std::num::ParseIntError> {
//!     raw.parse::<u16>().into()
//! }
//!
//! assert_eq!(port("8080").unwrap_or(80), 8080);
//! assert_eq!(port("http").unwrap_or(80), 80);
//! ```

// Macros
pub use crate::{capture_call, impl_failure};

// Core types
pub use crate::types::{BoxError, Outcome, Panic, UnwrapError};

// Functions
pub use crate::capture::capture_fn;
pub use crate::convert::{err, ok};

// Traits
pub use crate::traits::{Failure, IntoFailure};
