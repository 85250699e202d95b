//! Outcome container and the values raised or captured around it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! let parsed: Outcome<u16, std::num::ParseIntError> = "8080".parse::<u16>().into();
//! assert_eq!(parsed.unwrap(), 8080);
//!
//! let missing: Outcome<u16, Option<&str>> = err(None);
//! assert_eq!(missing.unwrap_or(80), 80);
//! # let _: Outcome<(), ()> = ok(());
//! ```
pub mod outcome;
pub mod panic;
pub mod unwrap_error;

pub use outcome::*;
pub use panic::*;
pub use unwrap_error::*;

/// The host's general-purpose error type, used as the default failure payload.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
