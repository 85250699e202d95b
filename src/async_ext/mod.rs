//! Async extensions for outcome-rail.
//!
//! This module provides the deferred counterparts of the sync adapters:
//! settling a fallible future into an [`Outcome`](crate::Outcome) and
//! capturing panics raised while a future is polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use outcome_rail::prelude_async::*;
//!
//! #[derive(Debug)]
//! struct Record;
//!
//! async fn fetch_record(_id: u64) -> Result<Record, std::io::Error> {
//!     Err(std::io::Error::other("connection reset"))
//! }
//!
//! async fn load(id: u64) -> Outcome<Record, std::io::Error> {
//!     fetch_record(id).capture().await
//! }
//! ```

mod capture_future;
mod catch_panic;
mod future_ext;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use capture_future::CaptureFuture;
pub use catch_panic::CatchPanic;
pub use future_ext::{capture, capture_panic, BoxedAsyncOutcome, CatchPanicExt, FutureCaptureExt};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::capture_task;
