//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async capture adapters.
//!
//! # Usage
//!
//! ```rust,no_run
//! use outcome_rail::prelude_async::*;
//!
//! #[derive(Debug)]
//! struct User;
//!
//! async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
//!     Err(std::io::Error::other("connection reset"))
//! }
//!
//! async fn fetch_user(id: u64) -> Outcome<User, std::io::Error> {
//!     fetch_from_db(id).capture().await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`capture_call!`], [`impl_failure!`]
//! - **Types**: [`Outcome`], [`Panic`], [`UnwrapError`], [`BoxError`]
//! - **Functions**: [`ok`], [`err`], [`capture_fn`]
//!
//! ## Async-Specific
//!
//! - **Functions**: [`capture`](crate::async_ext::capture), [`capture_panic`](crate::async_ext::capture_panic)
//! - **Traits**: [`FutureCaptureExt`](crate::async_ext::FutureCaptureExt), [`CatchPanicExt`](crate::async_ext::CatchPanicExt)
//! - **Types**: [`CaptureFuture`](crate::async_ext::CaptureFuture), [`CatchPanic`](crate::async_ext::CatchPanic)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    capture, capture_panic, BoxedAsyncOutcome, CaptureFuture, CatchPanic, CatchPanicExt,
    FutureCaptureExt,
};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::capture_task;
