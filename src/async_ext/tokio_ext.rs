//! Tokio integration for outcome capture.
//!
//! A spawned task already isolates its panic: awaiting its `JoinHandle`
//! yields a `JoinError` instead of unwinding into the caller. This module
//! turns that join result into an `Outcome<T, Panic>` whose payload is the
//! task's original panic value.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use tokio::task::{JoinError, JoinHandle};

use crate::types::{Outcome, Panic};

use super::future_ext::capture;

/// Awaits a spawned task, resolving to its value or its panic payload.
///
/// A cancelled task has no panic payload; its `JoinError` becomes the
/// payload instead.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::capture_task;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = capture_task(tokio::spawn(async { 1000 })).await;
///     assert_eq!(outcome.unwrap(), 1000);
///
///     let outcome = capture_task(tokio::spawn(async { panic!("Splat") })).await;
///     let message = outcome.error().and_then(|panic| panic.message());
///     assert_eq!(message, Some("Splat"));
/// }
/// ```
pub async fn capture_task<T>(handle: JoinHandle<T>) -> Outcome<T, Panic> {
    capture(handle).await.map_err(Panic::from)
}

impl From<JoinError> for Panic {
    fn from(error: JoinError) -> Self {
        match error.try_into_panic() {
            Ok(payload) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("captured panic from spawned task");

                Self::from_payload(payload)
            },
            Err(error) => Self::new(error),
        }
    }
}
