//! Future wrapper that settles a fallible future into an [`Outcome`].
//!
//! This module provides `CaptureFuture`, which wraps a
//! `Future<Output = Result<T, E>>` and always resolves to `Outcome<T, E>`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::Outcome;

pin_project! {
    /// A Future wrapper that resolves to an [`Outcome`] instead of a `Result`.
    ///
    /// Created by [`capture`](super::capture) or
    /// [`FutureCaptureExt::capture`](super::FutureCaptureExt::capture).
    ///
    /// # Cancel Safety
    ///
    /// `CaptureFuture` is cancel-safe if the inner future is cancel-safe. It
    /// adds no scheduling, timeout or cancellation of its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::capture;
    ///
    /// async fn example() {
    ///     let outcome = capture(async { Ok::<_, &str>(1000) }).await;
    ///     assert_eq!(outcome.value(), Some(&1000));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> CaptureFuture<Fut> {
    /// Creates a new `CaptureFuture` around the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }

    /// Consumes the wrapper, returning the inner future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<Fut, T, E> Future for CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::from)
    }
}

impl<Fut, T, E> FusedFuture for CaptureFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
