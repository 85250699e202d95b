//! Future wrapper that captures panics raised while polling.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::{Outcome, Panic};

pin_project! {
    /// A Future wrapper that resolves to `Outcome<T, Panic>`.
    ///
    /// Each poll of the inner future runs under `catch_unwind`. A panic ends
    /// the future with `Outcome::Err` holding the payload; the inner future
    /// is never polled again afterwards.
    ///
    /// Created by [`capture_panic`](super::capture_panic) or
    /// [`CatchPanicExt::capture_panic`](super::CatchPanicExt::capture_panic).
    ///
    /// # Panics
    ///
    /// Polling again after the future has resolved panics; check
    /// [`FusedFuture::is_terminated`] first when re-polling is possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::capture_panic;
    ///
    /// async fn example() {
    ///     let outcome = capture_panic(async { panic!("ham and cheese") }).await;
    ///     assert_eq!(outcome.error().and_then(|p| p.message()), Some("ham and cheese"));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchPanic<Fut> {
        #[pin]
        future: Fut,
        terminated: bool,
    }
}

impl<Fut> CatchPanic<Fut> {
    /// Creates a new `CatchPanic` around the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, terminated: false }
    }
}

impl<Fut> Future for CatchPanic<Fut>
where
    Fut: Future,
{
    type Output = Outcome<Fut::Output, Panic>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.terminated, "CatchPanic polled after completion");

        let future = this.future;
        match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.terminated = true;
                Poll::Ready(Outcome::Ok(value))
            },
            Err(payload) => {
                *this.terminated = true;
                let panic = Panic::from_payload(payload);

                #[cfg(feature = "tracing")]
                tracing::warn!(panic = %panic, "captured panic from polled future");

                Poll::Ready(Outcome::Err(panic))
            },
        }
    }
}

impl<Fut> FusedFuture for CatchPanic<Fut>
where
    Fut: Future,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
