//! Tests for `capture` and `FutureCaptureExt`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use outcome_rail::prelude_async::*;

use crate::common::{noop_waker, Boom};

#[test]
fn capture_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<CaptureFuture<std::future::Ready<Result<(), ()>>>>();
    assert_sync::<CaptureFuture<std::future::Ready<Result<(), ()>>>>();
}

#[tokio::test]
async fn capture_wraps_a_resolved_future() {
    let outcome = capture(std::future::ready(Ok::<_, Boom>(1000))).await;

    assert!(outcome.is_ok());
    assert_eq!(outcome.value(), Some(&1000));
}

#[tokio::test]
async fn capture_wraps_a_rejected_future() {
    let error = Arc::new(Boom("Ham and Cheese"));
    let rejected = Arc::clone(&error);
    let outcome = capture(async move { Err::<u32, _>(rejected) }).await;

    assert!(outcome.is_err());
    assert!(Arc::ptr_eq(outcome.error().unwrap(), &error));
}

#[tokio::test]
async fn capture_ext_method_matches_free_function() {
    let outcome = async { Err::<u32, _>("rejected") }.capture().await;
    assert_eq!(outcome, Outcome::Err("rejected"));

    let outcome = async { Ok::<_, &str>(7) }.capture().await;
    assert_eq!(outcome, Outcome::Ok(7));
}

#[tokio::test]
async fn capture_does_not_poll_until_awaited() {
    let polls = AtomicU32::new(0);
    let wrapped = capture(async {
        polls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, &str>(())
    });

    assert_eq!(polls.load(Ordering::SeqCst), 0);
    assert!(wrapped.await.is_ok());
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn capture_settles_after_the_input() {
    let outcome = capture(async {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        Ok::<_, &str>("late")
    })
    .await;

    assert_eq!(outcome.unwrap_or("early"), "late");
}

#[test]
fn capture_stays_pending_with_its_input() {
    struct PendingFuture;
    impl Future for PendingFuture {
        type Output = Result<i32, &'static str>;
        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
            Poll::Pending
        }
    }

    let mut wrapped = capture(PendingFuture);
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    assert!(Pin::new(&mut wrapped).poll(&mut cx).is_pending());
}

#[test]
fn capture_future_forwards_termination() {
    struct Done;
    impl Future for Done {
        type Output = Result<(), ()>;
        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
            Poll::Ready(Ok(()))
        }
    }
    impl FusedFuture for Done {
        fn is_terminated(&self) -> bool {
            true
        }
    }

    assert!(CaptureFuture::new(Done).is_terminated());
}

#[tokio::test]
async fn boxed_async_outcome_erases_the_future() {
    fn load(id: u32) -> BoxedAsyncOutcome<'static, u32, &'static str> {
        Box::pin(async move { if id == 0 { Err("zero") } else { Ok(id) } }.capture())
    }

    assert_eq!(load(3).await, Outcome::Ok(3));
    assert_eq!(load(0).await, Outcome::Err("zero"));
}
