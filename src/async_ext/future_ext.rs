//! Capture adapters for futures.
//!
//! Provides [`capture`] and [`capture_panic`], plus the `.capture()` and
//! `.capture_panic()` extension methods mirroring them.

use core::future::Future;
use core::pin::Pin;

use crate::types::Outcome;

use super::capture_future::CaptureFuture;
use super::catch_panic::CatchPanic;

/// A boxed future resolving to an [`Outcome`].
///
/// Handy as the return type of trait methods and recursive async functions.
pub type BoxedAsyncOutcome<'a, T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send + 'a>>;

/// Settles a fallible future into an [`Outcome`].
///
/// The returned future resolves once `future` resolves: `Ok(v)` becomes
/// `Outcome::Ok(v)` and `Err(e)` becomes `Outcome::Err(e)`. Nothing is raised,
/// and calling `capture` does not poll `future`.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::capture;
///
/// async fn example() {
///     let outcome = capture(async { Err::<u32, _>("rejected") }).await;
///     assert_eq!(outcome.error(), Some(&"rejected"));
/// }
/// ```
#[inline]
pub fn capture<Fut, T, E>(future: Fut) -> CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    CaptureFuture::new(future)
}

/// Runs a future, capturing a panic raised while polling it.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::capture_panic;
///
/// async fn example() {
///     let outcome = capture_panic(async { 84349 }).await;
///     assert_eq!(outcome.unwrap(), 84349);
/// }
/// ```
#[inline]
pub fn capture_panic<Fut>(future: Fut) -> CatchPanic<Fut>
where
    Fut: Future,
{
    CatchPanic::new(future)
}

/// Extension trait settling `Future<Output = Result<T, E>>` into an [`Outcome`].
///
/// # Examples
///
/// ```rust,no_run
/// use outcome_rail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn fetch_user(id: u64) -> Outcome<User, std::io::Error> {
///     fetch_from_db(id).capture().await
/// }
/// ```
pub trait FutureCaptureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future so it resolves to an [`Outcome`].
    #[inline]
    fn capture(self) -> CaptureFuture<Self> {
        CaptureFuture::new(self)
    }
}

impl<Fut, T, E> FutureCaptureExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}

/// Extension trait capturing panics from any future.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn example() {
///     let outcome = async { vec![1, 2, 3] }.capture_panic().await;
///     assert_eq!(outcome.unwrap_or_default().len(), 3);
/// }
/// ```
pub trait CatchPanicExt: Future + Sized {
    /// Wraps the future so panics resolve to `Outcome::Err`.
    #[inline]
    fn capture_panic(self) -> CatchPanic<Self> {
        CatchPanic::new(self)
    }
}

impl<Fut> CatchPanicExt for Fut where Fut: Future {}
