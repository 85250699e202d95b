use core::any::Any;
use core::fmt::{self, Debug, Display};

/// Owned payload of an intercepted panic.
///
/// The capture adapters store whatever value was raised, whatever its type,
/// so callers can inspect it with [`downcast_ref`](Self::downcast_ref) or take
/// it back with [`downcast`](Self::downcast). Unwrapping an
/// `Outcome<_, Panic>` resumes the original unwind with this same payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{capture_fn, Panic};
///
/// let outcome = capture_fn(|| -> i32 { panic!("splat") }, ());
/// let panic: &Panic = outcome.error().unwrap();
/// assert_eq!(panic.message(), Some("splat"));
/// ```
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// Boxes an arbitrary value as a panic payload.
    #[inline]
    pub fn new<P>(payload: P) -> Self
    where
        P: Any + Send,
    {
        Self::from_payload(Box::new(payload))
    }

    /// Wraps a payload as returned by [`std::panic::catch_unwind`].
    #[inline]
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a `&str` or a `String`.
    ///
    /// This covers every panic raised through `panic!` with a format string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Returns `true` if the payload is of type `P`.
    #[must_use]
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Borrows the payload as `P`, if it is one.
    #[must_use]
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Takes the payload back as `P`, returning `self` unchanged on mismatch.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// Returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl From<Box<dyn Any + Send + 'static>> for Panic {
    #[inline]
    fn from(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self::from_payload(payload)
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("Box<dyn Any>"),
        }
    }
}

impl std::error::Error for Panic {}
