//! Invocation of a callable with its arguments packed in a tuple.
//!
//! Rust has no variadic functions, so [`capture_fn`](crate::capture_fn) takes
//! the arguments as a tuple and dispatches through [`Call`]. The tuple's
//! arity and element types are checked against the callable at compile time.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::Call;
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(add.invoke((2, 3)), 5);
//!
//! let constant = || "fixed";
//! assert_eq!(constant.invoke(()), "fixed");
//! ```

/// A callable that can be invoked once with the argument tuple `A`.
///
/// Implemented for every `FnOnce` taking up to eight arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{A}`",
    label = "argument tuple does not match the callable's parameters"
)]
pub trait Call<A> {
    /// The callable's return type.
    type Output;

    /// Invokes the callable, spreading `args` as its parameters.
    fn invoke(self, args: A) -> Self::Output;
}

macro_rules! impl_call {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Call<($($arg,)*)> for F
        where
            F: FnOnce($($arg),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_call!();
impl_call!(A1);
impl_call!(A1, A2);
impl_call!(A1, A2, A3);
impl_call!(A1, A2, A3, A4);
impl_call!(A1, A2, A3, A4, A5);
impl_call!(A1, A2, A3, A4, A5, A6);
impl_call!(A1, A2, A3, A4, A5, A6, A7);
impl_call!(A1, A2, A3, A4, A5, A6, A7, A8);
