use outcome_rail::{capture_call, err, impl_failure, Outcome, UnwrapError};

use crate::common::raised;

#[derive(Debug, PartialEq)]
struct Quota {
    used: u32,
}

#[derive(Debug)]
struct Throttled;

impl std::fmt::Display for Throttled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("throttled")
    }
}

impl_failure!(value: Quota);
impl_failure!(error: Throttled);

#[test]
fn value_classification_wraps_on_unwrap() {
    let outcome: Outcome<(), Quota> = err(Quota { used: 12 });
    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<Quota>>().unwrap();
    assert_eq!(error.value(), Some(&Quota { used: 12 }));
}

#[test]
fn error_classification_raises_unchanged() {
    let outcome: Outcome<(), Throttled> = err(Throttled);
    let payload = raised(|| outcome.unwrap());
    assert!(payload.is::<Throttled>());
}

#[test]
fn capture_call_without_arguments() {
    let outcome = capture_call!(|| 84349);
    assert_eq!(outcome.unwrap(), 84349);
}

#[test]
fn capture_call_with_arguments() {
    let outcome = capture_call!(|a: i32, b: i32, c: i32| a + b + c, 1, 2, 3);
    assert_eq!(outcome.unwrap(), 6);

    let outcome = capture_call!(|a: u8| a, 9,);
    assert_eq!(outcome.unwrap(), 9);
}

#[test]
fn capture_call_captures_a_panic() {
    let outcome = capture_call!(|divisor: u32| 10 / divisor, 0);
    assert!(outcome.is_err());
}
