use std::sync::Arc;

use outcome_rail::{err, ok, Outcome, UnwrapError};

use crate::common::{raised, Boom, Reading};

#[test]
fn ok_outcome_exposes_only_the_value() {
    let outcome: Outcome<i32, &str> = ok(9999);

    assert!(outcome.is_ok());
    assert!(!outcome.is_err());
    assert_eq!(outcome.value(), Some(&9999));
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.unwrap_or(1), 9999);
    assert_eq!(outcome.unwrap(), 9999);
}

#[test]
fn ok_accepts_unit_and_error_values() {
    let unit: Outcome<(), &str> = ok(());
    assert!(unit.is_ok());
    assert_eq!(unit.unwrap(), ());

    let still_ok: Outcome<Boom, &str> = ok(Boom("But still OK?"));
    assert!(still_ok.is_ok());
    assert_eq!(still_ok.unwrap(), Boom("But still OK?"));
}

#[test]
fn err_outcome_exposes_only_the_payload() {
    let outcome: Outcome<i32, &str> = err("Boom!");

    assert!(outcome.is_err());
    assert!(!outcome.is_ok());
    assert_eq!(outcome.error(), Some(&"Boom!"));
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.unwrap_or(1), 1);
}

#[test]
fn inspection_is_idempotent() {
    let success: Outcome<i32, &str> = ok(5);
    let failure: Outcome<i32, &str> = err("no");

    for _ in 0..3 {
        assert!(success.is_ok());
        assert!(!success.is_err());
        assert_eq!(success.unwrap_or(0), 5);

        assert!(failure.is_err());
        assert!(!failure.is_ok());
        assert_eq!(failure.unwrap_or(0), 0);
    }
}

#[test]
fn unwrap_raises_error_like_payload_unchanged() {
    let error = Arc::new(Boom("Boom!"));
    let outcome: Outcome<i32, Arc<Boom>> = err(Arc::clone(&error));

    let payload = raised(|| outcome.unwrap());
    let propagated = payload.downcast::<Arc<Boom>>().unwrap();
    assert!(Arc::ptr_eq(&propagated, &error));
}

#[test]
fn unwrap_raises_custom_error_without_wrapping() {
    let outcome: Outcome<(), Boom> = err(Boom("disk"));

    let payload = raised(|| outcome.unwrap());
    assert!(!payload.is::<UnwrapError<Boom>>());
    assert_eq!(*payload.downcast::<Boom>().unwrap(), Boom("disk"));
}

#[test]
fn unwrap_raises_io_error_unchanged() {
    let outcome: Outcome<String, std::io::Error> =
        err(std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml"));

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<std::io::Error>().unwrap();
    assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
    assert_eq!(error.to_string(), "config.toml");
}

#[test]
fn unwrap_wraps_plain_zero() {
    let outcome: Outcome<i32, i32> = err(0);

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<i32>>().unwrap();
    assert_eq!(error.value(), Some(&0));
    assert!(error.to_string().to_lowercase().contains("result is not ok"));
}

#[test]
fn unwrap_wraps_empty_string() {
    let outcome: Outcome<i32, &'static str> = err("");

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<&'static str>>().unwrap();
    assert_eq!(error.value(), Some(&""));
}

#[test]
fn unwrap_wraps_none() {
    let outcome: Outcome<i32, Option<u8>> = err(None);

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<Option<u8>>>().unwrap();
    assert_eq!(error.value(), Some(&None));
}

#[test]
fn unwrap_of_unit_payload_carries_nothing() {
    let outcome: Outcome<i32, ()> = err(());

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<()>>().unwrap();
    assert!(error.value().is_none());
    assert!(error.to_string().to_lowercase().contains("not ok"));
}

#[test]
fn unwrap_wraps_structured_value() {
    let reading = Reading { sensor: 3, celsius: -40 };
    let outcome: Outcome<(), Reading> = err(reading.clone());

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<UnwrapError<Reading>>().unwrap();
    assert_eq!(error.into_value(), Some(reading));
}

#[test]
fn unwrap_of_boxed_error_keeps_the_box() {
    let outcome: Outcome<u8> = err(outcome_rail::BoxError::from("sensor offline"));

    let payload = raised(|| outcome.unwrap());
    let error = payload.downcast::<outcome_rail::BoxError>().unwrap();
    assert_eq!(error.to_string(), "sensor offline");
}

#[test]
fn unwrap_or_else_receives_the_payload() {
    let outcome: Outcome<usize, &str> = err("four");
    assert_eq!(outcome.unwrap_or_else(str::len), 4);

    let outcome: Outcome<usize, &str> = ok(1);
    assert_eq!(outcome.unwrap_or_else(str::len), 1);
}

#[test]
fn unwrap_or_default_on_failure() {
    let outcome: Outcome<Vec<u8>, &str> = err("empty");
    assert!(outcome.unwrap_or_default().is_empty());
}

#[test]
fn into_value_and_into_error_are_exclusive() {
    let success: Outcome<i32, &str> = ok(1);
    assert_eq!(success.into_value(), Some(1));
    assert_eq!(success.into_error(), None);

    let failure: Outcome<i32, &str> = err("x");
    assert_eq!(failure.into_value(), None);
    assert_eq!(failure.into_error(), Some("x"));
}

#[test]
fn combinators_follow_the_active_variant() {
    let success: Outcome<i32, &str> = ok(2);
    assert_eq!(success.map(|x| x * 10), Outcome::Ok(20));
    assert_eq!(success.map_err(str::len), Outcome::Ok(2));
    assert_eq!(
        success.and_then(|x| Outcome::<i32, &str>::Err(if x > 1 { "big" } else { "small" })),
        Outcome::Err("big")
    );
    assert_eq!(success.or_else(|_| Outcome::<i32, ()>::Ok(0)), Outcome::Ok(2));

    let failure: Outcome<i32, &str> = err("bad");
    assert_eq!(failure.map(|x| x * 10), Outcome::Err("bad"));
    assert_eq!(failure.map_err(str::len), Outcome::Err(3));
    assert_eq!(failure.and_then(|x| Outcome::<i32, &str>::Ok(x + 1)), Outcome::Err("bad"));
    assert_eq!(failure.or_else(|_| Outcome::<i32, ()>::Ok(0)), Outcome::Ok(0));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let outcome: Outcome<String, String> = ok("Radio".to_string());
    assert_eq!(outcome.as_ref().map(String::len), Outcome::Ok(5));
    assert_eq!(outcome.value().map(String::as_str), Some("Radio"));
}

#[test]
fn flatten_removes_one_level() {
    let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(7));
    assert_eq!(nested.flatten(), Outcome::Ok(7));

    let inner_failure: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
    assert_eq!(inner_failure.flatten(), Outcome::Err("inner"));

    let outer_failure: Outcome<Outcome<i32, &str>, &str> = err("outer");
    assert_eq!(outer_failure.flatten(), Outcome::Err("outer"));
}

#[test]
fn converts_to_and_from_std_result() {
    let outcome: Outcome<i32, &str> = Ok::<_, &str>(3).into();
    assert_eq!(outcome, Outcome::Ok(3));

    let outcome: Outcome<i32, &str> = Err::<i32, _>("nope").into();
    assert_eq!(outcome, Outcome::Err("nope"));

    let result: Result<i32, &str> = outcome.into();
    assert_eq!(result, Err("nope"));
    assert_eq!(Outcome::<i32, &str>::Ok(1).into_result(), Ok(1));
}
