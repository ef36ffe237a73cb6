//! Behaviour of the success variant, with and without a value.
use rop_result::{ExtractError, Outcome, Variant, empty, err, ok};

const STATIC_1337: &str = "1337";

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

fn panic_for_value<T: std::fmt::Debug>(value: &T) {
    panic!("{:?}", value);
}

#[test]
fn ok_returns_value() {
    let res: Outcome<i32, bool> = ok(3);
    assert_eq!(res.ok(), Some(3));
}

#[test]
fn ok_on_empty_returns_none() {
    let res: Outcome<i32, bool> = empty();
    assert_eq!(res.ok(), None);
}

#[test]
fn err_returns_none() {
    let res: Outcome<i32, bool> = ok(3);
    assert_eq!(res.err(), None);
}

#[test]
fn predicates() {
    let res: Outcome<i32, bool> = ok(3);
    assert!(res.is_ok());
    assert!(!res.is_err());
    assert!(res.has_value());
    assert_eq!(res.variant(), Variant::Ok);
}

#[test]
fn has_value_on_empty() {
    let res: Outcome<i32, bool> = empty();
    assert!(res.is_ok());
    assert!(!res.has_value());
}

#[test]
fn get_ok() {
    let res: Outcome<&str, bool> = ok("3");
    assert_eq!(res.get_ok(), Ok("3"));
}

#[test]
fn get_ok_on_empty() {
    init_logger();
    let res: Outcome<i32, bool> = empty();
    assert_eq!(res.get_ok(), Err(ExtractError::EmptyResult));
}

#[test]
fn get_err() {
    init_logger();
    let res: Outcome<i32, bool> = ok(3);
    assert_eq!(res.get_err(), Err(ExtractError::OkHasNoErr));
    let res: Outcome<i32, bool> = empty();
    assert_eq!(res.get_err(), Err(ExtractError::OkHasNoErr));
}

#[test]
fn map() -> rop_result::Result<()> {
    let res: Outcome<i32, bool> = ok(3);
    assert_eq!(res.map(|x| x * x)?, ok(9));
    Ok(())
}

#[test]
fn map_on_empty() {
    let res: Outcome<i32, bool> = empty();
    assert_eq!(res.map(|x| x * x), Err(ExtractError::EmptyResult));
}

#[test]
fn and_then() -> rop_result::Result<()> {
    let res: Outcome<i32, bool> = ok(3);
    assert_eq!(res.and_then(|x| ok(x.to_string()))?, ok("3".to_string()));
    Ok(())
}

#[test]
fn and_then_on_empty() {
    let res: Outcome<i32, bool> = empty();
    assert_eq!(res.and_then(ok::<i32, bool>), Err(ExtractError::EmptyResult));
}

#[test]
fn map_err_is_noop() {
    let res: Outcome<i32, bool> = ok(42);
    assert_eq!(res.map_err(|x| !x), ok(42));
}

#[test]
fn or_else_is_noop() {
    let res: Outcome<i32, bool> = ok(42);
    assert_eq!(res.or_else(|x| err::<i32, bool>(!x)), ok(42));
}

#[test]
#[should_panic(expected = "42")]
fn if_ok_propagates_consumer_panic() {
    let res: Outcome<i32, bool> = ok(42);
    res.if_ok(panic_for_value);
}

#[test]
fn if_ok_sees_value() {
    let res: Outcome<i32, bool> = ok(42);
    let mut seen = None;
    res.if_ok(|x| seen = Some(*x));
    assert_eq!(seen, Some(42));
}

#[test]
fn if_err_is_noop() {
    let res: Outcome<i32, bool> = ok(42);
    res.if_err(panic_for_value);
}

#[test]
fn unwrap_or() {
    let res: Outcome<&str, bool> = ok("42");
    assert_eq!(res.unwrap_or(STATIC_1337), "42");
    let res: Outcome<&str, bool> = empty();
    assert_eq!(res.unwrap_or(STATIC_1337), STATIC_1337);
}

#[test]
fn unwrap_err_or() {
    let res: Outcome<i32, bool> = ok(42);
    assert!(!res.unwrap_err_or(false));
}

#[test]
fn unwrap_or_else() {
    let res: Outcome<&str, bool> = ok("42");
    assert_eq!(res.unwrap_or_else(|| STATIC_1337), "42");
    let res: Outcome<&str, bool> = empty();
    assert_eq!(res.unwrap_or_else(|| STATIC_1337), STATIC_1337);
}

#[test]
fn unwrap_err_or_else() {
    let res: Outcome<&str, bool> = ok("42");
    assert!(res.unwrap_err_or_else(|| true));
}

#[test]
fn ok_or_else() {
    let res: Outcome<&str, bool> = ok("42");
    assert_eq!(res.ok_or_else(|| "missing"), Ok("42"));
    let res: Outcome<&str, bool> = empty();
    assert_eq!(res.ok_or_else(|| "missing"), Err("missing"));
}

#[test]
fn err_or_else() {
    let res: Outcome<&str, bool> = ok("42");
    assert_eq!(res.err_or_else(|| "not an err"), Err("not an err"));
    let res: Outcome<&str, bool> = empty();
    assert_eq!(res.err_or_else(|| "not an err"), Err("not an err"));
}
