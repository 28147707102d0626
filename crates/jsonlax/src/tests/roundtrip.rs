//! Serialize-then-reparse properties.

use alloc::{format, string::String};

use quickcheck::QuickCheck;

use crate::{parse, stringify, Value};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

#[test]
fn stringify_then_parse_is_identity() {
    fn prop(value: Value) -> bool {
        let text = stringify(&value);
        match parse(&text) {
            Ok(reparsed) => reparsed == value && stringify(&reparsed) == text,
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn surrounding_trivia_does_not_change_the_value() {
    fn prop(value: Value) -> bool {
        let text = stringify(&value);
        let padded = format!("\t/* pad */ {text} // tail");
        parse(&padded).as_ref() == Ok(&value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn parse_never_panics() {
    fn prop(text: String) -> bool {
        let _ = parse(&text);
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}
