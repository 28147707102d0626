//! Documents the dialect rejects, and the errors they produce.

use alloc::{string::ToString, vec};

use rstest::*;

use crate::{parse, ParseError, ParseErrorCode, TokenKind};

#[track_caller]
fn parse_err(text: &str) -> ParseError {
    match parse(text) {
        Ok(value) => panic!("expected {text:?} to fail, parsed {value:?}"),
        Err(error) => error,
    }
}

#[rstest]
#[case("\"abc", ParseErrorCode::RunawayString, 0, 4)]
#[case("'abc", ParseErrorCode::RunawayString, 0, 4)]
#[case(r#""a\qb""#, ParseErrorCode::IllegalEscapeSequence, 0, 2)]
#[case("\"\\u0041\"", ParseErrorCode::IllegalEscapeSequence, 0, 1)]
#[case(r#"'a\"b'"#, ParseErrorCode::IllegalEscapeSequence, 0, 2)]
#[case("\"a\nb\\q\"", ParseErrorCode::IllegalEscapeSequence, 1, 1)]
#[case("/* open", ParseErrorCode::RunawayComment, 0, 7)]
#[case("@", ParseErrorCode::UnexpectedInput, 0, 0)]
#[case("{\n  \"a\": @\n}", ParseErrorCode::UnexpectedInput, 1, 7)]
#[case("[\r\n@", ParseErrorCode::UnexpectedInput, 1, 0)]
#[case("[\r@", ParseErrorCode::UnexpectedInput, 1, 0)]
#[case("// c\n@", ParseErrorCode::UnexpectedInput, 1, 0)]
#[case("/*\n*/@", ParseErrorCode::UnexpectedInput, 1, 2)]
#[case("", ParseErrorCode::UnexpectedEndOfInput, 0, 0)]
#[case("{", ParseErrorCode::UnexpectedEndOfInput, 0, 1)]
#[case("[1,", ParseErrorCode::UnexpectedEndOfInput, 0, 3)]
#[case("[1, 2", ParseErrorCode::UnexpectedEndOfInput, 0, 5)]
#[case("// c", ParseErrorCode::UnexpectedEndOfInput, 0, 4)]
#[case("1e999", ParseErrorCode::InvalidNumber, 0, 0)]
#[case("1e-999", ParseErrorCode::InvalidNumber, 0, 0)]
#[case("+", ParseErrorCode::InvalidNumber, 0, 0)]
#[case("1 2", ParseErrorCode::ExtraneousInput, 0, 2)]
#[case("truex", ParseErrorCode::ExtraneousInput, 0, 4)]
#[case("1 'oops", ParseErrorCode::ExtraneousInput, 0, 7)]
#[case("1/2", ParseErrorCode::ExtraneousInput, 0, 1)]
fn failures_carry_code_and_position(
    #[case] text: &str,
    #[case] code: ParseErrorCode,
    #[case] line: usize,
    #[case] column: usize,
) {
    let error = parse_err(text);
    assert_eq!(error.code, code, "input: {text:?}");
    assert_eq!((error.line, error.column), (line, column), "input: {text:?}");
    assert!(error.expected.is_empty(), "input: {text:?}");
    assert_eq!(error.actual, None, "input: {text:?}");
}

#[test]
fn missing_member_value_reports_the_closer() {
    let error = parse_err("{\"a\":}");
    assert_eq!(
        error,
        ParseError {
            code: ParseErrorCode::UnexpectedInput,
            line: 0,
            column: 5,
            expected: vec![
                TokenKind::Null,
                TokenKind::String,
                TokenKind::Number,
                TokenKind::True,
                TokenKind::False,
                TokenKind::LeftBracket,
                TokenKind::LeftBrace,
            ],
            actual: Some(TokenKind::RightBrace),
        }
    );
}

#[test]
fn member_keys_are_strings_or_identifiers() {
    let error = parse_err("{]");
    assert_eq!(error.code, ParseErrorCode::UnexpectedInput);
    assert_eq!((error.line, error.column), (0, 1));
    assert_eq!(error.expected, [TokenKind::String, TokenKind::Identifier]);
    assert_eq!(error.actual, Some(TokenKind::RightBracket));
}

#[test]
fn member_keys_need_a_colon() {
    let error = parse_err("{a 1}");
    assert_eq!(error.code, ParseErrorCode::UnexpectedInput);
    assert_eq!((error.line, error.column), (0, 3));
    assert_eq!(error.expected, [TokenKind::Colon]);
    assert_eq!(error.actual, Some(TokenKind::Number));
}

#[test]
fn object_members_need_a_separator() {
    let error = parse_err("{a: 1 b: 2}");
    assert_eq!(error.code, ParseErrorCode::UnexpectedInput);
    assert_eq!((error.line, error.column), (0, 6));
    assert_eq!(error.expected, [TokenKind::Comma, TokenKind::RightBrace]);
    assert_eq!(error.actual, Some(TokenKind::Identifier));
}

#[test]
fn arrays_reject_consecutive_commas() {
    let error = parse_err("[1,,2]");
    assert_eq!(error.code, ParseErrorCode::UnexpectedInput);
    assert_eq!((error.line, error.column), (0, 3));
    assert_eq!(error.expected.len(), 7);
    assert_eq!(error.actual, Some(TokenKind::Comma));
}

#[test]
fn errors_render_for_humans() {
    let error = parse_err("{\"a\":}");
    assert_eq!(
        error.to_string(),
        "unexpected input at line 1, column 5 (expected: null string number true false left_bracket left_brace) (got: right_brace)"
    );

    let error = parse_err("\"abc");
    assert_eq!(error.to_string(), "runaway string at line 1, column 4");

    let error = parse_err("{\n  \"a\": @\n}");
    assert_eq!(error.to_string(), "unexpected input at line 2, column 7");
}
