//! The parser.
//!
//! [`parse`] drives a [`Lexer`] through an LL(1) recursive descent over the
//! relaxed dialect and builds a [`Value`] tree. Errors carry a code, the
//! position the lexer reached, and the token kinds the grammar would have
//! accepted.

use alloc::{string::String, vec::Vec};
use core::fmt;

use thiserror::Error;

use crate::{
    lexer::{LexError, Lexer},
    token::{Token, TokenKind},
    value::Value,
};

/// Classifies a [`ParseError`].
///
/// Lexical failures translate into this set; [`LexError::InputExhausted`]
/// becomes [`UnexpectedEndOfInput`](Self::UnexpectedEndOfInput) when the
/// grammar still wanted a token, and the three numeric range and shape
/// failures fold into [`InvalidNumber`](Self::InvalidNumber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorCode {
    /// The parser and lexer disagreed about their shared state. Not expected
    /// to occur.
    #[error("internal")]
    Internal,
    /// A token the grammar does not accept here, or a character that cannot
    /// start any token.
    #[error("unexpected input")]
    UnexpectedInput,
    /// The document ended while the grammar still wanted a token.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A string escape outside the dialect's escape table.
    #[error("illegal escape sequence")]
    IllegalEscapeSequence,
    /// The input ended inside a string literal.
    #[error("runaway string")]
    RunawayString,
    /// The input ended inside a `/* */` comment.
    #[error("runaway comment")]
    RunawayComment,
    /// A numeric literal that does not fit an `f64`, or a bare sign.
    #[error("invalid number")]
    InvalidNumber,
    /// A complete value was parsed but input remained.
    #[error("extraneous input")]
    ExtraneousInput,
}

/// A structured parse failure.
///
/// `line` is 0-based and `column` is a 0-based byte offset into the line.
/// Lexical failures point at the offending character; grammar mismatches
/// point at the start of the rejected token. The [`fmt::Display`] rendering
/// shows the line 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// What went wrong.
    pub code: ParseErrorCode,
    /// 0-based line of the failure.
    pub line: usize,
    /// 0-based byte column of the failure.
    pub column: usize,
    /// Token kinds the grammar would have accepted, in grammar order. Empty
    /// for lexical failures.
    pub expected: Vec<TokenKind>,
    /// The token actually seen, when the failure was a grammar mismatch.
    pub actual: Option<TokenKind>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.code, self.line + 1, self.column)?;
        if !self.expected.is_empty() {
            write!(f, " (expected:")?;
            for kind in &self.expected {
                write!(f, " {kind}")?;
            }
            write!(f, ")")?;
        }
        if let Some(actual) = self.actual {
            write!(f, " (got: {actual})")?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseError {}

/// Parses a complete document from `text`.
///
/// The dialect extends JSON with `//` and `/* */` comments, single-quoted
/// strings, bare identifier keys, case-insensitive keywords, signed and
/// dot-led numbers, trailing commas, and omitted commas between array
/// elements. Exactly one value must span the whole input; anything after it
/// is [`ParseErrorCode::ExtraneousInput`].
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first lexical or grammatical
/// failure.
///
/// # Examples
///
/// ```
/// use jsonlax::parse;
///
/// let value = parse("{greeting: 'hello', count: 2, // relaxed\n}")?;
/// assert_eq!(value.get("count").map(jsonlax::Value::as_number), Some(2.0));
/// # Ok::<(), jsonlax::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser { lexer: Lexer::new(text) };
    parser.lexer.advance();
    let value = parser.value()?;
    if parser.lexer.error() == Some(LexError::InputExhausted) {
        Ok(value)
    } else {
        Err(parser.extraneous())
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

/// Token kinds that can start a value, in grammar order.
const VALUE_STARTERS: [TokenKind; 7] = [
    TokenKind::Null,
    TokenKind::String,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::LeftBracket,
    TokenKind::LeftBrace,
];

impl Parser<'_> {
    fn value(&mut self) -> Result<Value, ParseError> {
        let kind = self.expect(&VALUE_STARTERS)?;
        match kind {
            TokenKind::LeftBracket => self.array(),
            TokenKind::LeftBrace => self.object(),
            _ => {
                let value = match self.lexer.token() {
                    Some(Token::Null) => Value::Null,
                    Some(Token::True) => Value::from(true),
                    Some(Token::False) => Value::from(false),
                    Some(Token::Number(n)) => Value::from(n),
                    Some(Token::String(text)) => Value::from(text),
                    _ => return Err(self.lexer_error()),
                };
                self.lexer.advance();
                Ok(value)
            }
        }
    }

    fn array(&mut self) -> Result<Value, ParseError> {
        self.lexer.advance();
        let mut array = Value::new_array(0);
        // Commas between elements are optional and a trailing comma is
        // allowed, so the loop only watches for the closing bracket.
        while !self.consume_if(TokenKind::RightBracket) {
            array.append(self.value()?);
            self.consume_if(TokenKind::Comma);
        }
        Ok(array)
    }

    fn object(&mut self) -> Result<Value, ParseError> {
        self.lexer.advance();
        let mut object = Value::new_object(0);
        while !self.consume_if(TokenKind::RightBrace) {
            let key = self.member_key()?;
            self.expect(&[TokenKind::Colon])?;
            self.lexer.advance();
            let value = self.value()?;
            object.set_key(&key, value);
            // Unlike arrays, members must be separated; only the trailing
            // comma is optional.
            self.expect(&[TokenKind::Comma, TokenKind::RightBrace])?;
            self.consume_if(TokenKind::Comma);
        }
        Ok(object)
    }

    /// Reads a member key, which may be a string or a bare identifier.
    fn member_key(&mut self) -> Result<String, ParseError> {
        self.expect(&[TokenKind::String, TokenKind::Identifier])?;
        let key = match self.lexer.token() {
            Some(Token::String(text) | Token::Identifier(text)) => String::from(text),
            _ => return Err(self.lexer_error()),
        };
        self.lexer.advance();
        Ok(key)
    }

    /// Checks the current token against `expected` without consuming it.
    fn expect(&self, expected: &[TokenKind]) -> Result<TokenKind, ParseError> {
        let Some(token) = self.lexer.token() else {
            return Err(self.lexer_error());
        };
        let kind = token.kind();
        if expected.contains(&kind) {
            Ok(kind)
        } else {
            Err(self.mismatch(expected, kind))
        }
    }

    /// Consumes the current token if it has the given kind.
    fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.lexer.token().is_some_and(|token| token.kind() == kind) {
            self.lexer.advance();
            true
        } else {
            false
        }
    }

    /// Translates the lexer's sticky error, positioned at the character the
    /// lexer stopped on.
    fn lexer_error(&self) -> ParseError {
        let code = match self.lexer.error() {
            Some(LexError::InputExhausted) => ParseErrorCode::UnexpectedEndOfInput,
            Some(LexError::IllegalEscapeSequence) => ParseErrorCode::IllegalEscapeSequence,
            Some(LexError::RunawayString) => ParseErrorCode::RunawayString,
            Some(LexError::RunawayComment) => ParseErrorCode::RunawayComment,
            Some(
                LexError::NumericOverflow | LexError::NumericUnderflow | LexError::InvalidNumber,
            ) => ParseErrorCode::InvalidNumber,
            Some(LexError::UnexpectedInput) => ParseErrorCode::UnexpectedInput,
            None => ParseErrorCode::Internal,
        };
        ParseError {
            code,
            line: self.lexer.line(),
            column: self.lexer.column(),
            expected: Vec::new(),
            actual: None,
        }
    }

    /// A grammar mismatch, positioned at the start of the rejected token.
    fn mismatch(&self, expected: &[TokenKind], actual: TokenKind) -> ParseError {
        ParseError {
            code: ParseErrorCode::UnexpectedInput,
            line: self.lexer.token_line(),
            column: self.lexer.token_column(),
            expected: expected.to_vec(),
            actual: Some(actual),
        }
    }

    /// Input remained after a complete value. Points at the start of the
    /// leftover token when the lexer produced one, otherwise at the
    /// character it stopped on.
    fn extraneous(&self) -> ParseError {
        let (line, column) = if self.lexer.token().is_some() {
            (self.lexer.token_line(), self.lexer.token_column())
        } else {
            (self.lexer.line(), self.lexer.column())
        };
        ParseError {
            code: ParseErrorCode::ExtraneousInput,
            line,
            column,
            expected: Vec::new(),
            actual: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::{ParseError, ParseErrorCode};
    use crate::token::TokenKind;

    #[test]
    fn errors_render_position_one_based_by_line() {
        let error = ParseError {
            code: ParseErrorCode::RunawayString,
            line: 0,
            column: 4,
            expected: Vec::new(),
            actual: None,
        };
        assert_eq!(error.to_string(), "runaway string at line 1, column 4");
    }

    #[test]
    fn errors_render_expected_and_actual_kinds() {
        let error = ParseError {
            code: ParseErrorCode::UnexpectedInput,
            line: 2,
            column: 7,
            expected: vec![TokenKind::Comma, TokenKind::RightBrace],
            actual: Some(TokenKind::Colon),
        };
        assert_eq!(
            error.to_string(),
            "unexpected input at line 3, column 7 (expected: comma right_brace) (got: colon)"
        );
    }

    #[test]
    fn codes_render_their_names() {
        let names = [
            (ParseErrorCode::Internal, "internal"),
            (ParseErrorCode::UnexpectedInput, "unexpected input"),
            (ParseErrorCode::UnexpectedEndOfInput, "unexpected end of input"),
            (ParseErrorCode::IllegalEscapeSequence, "illegal escape sequence"),
            (ParseErrorCode::RunawayString, "runaway string"),
            (ParseErrorCode::RunawayComment, "runaway comment"),
            (ParseErrorCode::InvalidNumber, "invalid number"),
            (ParseErrorCode::ExtraneousInput, "extraneous input"),
        ];
        for (code, name) in names {
            assert_eq!(code.to_string(), name);
        }
    }
}
