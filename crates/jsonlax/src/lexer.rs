//! The tokenizer.
//!
//! [`Lexer`] walks a borrowed input slice one token at a time, with no
//! lookahead beyond the current token. It tracks line and column positions,
//! skips `//` and `/* */` comments, and decodes string and number literals.

use alloc::string::String;
use core::num::FpCategory;

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Errors the tokenizer can enter.
///
/// The set is closed and sticky: once a [`Lexer`] records one of these it
/// stays in that state, and further [`advance`](Lexer::advance) calls fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// The input ended before another token could start. This is the
    /// expected terminal state after a complete document, not a failure in
    /// itself.
    #[error("input exhausted")]
    InputExhausted,
    /// A string escape other than `\<terminator>`, `\\`, `\/`, `\b`, `\f`,
    /// `\n`, `\r`, or `\t`. Unicode `\u` escapes land here: the dialect does
    /// not decode them.
    #[error("illegal escape sequence")]
    IllegalEscapeSequence,
    /// The input ended inside a string literal.
    #[error("runaway string")]
    RunawayString,
    /// The input ended inside a `/* */` comment.
    #[error("runaway comment")]
    RunawayComment,
    /// A numeric literal too large for an `f64`.
    #[error("numeric overflow")]
    NumericOverflow,
    /// A nonzero numeric literal too small for an `f64`.
    #[error("numeric underflow")]
    NumericUnderflow,
    /// A sign or digit that did not continue into a number.
    #[error("invalid number")]
    InvalidNumber,
    /// A character that cannot start any token.
    #[error("unexpected input")]
    UnexpectedInput,
}

/// A zero-lookahead tokenizer over a borrowed input slice.
///
/// `advance` produces the next token; `token` exposes it until the next
/// `advance`. String and identifier payloads live in a scratch buffer reused
/// between tokens, which is why [`Token`] borrows the lexer.
///
/// Errors are sticky. After a failed `advance` the lexer reports the error
/// through [`error`](Self::error), `token` returns `None`, and further
/// `advance` calls return `false` without scanning.
///
/// # Examples
///
/// ```
/// use jsonlax::{Lexer, Token};
///
/// let mut lexer = Lexer::new("[1, true]");
/// assert!(lexer.advance());
/// assert_eq!(lexer.token(), Some(Token::LeftBracket));
/// assert!(lexer.advance());
/// assert_eq!(lexer.token(), Some(Token::Number(1.0)));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    token_line: usize,
    token_column: usize,
    kind: Option<TokenKind>,
    number: f64,
    scratch: String,
    error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer borrowing `input` for its lifetime.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
            line_start: 0,
            token_line: 0,
            token_column: 0,
            kind: None,
            number: 0.0,
            scratch: String::new(),
            error: None,
        }
    }

    /// Scans the next token, returning `true` if one was produced.
    ///
    /// Returns `false` once the lexer is in an error state, including the
    /// terminal [`LexError::InputExhausted`].
    pub fn advance(&mut self) -> bool {
        if self.error.is_some() {
            return false;
        }
        match self.next_token() {
            Ok(()) => true,
            Err(error) => {
                self.error = Some(error);
                false
            }
        }
    }

    /// Returns the current token.
    ///
    /// `None` before the first `advance` and whenever the lexer is in an
    /// error state.
    #[must_use]
    pub fn token(&self) -> Option<Token<'_>> {
        if self.error.is_some() {
            return None;
        }
        Some(match self.kind? {
            TokenKind::Null => Token::Null,
            TokenKind::String => Token::String(&self.scratch),
            TokenKind::Number => Token::Number(self.number),
            TokenKind::True => Token::True,
            TokenKind::False => Token::False,
            TokenKind::LeftBracket => Token::LeftBracket,
            TokenKind::RightBracket => Token::RightBracket,
            TokenKind::LeftBrace => Token::LeftBrace,
            TokenKind::RightBrace => Token::RightBrace,
            TokenKind::Comma => Token::Comma,
            TokenKind::Colon => Token::Colon,
            TokenKind::Identifier => Token::Identifier(&self.scratch),
        })
    }

    /// Returns the sticky error, if the lexer has entered one.
    #[must_use]
    pub fn error(&self) -> Option<LexError> {
        self.error
    }

    /// The 0-based line of the next unread character.
    ///
    /// After a failed `advance` this is where the error begins.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 0-based byte column of the next unread character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.pos - self.line_start
    }

    /// The 0-based line where the current token starts.
    #[must_use]
    pub fn token_line(&self) -> usize {
        self.token_line
    }

    /// The 0-based byte column where the current token starts.
    #[must_use]
    pub fn token_column(&self) -> usize {
        self.token_column
    }

    fn byte(&self, at: usize) -> Option<u8> {
        self.input.as_bytes().get(at).copied()
    }

    fn next_token(&mut self) -> Result<(), LexError> {
        self.skip_trivia()?;
        self.token_line = self.line;
        self.token_column = self.pos - self.line_start;
        let Some(b) = self.byte(self.pos) else {
            return Err(LexError::InputExhausted);
        };
        match b {
            b'[' => self.single(TokenKind::LeftBracket),
            b']' => self.single(TokenKind::RightBracket),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b',' => self.single(TokenKind::Comma),
            b':' => self.single(TokenKind::Colon),
            b'"' | b'\'' => self.scan_string(b)?,
            b'+' | b'-' | b'0'..=b'9' => self.scan_number()?,
            _ => {
                // Keywords match as case-insensitive prefixes, so `truex`
                // lexes as `true` followed by the identifier `x`.
                if self.keyword(b"true") {
                    self.kind = Some(TokenKind::True);
                } else if self.keyword(b"false") {
                    self.kind = Some(TokenKind::False);
                } else if self.keyword(b"null") {
                    self.kind = Some(TokenKind::Null);
                } else if b == b'_' || b.is_ascii_alphabetic() {
                    self.scan_identifier();
                } else {
                    return Err(LexError::UnexpectedInput);
                }
            }
        }
        Ok(())
    }

    /// Skips whitespace and comments, leaving the cursor on the first byte
    /// of the next token.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.byte(self.pos) {
                Some(b' ' | b'\t' | b'\x0B' | b'\x0C') => self.pos += 1,
                Some(b'\n' | b'\r') => self.consume_newline(),
                Some(b'/') => match self.byte(self.pos + 1) {
                    Some(b'/') => self.skip_line_comment(),
                    Some(b'*') => self.skip_block_comment()?,
                    // A lone slash is left for token classification.
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    /// Consumes the line break at the cursor (`\n`, `\r`, or `\r\n` as one
    /// break) and starts a new line.
    fn consume_newline(&mut self) {
        if self.byte(self.pos) == Some(b'\r') {
            self.pos += 1;
            if self.byte(self.pos) == Some(b'\n') {
                self.pos += 1;
            }
        } else {
            self.pos += 1;
        }
        self.line += 1;
        self.line_start = self.pos;
    }

    fn skip_line_comment(&mut self) {
        self.pos += 2;
        while let Some(b) = self.byte(self.pos) {
            if b == b'\n' || b == b'\r' {
                self.consume_newline();
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        self.pos += 2;
        loop {
            match self.byte(self.pos) {
                None => return Err(LexError::RunawayComment),
                Some(b'*') if self.byte(self.pos + 1) == Some(b'/') => {
                    self.pos += 2;
                    return Ok(());
                }
                Some(b'\n' | b'\r') => self.consume_newline(),
                Some(_) => self.pos += 1,
            }
        }
    }

    fn single(&mut self, kind: TokenKind) {
        self.pos += 1;
        self.kind = Some(kind);
    }

    /// Consumes `word` if it matches case-insensitively at the cursor.
    fn keyword(&mut self, word: &[u8]) -> bool {
        let rest = &self.input.as_bytes()[self.pos..];
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    fn scan_identifier(&mut self) {
        let start = self.pos;
        while self
            .byte(self.pos)
            .is_some_and(|b| b == b'_' || b.is_ascii_alphanumeric())
        {
            self.pos += 1;
        }
        self.scratch.clear();
        self.scratch.push_str(&self.input[start..self.pos]);
        self.kind = Some(TokenKind::Identifier);
    }

    /// Scans a string literal. The terminator is the opening quote, so both
    /// `"` and `'` strings come through here.
    ///
    /// On failure the cursor is left on the offending byte (the backslash of
    /// a bad escape, or end of input), so `line`/`column` report it.
    fn scan_string(&mut self, terminator: u8) -> Result<(), LexError> {
        self.scratch.clear();
        self.pos += 1;
        loop {
            let Some(b) = self.byte(self.pos) else {
                return Err(LexError::RunawayString);
            };
            if b == terminator {
                self.pos += 1;
                self.kind = Some(TokenKind::String);
                return Ok(());
            }
            match b {
                b'\\' => {
                    // The terminator escape is checked first: `\"` in a
                    // single-quoted string is illegal, only `\'` works.
                    let escape = self.byte(self.pos + 1);
                    let decoded = if escape == Some(terminator) {
                        Some(char::from(terminator))
                    } else {
                        match escape {
                            Some(b'\\') => Some('\\'),
                            Some(b'/') => Some('/'),
                            Some(b'b') => Some('\x08'),
                            Some(b'f') => Some('\x0C'),
                            Some(b'n') => Some('\n'),
                            Some(b'r') => Some('\r'),
                            Some(b't') => Some('\t'),
                            _ => None,
                        }
                    };
                    match decoded {
                        Some(c) => {
                            self.scratch.push(c);
                            self.pos += 2;
                        }
                        None => return Err(LexError::IllegalEscapeSequence),
                    }
                }
                // Literal line breaks are preserved in the payload and still
                // counted for positions.
                b'\n' => {
                    self.scratch.push('\n');
                    self.pos += 1;
                    self.line += 1;
                    self.line_start = self.pos;
                }
                b'\r' => {
                    self.scratch.push('\r');
                    self.pos += 1;
                    if self.byte(self.pos) == Some(b'\n') {
                        self.scratch.push('\n');
                        self.pos += 1;
                    }
                    self.line += 1;
                    self.line_start = self.pos;
                }
                _ if b.is_ascii() => {
                    self.scratch.push(char::from(b));
                    self.pos += 1;
                }
                _ => {
                    let (c, len) = bstr::decode_utf8(&self.input.as_bytes()[self.pos..]);
                    self.scratch.push(c.unwrap_or('\u{FFFD}'));
                    self.pos += len.max(1);
                }
            }
        }
    }

    /// Scans a number literal: optional sign, digits with at most one `.`,
    /// and an exponent that only counts when it carries digits.
    ///
    /// On failure the cursor stays at the start of the literal.
    fn scan_number(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        let mut end = self.pos;
        if matches!(self.byte(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let mut digits = 0;
        while self.byte(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
        if self.byte(end) == Some(b'.') {
            end += 1;
            while self.byte(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return Err(LexError::InvalidNumber);
        }
        if matches!(self.byte(end), Some(b'e' | b'E')) {
            let mut exponent = end + 1;
            if matches!(self.byte(exponent), Some(b'+' | b'-')) {
                exponent += 1;
            }
            let digits_at = exponent;
            while self.byte(exponent).is_some_and(|b| b.is_ascii_digit()) {
                exponent += 1;
            }
            if exponent > digits_at {
                end = exponent;
            }
        }

        let text = &self.input[start..end];
        match text.parse::<f64>() {
            Ok(n) if n.is_infinite() => Err(LexError::NumericOverflow),
            Ok(n) if matches!(n.classify(), FpCategory::Zero) && has_nonzero_digit(text) => {
                Err(LexError::NumericUnderflow)
            }
            Ok(n) => {
                self.pos = end;
                self.number = n;
                self.kind = Some(TokenKind::Number);
                Ok(())
            }
            Err(_) => Err(LexError::InvalidNumber),
        }
    }
}

/// True if the significand contains a digit other than zero, which tells a
/// zero parse result apart from a genuine underflow.
fn has_nonzero_digit(text: &str) -> bool {
    text.bytes()
        .take_while(|&b| b != b'e' && b != b'E')
        .any(|b| matches!(b, b'1'..=b'9'))
}
