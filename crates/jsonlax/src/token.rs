//! Lexical tokens of the relaxed JSON dialect.

use core::fmt;

/// The kind tag of a [`Token`], without its payload.
///
/// Kinds are ordered and named as they appear in formatted parse errors:
/// `Display` writes `left_bracket`, `right_brace`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The keyword `null`, matched case-insensitively.
    Null,
    /// A single- or double-quoted string literal.
    String,
    /// A numeric literal.
    Number,
    /// The keyword `true`, matched case-insensitively.
    True,
    /// The keyword `false`, matched case-insensitively.
    False,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A bare word (`[A-Za-z_][A-Za-z0-9_]*`), accepted as an object key.
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::True => "true",
            Self::False => "false",
            Self::LeftBracket => "left_bracket",
            Self::RightBracket => "right_bracket",
            Self::LeftBrace => "left_brace",
            Self::RightBrace => "right_brace",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Identifier => "identifier",
        })
    }
}

/// A single token produced by the [`Lexer`](crate::Lexer).
///
/// String and identifier payloads borrow the lexer's scratch buffer and are
/// valid only until the next [`advance`](crate::Lexer::advance) call; callers
/// that need the text longer must copy it out first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Null,
    String(&'a str),
    Number(f64),
    True,
    False,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    Identifier(&'a str),
}

impl Token<'_> {
    /// Returns the kind tag of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Null => TokenKind::Null,
            Self::String(_) => TokenKind::String,
            Self::Number(_) => TokenKind::Number,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::LeftBracket => TokenKind::LeftBracket,
            Self::RightBracket => TokenKind::RightBracket,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::Comma => TokenKind::Comma,
            Self::Colon => TokenKind::Colon,
            Self::Identifier(_) => TokenKind::Identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Token, TokenKind};

    #[test]
    fn kinds_render_their_error_names() {
        assert_eq!(TokenKind::LeftBracket.to_string(), "left_bracket");
        assert_eq!(TokenKind::RightBrace.to_string(), "right_brace");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Colon.to_string(), "colon");
    }

    #[test]
    fn tokens_project_their_kind() {
        assert_eq!(Token::String("x").kind(), TokenKind::String);
        assert_eq!(Token::Number(1.0).kind(), TokenKind::Number);
        assert_eq!(Token::Comma.kind(), TokenKind::Comma);
    }
}
