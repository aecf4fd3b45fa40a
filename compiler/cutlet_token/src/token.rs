//! Token representation for the Cutlet lexer.

use std::fmt;

use crate::{lookup_identifier, TokenKind};

/// A classified atomic unit of source text: a kind plus the lexeme that
/// produced it.
///
/// `literal` is the exact or normalized source spelling; for keyword
/// tokens it equals the reserved spelling. Spans are owned by the
/// scanner, not this type.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Build a token from a bare-word lexeme, promoting reserved
    /// spellings to their keyword kind.
    pub fn word(literal: impl Into<String>) -> Self {
        let literal = literal.into();
        let kind = lookup_identifier(&literal);
        Token { kind, literal }
    }

    /// The end-of-input token. Its literal is empty: there is no source
    /// text behind it.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.literal)
    }
}
