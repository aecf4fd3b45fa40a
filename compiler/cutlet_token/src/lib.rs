//! Lexical token model for the Cutlet language.
//!
//! The closed vocabulary every later compiler stage pattern-matches on:
//!
//! - [`TokenKind`] — the exhaustive registry of lexical categories
//!   (operators, delimiters, literals, keywords, sentinels), a fieldless
//!   enum with contiguous discriminants so consumers can size tables by
//!   [`TokenKind::COUNT`].
//! - [`lookup_identifier`] / [`KEYWORDS`] — reserved-word resolution for
//!   bare-word lexemes; anything unreserved is an identifier.
//! - [`TokenKind::display_name`] — the diagnostic rendering of a kind,
//!   total over every input including out-of-range raw values.
//! - [`Token`] — the `{kind, literal}` unit the scanner produces and the
//!   parser consumes.
//!
//! This crate is a leaf: no cutlet_* dependencies, all state `const`, so
//! external tooling (LSP, formatter, highlighter) can depend on it
//! without pulling in the compiler. Everything here is a pure lookup over
//! immutable tables and safe to share across threads.

mod keywords;
mod kind;
mod token;

pub use keywords::{lookup_identifier, KEYWORDS};
pub use kind::TokenKind;
pub use token::Token;
