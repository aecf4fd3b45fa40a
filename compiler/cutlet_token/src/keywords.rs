//! Reserved-word resolution for Cutlet.
//!
//! The scanner calls [`lookup_identifier`] exactly once per bare-word
//! lexeme it has delimited; any spelling not in the table is a legitimate
//! [`TokenKind::Identifier`], not an error. Matching is case-sensitive
//! with no normalization, so `Let` and `IF` are identifiers.
//!
//! Centralizing this in one table keeps the scanner's character
//! classification free of string-literal comparisons and makes adding a
//! keyword a one-line edit.

use crate::TokenKind;

/// Reserved spellings and their kinds, sorted by spelling for binary
/// search.
///
/// Covers the 16 keyword kinds plus `"null"`, which resolves to the
/// [`TokenKind::Null`] sentinel. A `const` item: immutable for the
/// process lifetime by construction, no duplicate keys.
pub const KEYWORDS: [(&str, TokenKind); 17] = [
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("else", TokenKind::Else),
    ("export", TokenKind::Export),
    ("fn", TokenKind::Fn),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("from", TokenKind::From),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("let", TokenKind::Let),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("sizeof", TokenKind::Sizeof),
    ("typeof", TokenKind::Typeof),
    ("while", TokenKind::While),
];

/// Fast pre-filter: can this text possibly be a reserved word?
///
/// All reserved spellings are 2-7 chars and start with an ASCII lowercase
/// letter. Rejects most identifiers before the binary search.
#[inline]
fn could_be_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(bytes.len(), 2..=7) && bytes[0].is_ascii_lowercase()
}

/// Classify a bare-word lexeme: its keyword kind if the spelling is
/// reserved, [`TokenKind::Identifier`] otherwise.
///
/// Total and pure: never fails, no side effects, same input always yields
/// the same kind. The scanner is responsible for only passing word-shaped
/// text; this function does not validate shape.
pub fn lookup_identifier(text: &str) -> TokenKind {
    if !could_be_keyword(text) {
        return TokenKind::Identifier;
    }
    match KEYWORDS.binary_search_by_key(&text, |&(spelling, _)| spelling) {
        Ok(idx) => KEYWORDS[idx].1,
        Err(_) => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn control_flow_keywords() {
        assert_eq!(lookup_identifier("if"), TokenKind::If);
        assert_eq!(lookup_identifier("else"), TokenKind::Else);
        assert_eq!(lookup_identifier("while"), TokenKind::While);
        assert_eq!(lookup_identifier("for"), TokenKind::For);
        assert_eq!(lookup_identifier("foreach"), TokenKind::Foreach);
        assert_eq!(lookup_identifier("in"), TokenKind::In);
    }

    #[test]
    fn declaration_keywords() {
        assert_eq!(lookup_identifier("let"), TokenKind::Let);
        assert_eq!(lookup_identifier("const"), TokenKind::Const);
        assert_eq!(lookup_identifier("class"), TokenKind::Class);
        assert_eq!(lookup_identifier("new"), TokenKind::New);
        assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    }

    #[test]
    fn module_keywords() {
        assert_eq!(lookup_identifier("import"), TokenKind::Import);
        assert_eq!(lookup_identifier("from"), TokenKind::From);
        assert_eq!(lookup_identifier("export"), TokenKind::Export);
    }

    #[test]
    fn operator_keywords() {
        assert_eq!(lookup_identifier("typeof"), TokenKind::Typeof);
        assert_eq!(lookup_identifier("sizeof"), TokenKind::Sizeof);
    }

    #[test]
    fn null_resolves_to_sentinel() {
        assert_eq!(lookup_identifier("null"), TokenKind::Null);
    }

    #[test]
    fn non_keywords_are_identifiers() {
        assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("lets"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("classy"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("my_var"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("x"), TokenKind::Identifier);
    }

    #[test]
    fn case_sensitivity() {
        assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("IF"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("While"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("NULL"), TokenKind::Identifier);
    }

    #[test]
    fn empty_string_is_identifier() {
        assert_eq!(lookup_identifier(""), TokenKind::Identifier);
    }

    #[test]
    fn length_boundary_rejection() {
        // Reserved spellings are 2-7 chars; outside that range the
        // pre-filter rejects without any comparison.
        assert_eq!(lookup_identifier("a"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("foreachx"), TokenKind::Identifier);
    }

    #[test]
    fn non_lowercase_start_rejection() {
        assert_eq!(lookup_identifier("_if"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("1let"), TokenKind::Identifier);
    }

    #[test]
    fn table_is_sorted_and_duplicate_free() {
        for pair in KEYWORDS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} out of order", pair[1].0);
        }
    }

    #[test]
    fn table_round_trips_through_lookup() {
        for &(spelling, kind) in &KEYWORDS {
            assert_eq!(lookup_identifier(spelling), kind);
        }
    }

    #[test]
    fn table_values_are_keywords_or_null() {
        for &(spelling, kind) in &KEYWORDS {
            assert!(
                kind.is_keyword() || kind == TokenKind::Null,
                "{spelling:?} maps to non-keyword {kind:?}"
            );
        }
    }

    #[test]
    fn keyword_spellings_match_table() {
        for &(spelling, kind) in &KEYWORDS {
            if kind == TokenKind::Null {
                continue;
            }
            assert_eq!(kind.keyword_spelling(), Some(spelling));
        }
    }
}
