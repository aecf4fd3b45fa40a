//! Token kinds for Cutlet.

use std::borrow::Cow;
use std::fmt;

/// Token kinds for Cutlet, with semantic range layout.
///
/// All discriminants are contiguous from 0, with categories arranged in
/// adjacent ranges:
///
/// | Range | Category                |
/// |-------|-------------------------|
/// | 0-2   | Sentinels               |
/// | 3-16  | Assignment / arithmetic |
/// | 17-19 | Delimiters              |
/// | 20-22 | Logical                 |
/// | 23-32 | Bitwise                 |
/// | 33-38 | Grouping                |
/// | 39-40 | Boolean literals        |
/// | 41-45 | Literals                |
/// | 46-49 | Comparison              |
/// | 50-56 | Symbols                 |
/// | 57-72 | Keywords                |
/// | 73    | Stream bookkeeping      |
///
/// # Invariant
///
/// Discriminants are exactly `0..COUNT` with no gaps, so consumers may
/// size lookup tables and bitsets by [`TokenKind::COUNT`] and key them by
/// `kind as u8`. New kinds must be appended before [`TokenKind::End`],
/// never inserted earlier, and only after re-auditing [`crate::KEYWORDS`]
/// and [`TokenKind::curated_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Sentinels (0-2) ===
    /// Absent value; also the kind produced for the reserved word `null`.
    Null = 0,
    Eof = 1,
    Unknown = 2,

    // === Assignment / arithmetic (3-16) ===
    Assignment = 3,      // =
    Equals = 4,          // ==
    NotEquals = 5,       // !=
    Plus = 6,            // +
    PlusEquals = 7,      // +=
    PlusPlus = 8,        // ++
    Minus = 9,           // -
    MinusEquals = 10,    // -=
    MinusMinus = 11,     // --
    Multiply = 12,       // *
    MultiplyEquals = 13, // *=
    DivideEquals = 14,   // /=
    Percent = 15,        // %
    PercentEquals = 16,  // %=

    // === Delimiters (17-19) ===
    Comma = 17,     // ,
    Colon = 18,     // :
    Semicolon = 19, // ;

    // === Logical (20-22) ===
    And = 20, // &&
    Or = 21,  // ||
    Not = 22, // !

    // === Bitwise (23-32) ===
    BitAnd = 23,       // &
    BitAndEquals = 24, // &=
    BitOr = 25,        // |
    BitOrEquals = 26,  // |=
    BitNot = 27,       // ~
    BitNotEquals = 28, // ~=
    Shr = 29,          // >>
    ShrEquals = 30,    // >>=
    Shl = 31,          // <<
    ShlEquals = 32,    // <<=

    // === Grouping (33-38) ===
    LParen = 33,   // (
    RParen = 34,   // )
    LBrace = 35,   // {
    RBrace = 36,   // }
    LBracket = 37, // [
    RBracket = 38, // ]

    // === Boolean literals (39-40) ===
    True = 39,
    False = 40,

    // === Literals (41-45) ===
    /// Generic numeric literal (scanner may emit this before int/float split).
    Number = 41,
    Integer = 42,
    Float = 43,
    String = 44,
    Identifier = 45,

    // === Comparison (46-49) ===
    Less = 46,          // <
    LessEquals = 47,    // <=
    Greater = 48,       // >
    GreaterEquals = 49, // >=

    // === Symbols (50-56) ===
    Dot = 50,       // .
    DotDot = 51,    // ..
    DotDotDot = 52, // ...
    Question = 53,  // ?
    Comment = 54,   // // to end of line
    Caret = 55,     // ^
    Hash = 56,      // #

    // === Keywords (57-72) ===
    Let = 57,
    Const = 58,
    Class = 59,
    New = 60,
    Import = 61,
    From = 62,
    Fn = 63,
    If = 64,
    Else = 65,
    Foreach = 66,
    While = 67,
    For = 68,
    Export = 69,
    Typeof = 70,
    Sizeof = 71,
    In = 72,

    // === Stream bookkeeping (73) ===
    /// Marks the logical end of a token list for tooling. Never produced
    /// for real source text.
    End = 73,
}

impl TokenKind {
    /// Number of `TokenKind` variants.
    ///
    /// Strictly greater than every variant's discriminant; use it to size
    /// lookup tables and bitsets keyed by kind. Never a valid kind itself.
    pub const COUNT: usize = Self::End as usize + 1;

    /// Every variant in discriminant order, so `ALL[k as usize] == k`.
    pub const ALL: [TokenKind; Self::COUNT] = [
        Self::Null,
        Self::Eof,
        Self::Unknown,
        Self::Assignment,
        Self::Equals,
        Self::NotEquals,
        Self::Plus,
        Self::PlusEquals,
        Self::PlusPlus,
        Self::Minus,
        Self::MinusEquals,
        Self::MinusMinus,
        Self::Multiply,
        Self::MultiplyEquals,
        Self::DivideEquals,
        Self::Percent,
        Self::PercentEquals,
        Self::Comma,
        Self::Colon,
        Self::Semicolon,
        Self::And,
        Self::Or,
        Self::Not,
        Self::BitAnd,
        Self::BitAndEquals,
        Self::BitOr,
        Self::BitOrEquals,
        Self::BitNot,
        Self::BitNotEquals,
        Self::Shr,
        Self::ShrEquals,
        Self::Shl,
        Self::ShlEquals,
        Self::LParen,
        Self::RParen,
        Self::LBrace,
        Self::RBrace,
        Self::LBracket,
        Self::RBracket,
        Self::True,
        Self::False,
        Self::Number,
        Self::Integer,
        Self::Float,
        Self::String,
        Self::Identifier,
        Self::Less,
        Self::LessEquals,
        Self::Greater,
        Self::GreaterEquals,
        Self::Dot,
        Self::DotDot,
        Self::DotDotDot,
        Self::Question,
        Self::Comment,
        Self::Caret,
        Self::Hash,
        Self::Let,
        Self::Const,
        Self::Class,
        Self::New,
        Self::Import,
        Self::From,
        Self::Fn,
        Self::If,
        Self::Else,
        Self::Foreach,
        Self::While,
        Self::For,
        Self::Export,
        Self::Typeof,
        Self::Sizeof,
        Self::In,
        Self::End,
    ];

    /// Range-validated conversion from a raw discriminant.
    ///
    /// Returns `None` for any `index >= COUNT`. Use this at boundaries
    /// where kind values arrive as plain integers (caches, wire formats).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Check if this is one of the 16 keyword kinds.
    ///
    /// Keywords occupy a contiguous discriminant range; see the range
    /// table on [`TokenKind`].
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (Self::Let as u8) && (self as u8) <= (Self::In as u8)
    }

    /// If this kind is a keyword, return its reserved spelling.
    ///
    /// Inverse of the keyword table: `lookup_identifier(spelling)` yields
    /// this kind back. Returns `None` for non-keyword kinds, including
    /// [`TokenKind::Null`] (whose spelling `"null"` lives only in the
    /// table, since `Null` is first a sentinel).
    pub const fn keyword_spelling(self) -> Option<&'static str> {
        match self {
            Self::Let => Some("let"),
            Self::Const => Some("const"),
            Self::Class => Some("class"),
            Self::New => Some("new"),
            Self::Import => Some("import"),
            Self::From => Some("from"),
            Self::Fn => Some("fn"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::Foreach => Some("foreach"),
            Self::While => Some("while"),
            Self::For => Some("for"),
            Self::Export => Some("export"),
            Self::Typeof => Some("typeof"),
            Self::Sizeof => Some("sizeof"),
            Self::In => Some("in"),
            _ => None,
        }
    }

    /// The curated diagnostic name for this kind, if it has one.
    ///
    /// Coverage is intentionally partial: every keyword, every literal
    /// kind, and the frequently-diagnosed operators and delimiters have a
    /// stable lowercase name; the rest fall through to `None` and render
    /// via the numeric fallback in [`TokenKind::display_name`].
    ///
    /// Currently uncurated: `Unknown`, `Minus`, `Multiply`, the compound
    /// arithmetic/bitwise-assignment forms other than `+=`/`-=`, the
    /// bitwise operators, shifts, grouping brackets, `Integer`, `Float`,
    /// `LessEquals`, `GreaterEquals`, `DotDotDot`, `Comment`, `Caret`,
    /// `Hash`, and `End`.
    pub const fn curated_name(self) -> Option<&'static str> {
        match self {
            Self::Eof => Some("eof"),
            Self::Null => Some("null"),
            Self::Number => Some("number"),
            Self::String => Some("string"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::Identifier => Some("identifier"),
            Self::Assignment => Some("assignment"),
            Self::Equals => Some("equals"),
            Self::NotEquals => Some("notequals"),
            Self::Not => Some("not"),
            Self::Less => Some("less"),
            Self::Greater => Some("greater"),
            Self::Or => Some("or"),
            Self::And => Some("and"),
            Self::Dot => Some("dot"),
            Self::DotDot => Some("dotdot"),
            Self::Semicolon => Some("semicolon"),
            Self::Colon => Some("colon"),
            Self::Question => Some("question"),
            Self::Comma => Some("comma"),
            Self::PlusPlus => Some("plusplus"),
            Self::MinusMinus => Some("minusminus"),
            Self::PlusEquals => Some("plusequals"),
            Self::MinusEquals => Some("minusequals"),
            Self::Plus => Some("plus"),
            Self::Percent => Some("percent"),
            Self::Let => Some("let"),
            Self::Const => Some("const"),
            Self::Class => Some("class"),
            Self::New => Some("new"),
            Self::Import => Some("import"),
            Self::From => Some("from"),
            Self::Fn => Some("fn"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::Foreach => Some("foreach"),
            Self::While => Some("while"),
            Self::For => Some("for"),
            Self::Export => Some("export"),
            Self::Typeof => Some("typeof"),
            Self::Sizeof => Some("sizeof"),
            Self::In => Some("in"),
            _ => None,
        }
    }

    /// Get a display name for this kind.
    ///
    /// Total and never panics: kinds without a curated name render as
    /// `unknown(<discriminant>)`. Diagnostics formatting depends on this
    /// function, so it must never itself be a source of failure.
    pub fn display_name(self) -> Cow<'static, str> {
        match self.curated_name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("unknown({})", self as u8)),
        }
    }

    /// Get a display name for a raw kind value of unknown provenance.
    ///
    /// Like [`TokenKind::display_name`] but total over every `u8`:
    /// out-of-range values render as `unknown(<raw>)` rather than failing,
    /// so error-reporting paths handed a corrupt or future-version value
    /// still produce output.
    pub fn display_name_from_raw(raw: u8) -> Cow<'static, str> {
        match Self::from_index(raw).and_then(Self::curated_name) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("unknown({raw})")),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
