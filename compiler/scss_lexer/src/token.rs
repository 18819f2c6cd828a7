//! Token types produced by the lexer.
//!
//! A [`Token`] is immutable once emitted and owned by the consumer from then
//! on. Its `text` is the raw lexeme, except for quoted strings, whose text is
//! the content between the quotes.

use std::fmt;

/// Unit suffix attached to a numeric literal (`10px`, `0.3em`, `50%`).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unit {
    Px,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Deg,
    Rad,
    Grad,
    Turn,
    S,
    Ms,
    Hz,
    Khz,
    Dpi,
    Dpcm,
    Dppx,
    Percent,
}

impl Unit {
    /// Every recognized unit.
    pub const ALL: [Unit; 26] = [
        Unit::Px,
        Unit::Pt,
        Unit::Pc,
        Unit::Cm,
        Unit::Mm,
        Unit::In,
        Unit::Em,
        Unit::Rem,
        Unit::Ex,
        Unit::Ch,
        Unit::Vw,
        Unit::Vh,
        Unit::Vmin,
        Unit::Vmax,
        Unit::Deg,
        Unit::Rad,
        Unit::Grad,
        Unit::Turn,
        Unit::S,
        Unit::Ms,
        Unit::Hz,
        Unit::Khz,
        Unit::Dpi,
        Unit::Dpcm,
        Unit::Dppx,
        Unit::Percent,
    ];

    /// The canonical (lowercase) suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Deg => "deg",
            Unit::Rad => "rad",
            Unit::Grad => "grad",
            Unit::Turn => "turn",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::Hz => "hz",
            Unit::Khz => "khz",
            Unit::Dpi => "dpi",
            Unit::Dpcm => "dpcm",
            Unit::Dppx => "dppx",
            Unit::Percent => "%",
        }
    }

    /// Look up a unit by its suffix, ignoring ASCII case (`Hz`, `PX`).
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Token kinds.
///
/// Structural, selector, literal, interpolation and at-rule tokens. Units
/// carry their [`Unit`] so one variant covers the whole family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Structural ===
    /// `{`
    BraceStart,
    /// `}`
    BraceEnd,
    /// `:` between a property or variable and its value
    Colon,
    /// `;`
    Semicolon,
    /// `,` in selector lists and values
    Comma,
    /// `=` in attribute selectors
    Equal,
    /// `(` opening function arguments in a value
    ParenStart,
    /// `)` closing function arguments in a value
    ParenEnd,

    // === Selectors ===
    /// `div`
    TagSelector,
    /// `.foo`
    ClassSelector,
    /// `#foo`
    IdSelector,
    /// `*`
    UniversalSelector,
    /// `&`
    ParentSelector,
    /// `[`
    AttrStart,
    /// `href` in `[href]`
    AttrName,
    /// `]`
    AttrEnd,
    /// `:hover`, `::before`
    PseudoSelector,
    /// `>`
    ChildCombinator,
    /// `+`
    AdjacentCombinator,
    /// `~`
    SiblingCombinator,
    /// Whitespace separating two compound selectors.
    DescendantCombinator,
    /// Zero-width glue between adjacent simple selectors (`a.foo`).
    AndCombinator,

    // === Attribute operators ===
    /// `~=`
    Contains,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,

    // === Literals ===
    /// Content of `"..."` or `'...'`, quotes excluded.
    QuotedString,
    /// Bare attribute value: `en` in `[lang=en]`.
    UnquotedString,
    Integer,
    Float,
    /// `#fff`, `#a0b1c2`
    HexColor,
    /// `$name`
    Variable,
    /// `color` in `color: red;`
    PropertyName,
    /// Any other value word: `none`, `solid`, `!important`.
    Constant,
    /// Raw argument of a functional pseudo selector: `fr-ca` in `:lang(fr-ca)`.
    LangCode,
    /// Unit suffix following a number.
    Unit(Unit),

    // === Interpolation ===
    /// `#{`
    InterpolationStart,
    /// `}` closing an interpolation
    InterpolationEnd,

    // === At-rules ===
    /// `@import`
    Import,
    /// `@charset`
    Charset,
    /// `@extend`
    Extend,
    /// `@include`
    Include,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::BraceStart => "`{`",
            TokenKind::BraceEnd => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Equal => "`=`",
            TokenKind::ParenStart => "`(`",
            TokenKind::ParenEnd => "`)`",
            TokenKind::TagSelector => "tag selector",
            TokenKind::ClassSelector => "class selector",
            TokenKind::IdSelector => "id selector",
            TokenKind::UniversalSelector => "universal selector",
            TokenKind::ParentSelector => "parent selector",
            TokenKind::AttrStart => "`[`",
            TokenKind::AttrName => "attribute name",
            TokenKind::AttrEnd => "`]`",
            TokenKind::PseudoSelector => "pseudo selector",
            TokenKind::ChildCombinator => "`>`",
            TokenKind::AdjacentCombinator => "`+`",
            TokenKind::SiblingCombinator => "`~`",
            TokenKind::DescendantCombinator => "descendant combinator",
            TokenKind::AndCombinator => "compound selector glue",
            TokenKind::Contains => "`~=`",
            TokenKind::DashMatch => "`|=`",
            TokenKind::PrefixMatch => "`^=`",
            TokenKind::SuffixMatch => "`$=`",
            TokenKind::SubstringMatch => "`*=`",
            TokenKind::QuotedString => "quoted string",
            TokenKind::UnquotedString => "unquoted string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::HexColor => "hex color",
            TokenKind::Variable => "variable",
            TokenKind::PropertyName => "property name",
            TokenKind::Constant => "constant",
            TokenKind::LangCode => "pseudo selector argument",
            TokenKind::Unit(_) => "unit",
            TokenKind::InterpolationStart => "`#{`",
            TokenKind::InterpolationEnd => "interpolation `}`",
            TokenKind::Import => "`@import`",
            TokenKind::Charset => "`@charset`",
            TokenKind::Extend => "`@extend`",
            TokenKind::Include => "`@include`",
        }
    }

    /// Simple selectors and their attribute/pseudo parts.
    pub fn is_selector(self) -> bool {
        matches!(
            self,
            TokenKind::TagSelector
                | TokenKind::ClassSelector
                | TokenKind::IdSelector
                | TokenKind::UniversalSelector
                | TokenKind::ParentSelector
                | TokenKind::PseudoSelector
        )
    }

    pub fn is_combinator(self) -> bool {
        matches!(
            self,
            TokenKind::ChildCombinator
                | TokenKind::AdjacentCombinator
                | TokenKind::SiblingCombinator
                | TokenKind::DescendantCombinator
                | TokenKind::AndCombinator
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Unit(unit) => write!(f, "unit `{}`", unit.suffix()),
            kind => f.write_str(kind.display_name()),
        }
    }
}

/// A token with its position in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset where the lexeme starts.
    pub offset: u32,
    /// 1-based line where the lexeme starts.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: u32, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
            line,
        }
    }

    /// Byte offset one past the lexeme.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is a slice of a source addressed with u32 offsets"
    )]
    pub fn end(&self) -> u32 {
        self.offset + self.text.len() as u32
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.text, self.line, self.offset
        )
    }
}
