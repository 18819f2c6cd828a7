//! Lexer error types.
//!
//! Errors follow a WHERE + WHAT + WHY shape:
//! - WHERE: `offset` and `line` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context`, the mode the lexer was in
//!
//! Every lexical error is fatal to the run that produced it. Formatting for
//! end users is left to the consumer; `Display` gives a one-line summary.

use thiserror::Error;

use crate::Mode;

/// A fatal lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at line {line}, offset {offset} ({context})")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: byte offset of the offending input.
    pub offset: u32,
    /// WHERE: 1-based line of the offending input.
    pub line: u32,
    /// WHY: the mode the lexer was in.
    pub context: Mode,
}

/// What kind of lexical error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A string, bracket, brace or interpolation was never closed.
    #[error("unterminated literal, expected closing `{expected}`")]
    UnterminatedLiteral { expected: char },
    /// No rule recognizes this character in the current mode.
    #[error("unexpected character `{found}`")]
    UnexpectedCharacter { found: char },
    /// `}` with no open block.
    #[error("unbalanced `}}`")]
    UnbalancedCloseBrace,
    /// Malformed numeric literal: `1.`, `1.2.3`, unknown unit suffix.
    #[error("invalid number format")]
    InvalidNumberFormat,
    /// `#` in a value not followed by exactly 3 or 6 hex digits.
    #[error("invalid hex color")]
    InvalidHexColor,
    /// A value ran into `}` or end of input before its `;`.
    #[error("missing `;` after value")]
    MissingSemicolon,
    /// Input ended where a construct still needed more.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: u32, line: u32, context: Mode) -> Self {
        LexError {
            kind,
            offset,
            line,
            context,
        }
    }

    pub fn unterminated_literal(expected: char, offset: u32, line: u32, context: Mode) -> Self {
        Self::new(
            LexErrorKind::UnterminatedLiteral { expected },
            offset,
            line,
            context,
        )
    }

    /// `found` is the offending character, or `None` at end of input.
    pub fn unexpected(found: Option<char>, offset: u32, line: u32, context: Mode) -> Self {
        let kind = match found {
            Some(found) => LexErrorKind::UnexpectedCharacter { found },
            None => LexErrorKind::UnexpectedEndOfInput,
        };
        Self::new(kind, offset, line, context)
    }

    pub fn unbalanced_close_brace(offset: u32, line: u32) -> Self {
        Self::new(LexErrorKind::UnbalancedCloseBrace, offset, line, Mode::TopLevel)
    }

    pub fn invalid_number(offset: u32, line: u32, context: Mode) -> Self {
        Self::new(LexErrorKind::InvalidNumberFormat, offset, line, context)
    }

    pub fn invalid_hex_color(offset: u32, line: u32, context: Mode) -> Self {
        Self::new(LexErrorKind::InvalidHexColor, offset, line, context)
    }

    pub fn missing_semicolon(offset: u32, line: u32) -> Self {
        Self::new(LexErrorKind::MissingSemicolon, offset, line, Mode::Value)
    }
}
