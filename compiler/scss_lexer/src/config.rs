//! Lexer configuration.
//!
//! Two strictness choices are configurable rather than fixed: whether a
//! value must end in `;` before a closing `}`, and whether the body of an
//! interpolation is tokenized.

/// How the body of `#{...}` is lexed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InterpolationBody {
    /// Lex the body as value tokens (`Variable`, numbers, `Constant`, ...).
    #[default]
    Tokens,
    /// Skip the body; only the start and end markers are emitted.
    Opaque,
}

/// Options for a lexer run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Require `;` after every value. When `false`, a `}` right after a
    /// value ends both the value and the block, as CSS allows.
    pub require_semicolon: bool,
    pub interpolation: InterpolationBody,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            require_semicolon: true,
            interpolation: InterpolationBody::Tokens,
        }
    }
}

impl LexerConfig {
    /// CSS leniency: the last value in a block may omit its `;`.
    pub fn lenient() -> Self {
        Self::default().with_require_semicolon(false)
    }

    #[must_use]
    pub fn with_require_semicolon(mut self, require: bool) -> Self {
        self.require_semicolon = require;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, body: InterpolationBody) -> Self {
        self.interpolation = body;
        self
    }
}

#[cfg(test)]
mod tests;
