//! Lexer modes and the mode stack.
//!
//! The mode is the grammatical context the next token is read in. Nested
//! constructs push a mode when they open (`{`, `[`, `(`, `#{`) and pop it on
//! their matching close. The bottom entry is always [`Mode::TopLevel`].

use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

/// Grammatical context of the lexer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Outside any rule block.
    #[default]
    TopLevel,
    /// Reading a selector, up to its `{`.
    Selector,
    /// Inside `[...]` of an attribute selector.
    Attribute,
    /// Inside a rule's `{...}`.
    Block,
    /// Reading a property, variable or at-rule value, up to its `;`.
    Value,
    /// Inside `#{...}`.
    Interpolation,
    /// Inside the parentheses of a functional pseudo selector.
    PseudoArguments,
    /// Inside the parentheses of a function call in a value.
    FunctionArguments,
}

impl Mode {
    /// The character that closes this mode, if it was opened by a bracket.
    pub fn closer(self) -> Option<char> {
        match self {
            Mode::Block | Mode::Interpolation => Some('}'),
            Mode::Attribute => Some(']'),
            Mode::PseudoArguments | Mode::FunctionArguments => Some(')'),
            Mode::TopLevel | Mode::Selector | Mode::Value => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Mode::TopLevel => "at top level",
            Mode::Selector => "in a selector",
            Mode::Attribute => "in an attribute selector",
            Mode::Block => "in a rule block",
            Mode::Value => "in a value",
            Mode::Interpolation => "in an interpolation",
            Mode::PseudoArguments => "in pseudo selector arguments",
            Mode::FunctionArguments => "in function arguments",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A mode together with where it was opened.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    pub mode: Mode,
    /// Byte offset of the construct's opening.
    pub offset: u32,
    pub line: u32,
}

/// Stack of open modes. Never empty: the bottom frame is top-level.
#[derive(Clone, Debug)]
pub struct ModeStack {
    frames: SmallVec<[Frame; 8]>,
}

impl ModeStack {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame {
            mode: Mode::TopLevel,
            offset: 0,
            line: 1,
        });
        ModeStack { frames }
    }

    /// The innermost mode.
    #[inline]
    pub fn top(&self) -> Mode {
        self.top_frame().mode
    }

    /// The innermost frame.
    #[inline]
    pub fn top_frame(&self) -> Frame {
        self.frames[self.frames.len() - 1]
    }

    /// Number of open constructs above top-level.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn push(&mut self, mode: Mode, offset: u32, line: u32) {
        debug!(?mode, offset, depth = self.frames.len(), "push mode");
        self.frames.push(Frame { mode, offset, line });
    }

    /// Pop the innermost frame. Returns `None` at top-level, which is
    /// never popped.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() == 1 {
            return None;
        }
        let frame = self.frames.pop();
        debug!(mode = ?frame.map(|f| f.mode), depth = self.frames.len() - 1, "pop mode");
        frame
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
