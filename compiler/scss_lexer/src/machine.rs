//! State-function engine.
//!
//! Each [`State`] names a function that consumes some input, hands zero or
//! more tokens to the sink, and returns the next state. [`Machine::step`]
//! runs one state; [`Machine::run`] loops until [`State::Done`] or a halt.
//!
//! The state alone is not the whole context: the [`ModeStack`] remembers
//! which constructs are open, and every close resumes the state that belongs
//! to the mode underneath (see [`Machine::resume`]).

mod declaration;
mod interpolation;
mod literal;
mod selector;

use scss_lexer_core::Cursor;
use tracing::trace;

use crate::mode::{Frame, ModeStack};
use crate::{LexError, LexerConfig, Mode, Token, TokenKind, TokenSink};
use selector::Glue;

/// Why a run stopped before reaching end of input.
#[derive(Debug)]
pub(crate) enum Halt<E> {
    /// Fatal lexical error.
    Lex(LexError),
    /// The sink refused a token.
    Sink(E),
}

impl<E> From<LexError> for Halt<E> {
    fn from(err: LexError) -> Self {
        Halt::Lex(err)
    }
}

/// Result of one state function.
type Step<E> = Result<State, Halt<E>>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum State {
    /// Top level or inside a block: dispatch on the next rune.
    Statement,
    AtRule,
    /// `$name:` at statement level.
    Variable,
    Property,
    Selector,
    Attribute,
    PseudoArguments,
    Value,
    Interpolation,
    Done,
}

/// Shape of the statement ahead inside a block.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum RuleShape {
    /// A nested rule: `{` comes before any `;` or `}`.
    Block,
    /// A declaration.
    Declaration,
}

/// Scan ahead for the first `{`, `;` or `}` outside quoted strings and
/// `#{...}` spans.
pub(crate) fn rule_shape(rest: &str) -> RuleShape {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'{' => return RuleShape::Block,
            b';' | b'}' => return RuleShape::Declaration,
            b'#' if bytes.get(i + 1) == Some(&b'{') => {
                let Some(close) = memchr::memchr(b'}', &bytes[i + 2..]) else {
                    return RuleShape::Declaration;
                };
                i += close + 3;
            }
            b'"' | b'\'' => {
                let Some(close) = memchr::memchr(b, &bytes[i + 1..]) else {
                    return RuleShape::Declaration;
                };
                i += close + 2;
            }
            _ => i += 1,
        }
    }
    RuleShape::Declaration
}

#[inline]
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || !c.is_ascii()
}

#[inline]
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Runes that can open a selector at statement level.
fn starts_selector(c: char) -> bool {
    matches!(c, '.' | '#' | '*' | '[' | ':' | '&' | '>' | '+' | '~') || is_name_start(c)
}

/// The lexer proper: cursor, mode stack and current state, feeding a sink.
pub(crate) struct Machine<'src, S> {
    cursor: Cursor<'src>,
    modes: ModeStack,
    config: LexerConfig,
    sink: S,
    state: State,
    /// What the next simple selector attaches to.
    glue: Glue,
    /// Kind of the last simple selector in the current compound.
    compound: Option<TokenKind>,
}

impl<'src, S: TokenSink> Machine<'src, S> {
    pub(crate) fn new(source: &'src str, config: LexerConfig, sink: S) -> Self {
        Machine {
            cursor: Cursor::new(source),
            modes: ModeStack::new(),
            config,
            sink,
            state: State::Statement,
            glue: Glue::Detached,
            compound: None,
        }
    }

    /// Current scan offset.
    pub(crate) fn offset(&self) -> u32 {
        self.cursor.pos()
    }

    /// Number of open constructs.
    pub(crate) fn depth(&self) -> usize {
        self.modes.depth()
    }

    pub(crate) fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub(crate) fn into_sink(self) -> S {
        self.sink
    }

    /// Run one state. Returns `Ok(false)` once the machine is done.
    ///
    /// A halt also finishes the machine: later calls return `Ok(false)`.
    pub(crate) fn step(&mut self) -> Result<bool, Halt<S::Error>> {
        let from = self.state;
        let result = match from {
            State::Statement => self.lex_statement(),
            State::AtRule => self.lex_at_rule(),
            State::Variable => self.lex_variable(),
            State::Property => self.lex_property(),
            State::Selector => self.lex_selector(),
            State::Attribute => self.lex_attribute(),
            State::PseudoArguments => self.lex_pseudo_arguments(),
            State::Value => self.lex_value(),
            State::Interpolation => self.lex_interpolation(),
            State::Done => return Ok(false),
        };
        self.sink.progress(self.cursor.pos());
        match result {
            Ok(next) => {
                trace!(?from, to = ?next, offset = self.cursor.pos(), "step");
                self.state = next;
                Ok(next != State::Done)
            }
            Err(halt) => {
                self.state = State::Done;
                Err(halt)
            }
        }
    }

    /// Run to end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn run(&mut self) -> Result<(), Halt<S::Error>> {
        while self.step()? {}
        Ok(())
    }

    /// Hand the pending lexeme to the sink as a `kind` token.
    fn emit(&mut self, kind: TokenKind) -> Result<(), Halt<S::Error>> {
        let lexeme = self.cursor.take_lexeme();
        let token = Token::new(kind, lexeme.text, lexeme.offset, lexeme.line);
        trace!(?token, "emit");
        self.sink.accept(token).map_err(Halt::Sink)
    }

    /// Open `mode` at the start of the pending lexeme.
    fn push(&mut self, mode: Mode) {
        self.modes.push(mode, self.cursor.token_start(), self.cursor.token_line());
    }

    /// The state that continues whatever mode is now innermost.
    fn resume(&self) -> State {
        match self.modes.top() {
            Mode::TopLevel | Mode::Block => State::Statement,
            Mode::Selector => State::Selector,
            Mode::Attribute => State::Attribute,
            Mode::PseudoArguments => State::PseudoArguments,
            Mode::Value | Mode::FunctionArguments => State::Value,
            Mode::Interpolation => State::Interpolation,
        }
    }

    /// Error for the rune at the read position (or end of input).
    fn unexpected(&self) -> LexError {
        LexError::unexpected(
            self.cursor.peek(),
            self.cursor.pos(),
            self.cursor.line(),
            self.modes.top(),
        )
    }

    /// Error for a construct opened by `frame` that cannot go on. At end of
    /// input the construct is unterminated and reported where it opened.
    fn unclosed(&self, frame: Frame) -> LexError {
        match (self.cursor.peek(), frame.mode.closer()) {
            (None, Some(closer)) => {
                LexError::unterminated_literal(closer, frame.offset, frame.line, frame.mode)
            }
            _ => self.unexpected(),
        }
    }

    fn lex_statement(&mut self) -> Step<S::Error> {
        self.cursor.ignore_spaces();
        let Some(c) = self.cursor.peek() else {
            let frame = self.modes.top_frame();
            if frame.mode == Mode::TopLevel {
                return Ok(State::Done);
            }
            return Err(self.unclosed(frame).into());
        };
        match c {
            '@' => Ok(State::AtRule),
            '$' => Ok(State::Variable),
            '{' => {
                self.push(Mode::Block);
                self.cursor.next();
                self.emit(TokenKind::BraceStart)?;
                Ok(State::Statement)
            }
            '}' => self.close_block(),
            '"' | '\'' => {
                self.lex_quoted()?;
                Ok(State::Statement)
            }
            c if c.is_ascii_digit() => {
                self.lex_number()?;
                Ok(State::Statement)
            }
            _ if self.modes.top() == Mode::Block
                && rule_shape(self.cursor.rest()) == RuleShape::Declaration =>
            {
                Ok(State::Property)
            }
            c if starts_selector(c) => {
                self.push(Mode::Selector);
                self.glue = Glue::Detached;
                self.compound = None;
                Ok(State::Selector)
            }
            _ => Err(self.unexpected().into()),
        }
    }

    fn close_block(&mut self) -> Step<S::Error> {
        if self.modes.top() != Mode::Block {
            return Err(
                LexError::unbalanced_close_brace(self.cursor.pos(), self.cursor.line()).into(),
            );
        }
        self.cursor.next();
        self.modes.pop();
        self.emit(TokenKind::BraceEnd)?;
        Ok(self.resume())
    }
}

#[cfg(test)]
mod tests;
