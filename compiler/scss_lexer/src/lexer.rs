//! Lexer entry points.
//!
//! Three ways to drive a run over the same engine:
//! - [`tokenize`] / [`Lexer::tokenize`] lex everything into a `Vec`.
//! - [`Lexer::tokens`] is a pull-based iterator; each `next()` runs the
//!   engine on the caller's thread until a token is ready.
//! - [`Lexer::spawn`] runs the engine on its own thread behind a
//!   rendezvous channel ([`TokenStream`]).

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::machine::{Halt, Machine};
use crate::{LexError, LexerConfig, Token, TokenStream};

/// Lex `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, LexerConfig::default())
}

/// Lex `source` to completion. Stops at the first error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    let mut machine = Machine::new(source, config, Vec::new());
    match machine.run() {
        Ok(()) => Ok(machine.into_sink()),
        Err(Halt::Lex(err)) => Err(err),
        Err(Halt::Sink(never)) => match never {},
    }
}

/// A lexer over shared source text.
///
/// Cheap to clone; every run starts fresh, so runs never see each other's
/// state.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Arc<str>,
    config: LexerConfig,
}

impl Lexer {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: impl Into<Arc<str>>, config: LexerConfig) -> Self {
        Lexer {
            source: source.into(),
            config,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Pull tokens on demand on the current thread.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.source, self.config)
    }

    /// Lex the whole source.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        tokenize_with(&self.source, self.config)
    }

    /// Lex on a producer thread, handing tokens over one at a time.
    pub fn spawn(&self) -> TokenStream {
        TokenStream::spawn(Arc::clone(&self.source), self.config)
    }
}

/// Pull-based token iterator.
///
/// Yields `Ok` tokens in source order. A lexical error is yielded once,
/// after every token emitted before it, and ends the iteration.
pub struct Tokens<'src> {
    machine: Machine<'src, VecDeque<Token>>,
    error: Option<LexError>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    pub fn new(source: &'src str, config: LexerConfig) -> Self {
        Tokens {
            machine: Machine::new(source, config, VecDeque::new()),
            error: None,
            finished: false,
        }
    }

    /// How far the engine has scanned. May be ahead of the last yielded
    /// token.
    pub fn offset(&self) -> u32 {
        self.machine.offset()
    }

    /// Number of constructs open at the scan position.
    pub fn depth(&self) -> usize {
        self.machine.depth()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.machine.sink_mut().pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return self.error.take().map(Err);
            }
            match self.machine.step() {
                Ok(true) => {}
                Ok(false) => self.finished = true,
                Err(Halt::Lex(err)) => {
                    self.error = Some(err);
                    self.finished = true;
                }
                Err(Halt::Sink(never)) => match never {},
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
