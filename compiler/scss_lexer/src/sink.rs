//! Destinations for emitted tokens.
//!
//! The state machine hands every token to a [`TokenSink`]. The sink decides
//! how the handoff works: a `Vec` collects a whole run, a `VecDeque` buffers
//! for the pull-based iterator, and the channel sink behind
//! [`TokenStream`](crate::TokenStream) blocks until the consumer takes the
//! token.

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::Token;

/// Receives tokens in lexical order from a single producer.
pub trait TokenSink {
    /// Why the sink refused a token. A refusal stops the run.
    type Error;

    fn accept(&mut self, token: Token) -> Result<(), Self::Error>;

    /// Called after every state step with the current scan offset.
    fn progress(&mut self, _offset: u32) {}
}

impl TokenSink for Vec<Token> {
    type Error = Infallible;

    fn accept(&mut self, token: Token) -> Result<(), Infallible> {
        self.push(token);
        Ok(())
    }
}

impl TokenSink for VecDeque<Token> {
    type Error = Infallible;

    fn accept(&mut self, token: Token) -> Result<(), Infallible> {
        self.push_back(token);
        Ok(())
    }
}
