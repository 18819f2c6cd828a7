//! Threaded token stream.
//!
//! The engine runs on a producer thread and hands each token over a
//! zero-capacity crossbeam channel, so `emit` blocks until the consumer
//! takes the token. At most one token is in flight.
//!
//! Teardown: the consumer holds the only sender of a second `cancel`
//! channel. [`TokenStream::close`] (or drop) disconnects it, which wakes a
//! producer blocked in `select!` on the token handoff. The producer then
//! stops and the consumer joins it.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, select, Receiver, Sender};
use tracing::debug;

use crate::machine::{Halt, Machine};
use crate::{LexError, LexerConfig, Token, TokenSink};

type Item = Result<Token, LexError>;

/// The consumer closed the stream.
#[derive(Debug)]
struct Cancelled;

/// Producer side of the handoff.
struct ChannelSink {
    tokens: Sender<Item>,
    cancel: Receiver<()>,
    offset: Arc<AtomicU32>,
}

impl ChannelSink {
    /// Block until the consumer takes `item` or closes the stream.
    fn deliver(&self, item: Item) -> Result<(), Cancelled> {
        select! {
            send(self.tokens, item) -> sent => sent.map_err(|_| Cancelled),
            recv(self.cancel) -> _closed => Err(Cancelled),
        }
    }
}

impl TokenSink for ChannelSink {
    type Error = Cancelled;

    fn accept(&mut self, token: Token) -> Result<(), Cancelled> {
        self.deliver(Ok(token))
    }

    fn progress(&mut self, offset: u32) {
        self.offset.store(offset, Ordering::Relaxed);
    }
}

fn produce(source: &str, config: LexerConfig, sink: ChannelSink) {
    let mut machine = Machine::new(source, config, sink);
    let outcome = machine.run();
    let sink = machine.into_sink();
    match outcome {
        Ok(()) => debug!("producer reached end of input"),
        Err(Halt::Lex(err)) => {
            debug!(%err, "producer stopped on lexical error");
            if sink.deliver(Err(err)).is_err() {
                debug!("stream closed before the error was taken");
            }
        }
        Err(Halt::Sink(Cancelled)) => debug!("producer cancelled by consumer"),
    }
}

/// Consumer side of a threaded lexer run.
///
/// Yields tokens in source order, then at most one error. Once closed,
/// either explicitly, by exhaustion, or by drop, no more items are produced
/// and the producer thread has been joined.
pub struct TokenStream {
    tokens: Receiver<Item>,
    cancel: Option<Sender<()>>,
    offset: Arc<AtomicU32>,
    producer: Option<JoinHandle<()>>,
    closed: bool,
}

impl TokenStream {
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub(crate) fn spawn(source: Arc<str>, config: LexerConfig) -> Self {
        let (token_tx, token_rx) = channel::bounded(0);
        let (cancel_tx, cancel_rx) = channel::bounded(0);
        let offset = Arc::new(AtomicU32::new(0));
        let sink = ChannelSink {
            tokens: token_tx,
            cancel: cancel_rx,
            offset: Arc::clone(&offset),
        };
        let producer = thread::spawn(move || produce(&source, config, sink));
        TokenStream {
            tokens: token_rx,
            cancel: Some(cancel_tx),
            offset,
            producer: Some(producer),
            closed: false,
        }
    }

    /// Block for the next item. `None` once the stream is closed.
    pub fn next_token(&mut self) -> Option<Item> {
        if self.closed {
            return None;
        }
        match self.tokens.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.close();
                None
            }
        }
    }

    /// How far the producer has scanned. Advisory; it may be ahead of the
    /// last received token.
    pub fn offset(&self) -> u32 {
        self.offset.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Stop the run and join the producer. Safe to call more than once,
    /// and whether or not the producer has finished.
    pub fn close(&mut self) {
        self.closed = true;
        if let Some(cancel) = self.cancel.take() {
            debug!("closing token stream");
            drop(cancel);
        }
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                debug!("producer thread panicked");
            }
        }
    }
}

impl Iterator for TokenStream {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.next_token()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.close();
    }
}
