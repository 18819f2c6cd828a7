//! Shared helpers for the integration tests.

#![allow(dead_code, reason = "each test binary uses a subset")]

use std::sync::Once;

use scss_lexer::{tokenize, tokenize_with, LexError, LexerConfig, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Route lexer tracing to the test writer.
///
/// Enable with `RUST_LOG=scss_lexer=trace cargo test -- --nocapture`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Kinds of every token in `source`, which must lex cleanly.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    kinds_with(source, LexerConfig::default())
}

pub fn kinds_with(source: &str, config: LexerConfig) -> Vec<TokenKind> {
    init_tracing();
    match tokenize_with(source, config) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("{source:?} failed to lex: {err}"),
    }
}

/// The error `source` stops on.
pub fn lex_error(source: &str) -> LexError {
    init_tracing();
    match tokenize(source) {
        Ok(tokens) => panic!("{source:?} lexed without error: {tokens:?}"),
        Err(err) => err,
    }
}
