//! Streaming lexer for SCSS-style stylesheets.
//!
//! Turns source text into an ordered stream of [`Token`]s: selectors with
//! explicit combinators, nested rule blocks, declarations, variables,
//! numbers with units, strings and `#{...}` interpolation. Lexing is
//! context-sensitive; a stack of [`Mode`]s tracks which constructs are open.
//!
//! # Driving a run
//!
//! ```
//! use scss_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("a.foo { color: #fff; }").unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::AndCombinator);
//! ```
//!
//! [`Lexer::tokens`] pulls tokens on demand; [`Lexer::spawn`] lexes on a
//! producer thread behind a rendezvous channel. All three stop at the first
//! [`LexError`]; there is no recovery.

mod config;
mod lex_error;
mod lexer;
mod machine;
mod mode;
mod sink;
mod stream;
mod token;

pub use config::{InterpolationBody, LexerConfig};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, tokenize_with, Lexer, Tokens};
pub use mode::{Frame, Mode, ModeStack};
pub use sink::TokenSink;
pub use stream::TokenStream;
pub use token::{Token, TokenKind, Unit};
