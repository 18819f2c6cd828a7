//! Low-level scanning primitives for the SCSS lexer.
//!
//! This crate owns the rune-addressable [`Cursor`] and nothing else: no token
//! kinds, no modes, no errors. The state machine in `scss_lexer` drives the
//! cursor and decides what the scanned spans mean.
//!
//! # Positions
//!
//! All positions are byte offsets into the source `&str` and always fall on
//! UTF-8 character boundaries. Lines are 1-based.

mod cursor;

pub use cursor::{is_space, Cursor, Lexeme};
