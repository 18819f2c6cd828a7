//! Rune cursor with a single-slot unread.
//!
//! The cursor walks the source one `char` at a time. Every [`next()`] records
//! the width of the rune it returned, which is what [`backup()`] rewinds by.
//! There is exactly one slot: a second `backup()` without an intervening
//! `next()` is rejected and leaves the cursor untouched.
//!
//! Besides the read position the cursor tracks the start of the pending
//! lexeme. [`take_lexeme()`] hands out `source[start..pos]` and moves the
//! start up to the read position, which is the lexeme boundary reset the
//! lexer's `emit` relies on.
//!
//! [`next()`]: Cursor::next
//! [`backup()`]: Cursor::backup
//! [`take_lexeme()`]: Cursor::take_lexeme

/// Whitespace recognized between tokens: space, tab, newline, carriage
/// return and form feed.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Count `\n` bytes in `bytes`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "count is bounded by the source length, which fits in u32"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

/// A finished lexeme: the source slice plus where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    /// Byte offset of the first byte of `text`.
    pub offset: u32,
    /// Line on which `text` starts.
    pub line: u32,
}

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so the lexer can snapshot it before a speculative
/// scan and restore the snapshot to backtrack.
///
/// # Invariant
///
/// `start <= pos <= source.len()`, and both offsets sit on character
/// boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position.
    pos: u32,
    /// Start of the pending lexeme.
    start: u32,
    /// Line of the read position.
    line: u32,
    /// Line of the pending lexeme's start.
    start_line: u32,
    /// Width of the rune returned by the last `next()`; 0 when there is
    /// nothing to unread.
    last_width: u8,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    ///
    /// Sources longer than `u32::MAX` bytes are not supported.
    pub fn new(source: &'a str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source of {} bytes exceeds u32 offsets",
            source.len()
        );
        Self {
            source,
            pos: 0,
            start: 0,
            line: 1,
            start_line: 1,
            last_width: 0,
        }
    }

    /// Current read position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Start offset of the pending lexeme.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.start
    }

    /// Line of the read position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Line on which the pending lexeme starts.
    #[inline]
    pub fn token_line(&self) -> u32 {
        self.start_line
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// The pending lexeme, `source[token_start..pos]`.
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start as usize..self.pos as usize]
    }

    /// Consume and return the next rune.
    ///
    /// At end of input returns `None` without moving, and clears the unread
    /// slot so a following `backup()` cannot step back over real input.
    #[allow(
        clippy::should_implement_trait,
        reason = "a cursor primitive with unread, not an iterator"
    )]
    #[allow(clippy::cast_possible_truncation, reason = "len_utf8() is at most 4")]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.rest().chars().next() else {
            self.last_width = 0;
            return None;
        };
        self.last_width = c.len_utf8() as u8;
        self.pos += u32::from(self.last_width);
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Unread the rune returned by the last `next()`.
    ///
    /// Returns `false`, leaving the cursor unchanged, when there is nothing
    /// to unread: no preceding `next()`, a second `backup()` in a row, or a
    /// rune that already belongs to an emitted or ignored lexeme.
    pub fn backup(&mut self) -> bool {
        let width = u32::from(self.last_width);
        if width == 0 || self.pos - width < self.start {
            return false;
        }
        self.pos -= width;
        self.last_width = 0;
        if self.source.as_bytes()[self.pos as usize] == b'\n' {
            self.line -= 1;
        }
        true
    }

    /// The next rune, without consuming it.
    ///
    /// Leaves the unread slot alone, so `next(); peek(); backup()` still
    /// unreads the rune from `next()`.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The rune after [`peek()`](Self::peek), without consuming anything.
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// `true` iff the upcoming input starts with `literal`. Never consumes.
    #[inline]
    pub fn matches(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Consume one rune iff it is a member of `charset`.
    pub fn accept(&mut self, charset: &str) -> bool {
        match self.peek() {
            Some(c) if charset.contains(c) => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Consume `literal` iff the upcoming input starts with it.
    ///
    /// Multi-rune consumption clears the unread slot.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "literal is a prefix of the source, which fits in u32"
    )]
    pub fn eat_str(&mut self, literal: &str) -> bool {
        if !self.matches(literal) {
            return false;
        }
        self.line += count_newlines(literal.as_bytes());
        self.pos += literal.len() as u32;
        self.last_width = 0;
        true
    }

    /// Consume runes while `pred` holds. Returns the number of bytes consumed.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> u32 {
        let from = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.next();
        }
        self.pos - from
    }

    /// Skip a maximal whitespace run and drop it from the pending lexeme.
    ///
    /// Returns `true` if any whitespace was skipped.
    pub fn ignore_spaces(&mut self) -> bool {
        let skipped = self.eat_while(is_space);
        self.ignore();
        skipped > 0
    }

    /// Advance up to, not past, the first occurrence of `delimiter`.
    ///
    /// Returns the new position. The caller consumes the delimiter itself.
    /// If `delimiter` does not occur before end of input, returns `None` and
    /// the cursor does not move.
    ///
    /// Single-byte delimiters use `memchr`; longer ones use `memmem`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "found < rest().len() <= source length, which fits in u32"
    )]
    pub fn til(&mut self, delimiter: &str) -> Option<u32> {
        let haystack = self.rest().as_bytes();
        let found = match delimiter.as_bytes() {
            [byte] => memchr::memchr(*byte, haystack),
            needle => memchr::memmem::find(haystack, needle),
        }?;
        self.line += count_newlines(&haystack[..found]);
        self.pos += found as u32;
        self.last_width = 0;
        Some(self.pos)
    }

    /// Drop the pending lexeme: the lexeme start moves up to the read
    /// position.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    /// Finish the pending lexeme and start a new one at the read position.
    pub fn take_lexeme(&mut self) -> Lexeme<'a> {
        let lexeme = Lexeme {
            text: self.lexeme(),
            offset: self.start,
            line: self.start_line,
        };
        self.ignore();
        lexeme
    }
}
