//! Literal sub-lexers: quoted strings, numbers with units, hex colors,
//! variable references and bare constants.

use scss_lexer_core::is_space;

use super::{is_name_char, Halt, Machine};
use crate::{LexError, Mode, TokenKind, TokenSink, Unit};

impl<S: TokenSink> Machine<'_, S> {
    /// `"..."` or `'...'`. The token text is the content between the quotes;
    /// no escape processing is done.
    pub(super) fn lex_quoted(&mut self) -> Result<(), Halt<S::Error>> {
        let (offset, line) = (self.cursor.pos(), self.cursor.line());
        let Some(quote) = self.cursor.next() else {
            return Err(self.unexpected().into());
        };
        self.cursor.ignore();
        let mut buf = [0u8; 4];
        if self.cursor.til(quote.encode_utf8(&mut buf)).is_none() {
            return Err(
                LexError::unterminated_literal(quote, offset, line, self.modes.top()).into(),
            );
        }
        self.emit(TokenKind::QuotedString)?;
        self.cursor.next();
        self.cursor.ignore();
        Ok(())
    }

    /// A digit, or `.`/`-` in front of one, starts a number.
    pub(super) fn at_number(&self) -> bool {
        let mut chars = self.cursor.rest().chars();
        let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => is_digit(chars.next()),
            Some('-') => match chars.next() {
                Some('.') => is_digit(chars.next()),
                next => is_digit(next),
            },
            _ => false,
        }
    }

    /// `-?digits(.digits)?` followed by an optional unit.
    pub(super) fn lex_number(&mut self) -> Result<(), Halt<S::Error>> {
        let (offset, line) = (self.cursor.token_start(), self.cursor.token_line());
        let invalid = |this: &Self| LexError::invalid_number(offset, line, this.modes.top());

        self.cursor.accept("-");
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let mut kind = TokenKind::Integer;
        if self.cursor.accept(".") {
            if self.cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
                return Err(invalid(self).into());
            }
            kind = TokenKind::Float;
        }
        if self.cursor.peek() == Some('.')
            && self.cursor.peek_second().is_some_and(|c| c.is_ascii_digit())
        {
            return Err(invalid(self).into());
        }
        self.emit(kind)?;
        self.lex_unit()
    }

    /// Unit suffix directly after a number. Unknown suffixes are errors.
    fn lex_unit(&mut self) -> Result<(), Halt<S::Error>> {
        if self.cursor.accept("%") {
            return self.emit(TokenKind::Unit(Unit::Percent));
        }
        let (offset, line) = (self.cursor.pos(), self.cursor.line());
        if self.cursor.eat_while(|c| c.is_ascii_alphabetic()) == 0 {
            return Ok(());
        }
        match Unit::from_suffix(self.cursor.lexeme()) {
            Some(unit) => self.emit(TokenKind::Unit(unit)),
            None => Err(LexError::invalid_number(offset, line, self.modes.top()).into()),
        }
    }

    /// `#` followed by exactly 3 or 6 hex digits.
    pub(super) fn lex_hex_color(&mut self) -> Result<(), Halt<S::Error>> {
        let (offset, line) = (self.cursor.token_start(), self.cursor.token_line());
        self.cursor.next();
        self.cursor.eat_while(is_name_char);
        let digits = &self.cursor.lexeme()[1..];
        if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LexError::invalid_hex_color(offset, line, self.modes.top()).into());
        }
        self.emit(TokenKind::HexColor)
    }

    /// `$name`
    pub(super) fn lex_variable_ref(&mut self) -> Result<(), Halt<S::Error>> {
        self.cursor.next();
        if self.cursor.eat_while(is_name_char) == 0 {
            return Err(self.unexpected().into());
        }
        self.emit(TokenKind::Variable)
    }

    /// Any other run of value text, up to whitespace or structure. Inside
    /// function arguments `;` belongs to the run, as in `url(data:a;b)`.
    pub(super) fn lex_constant(&mut self) -> Result<(), Halt<S::Error>> {
        let in_call = self.modes.top() == Mode::FunctionArguments;
        while let Some(c) = self.cursor.peek() {
            let ends = match c {
                ';' => !in_call,
                '{' | '}' | '(' | ')' | ',' | '"' | '\'' => true,
                _ => is_space(c) || self.cursor.matches("#{"),
            };
            if ends {
                break;
            }
            self.cursor.next();
        }
        if self.cursor.lexeme().is_empty() {
            return Err(self.unexpected().into());
        }
        self.emit(TokenKind::Constant)
    }
}
