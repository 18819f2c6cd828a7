//! Statements that end in a value: property declarations, variable
//! assignments and at-rules, plus the value lexer they share.

use super::{is_name_char, is_name_start, Halt, Machine, State, Step};
use crate::{LexError, Mode, TokenKind, TokenSink};

fn at_keyword(name: &str) -> Option<TokenKind> {
    match name {
        "import" => Some(TokenKind::Import),
        "charset" => Some(TokenKind::Charset),
        "extend" => Some(TokenKind::Extend),
        "include" => Some(TokenKind::Include),
        _ => None,
    }
}

impl<S: TokenSink> Machine<'_, S> {
    /// `@keyword value;`
    pub(super) fn lex_at_rule(&mut self) -> Step<S::Error> {
        let (offset, line) = (self.cursor.pos(), self.cursor.line());
        self.cursor.next();
        self.cursor.eat_while(is_name_char);
        let Some(kind) = at_keyword(&self.cursor.lexeme()[1..]) else {
            return Err(LexError::unexpected(Some('@'), offset, line, self.modes.top()).into());
        };
        self.emit(kind)?;
        self.push(Mode::Value);
        Ok(State::Value)
    }

    /// `$name: value;` at statement level.
    pub(super) fn lex_variable(&mut self) -> Step<S::Error> {
        self.lex_variable_ref()?;
        self.expect_colon()?;
        self.push(Mode::Value);
        Ok(State::Value)
    }

    /// `name: value;` inside a block. A vendor prefix (`-webkit-`) is part
    /// of the name.
    pub(super) fn lex_property(&mut self) -> Step<S::Error> {
        match self.cursor.peek() {
            Some(c) if c == '-' || is_name_start(c) => {}
            _ => return Err(self.unexpected().into()),
        }
        self.cursor.eat_while(is_name_char);
        self.emit(TokenKind::PropertyName)?;
        self.expect_colon()?;
        self.push(Mode::Value);
        Ok(State::Value)
    }

    fn expect_colon(&mut self) -> Result<(), Halt<S::Error>> {
        self.cursor.ignore_spaces();
        if !self.cursor.accept(":") {
            return Err(self.unexpected().into());
        }
        self.emit(TokenKind::Colon)
    }

    /// One step of a value: its terminator or the next component.
    pub(super) fn lex_value(&mut self) -> Step<S::Error> {
        self.cursor.ignore_spaces();
        let frame = self.modes.top_frame();
        let in_call = frame.mode == Mode::FunctionArguments;
        match self.cursor.peek() {
            None if in_call => Err(self.unclosed(frame).into()),
            None => Err(LexError::missing_semicolon(self.cursor.pos(), self.cursor.line()).into()),
            Some('}') if in_call => Err(LexError::unterminated_literal(
                ')',
                frame.offset,
                frame.line,
                frame.mode,
            )
            .into()),
            Some(';') if !in_call => {
                self.cursor.next();
                self.emit(TokenKind::Semicolon)?;
                self.modes.pop();
                Ok(self.resume())
            }
            Some('}') if self.config.require_semicolon => {
                Err(LexError::missing_semicolon(self.cursor.pos(), self.cursor.line()).into())
            }
            Some('}') => {
                self.modes.pop();
                Ok(self.resume())
            }
            Some(')') if in_call => {
                self.cursor.next();
                self.emit(TokenKind::ParenEnd)?;
                self.modes.pop();
                Ok(self.resume())
            }
            Some(_) => self.lex_value_component(State::Value),
        }
    }

    /// Lex one value component and continue with `then`. The read position
    /// must be on the component's first rune with an empty pending lexeme.
    pub(super) fn lex_value_component(&mut self, then: State) -> Step<S::Error> {
        let Some(c) = self.cursor.peek() else {
            return Err(self.unexpected().into());
        };
        match c {
            '$' => self.lex_variable_ref()?,
            '#' if self.cursor.matches("#{") => {
                self.begin_interpolation()?;
                return Ok(State::Interpolation);
            }
            '#' => self.lex_hex_color()?,
            '"' | '\'' => self.lex_quoted()?,
            ',' => {
                self.cursor.next();
                self.emit(TokenKind::Comma)?;
            }
            '(' => {
                self.push(Mode::FunctionArguments);
                self.cursor.next();
                self.emit(TokenKind::ParenStart)?;
                return Ok(State::Value);
            }
            ';' if self.modes.top() == Mode::FunctionArguments => self.lex_constant()?,
            '{' | '}' | ')' | ';' => return Err(self.unexpected().into()),
            _ if self.at_number() => self.lex_number()?,
            _ => self.lex_constant()?,
        }
        Ok(then)
    }
}
