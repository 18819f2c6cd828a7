//! `#{...}` spans, in selectors and in values.

use super::selector::Glue;
use super::{Halt, Machine, State, Step};
use crate::{InterpolationBody, LexError, Mode, TokenKind, TokenSink};

impl<S: TokenSink> Machine<'_, S> {
    /// Consume `#{` and open the interpolation. The pending lexeme must be
    /// empty.
    pub(super) fn begin_interpolation(&mut self) -> Result<(), Halt<S::Error>> {
        self.push(Mode::Interpolation);
        self.cursor.eat_str("#{");
        self.emit(TokenKind::InterpolationStart)
    }

    /// The body of an interpolation, then its closing `}`.
    pub(super) fn lex_interpolation(&mut self) -> Step<S::Error> {
        let frame = self.modes.top_frame();
        match self.config.interpolation {
            InterpolationBody::Opaque => {
                if self.cursor.til("}").is_none() {
                    return Err(LexError::unterminated_literal(
                        '}',
                        frame.offset,
                        frame.line,
                        frame.mode,
                    )
                    .into());
                }
                self.cursor.ignore();
            }
            InterpolationBody::Tokens => {
                self.cursor.ignore_spaces();
                match self.cursor.peek() {
                    None => return Err(self.unclosed(frame).into()),
                    Some('}') => {}
                    Some(_) => return self.lex_value_component(State::Interpolation),
                }
            }
        }
        self.cursor.next();
        self.emit(TokenKind::InterpolationEnd)?;
        self.modes.pop();
        if self.modes.top() == Mode::Selector {
            self.glue = Glue::Interpolation;
        }
        Ok(self.resume())
    }
}
