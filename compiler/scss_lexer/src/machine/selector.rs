//! Selector sub-lexer: compound selectors, combinators, attribute and pseudo
//! selectors.
//!
//! Adjacent simple selectors are glued by a zero-width
//! [`AndCombinator`](TokenKind::AndCombinator). Two exceptions follow how
//! stylesheets are written in practice: bracket groups on the same base
//! (`a[x][y]`) follow each other without glue, and `#{` never gets glue in
//! front of it, since the interpolation may be the rest of a name.

use scss_lexer_core::is_space;

use super::{is_name_char, is_name_start, Halt, Machine, State, Step};
use crate::{Mode, TokenKind, TokenSink};

/// What the next simple selector attaches to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(super) enum Glue {
    /// Start of a compound selector.
    #[default]
    Detached,
    /// Right after a simple selector.
    Simple,
    /// Right after `]`.
    Attribute,
    /// Right after the `}` of an interpolation. A name run continues the
    /// interrupted selector.
    Interpolation,
}

fn combinator(c: char) -> Option<TokenKind> {
    match c {
        '>' => Some(TokenKind::ChildCombinator),
        '+' => Some(TokenKind::AdjacentCombinator),
        '~' => Some(TokenKind::SiblingCombinator),
        _ => None,
    }
}

/// Attribute operator at the start of `rest`. Two-rune operators are tried
/// before `=`.
fn attribute_operator(rest: &str) -> Option<(TokenKind, &'static str)> {
    const OPERATORS: [(&str, TokenKind); 6] = [
        ("~=", TokenKind::Contains),
        ("|=", TokenKind::DashMatch),
        ("^=", TokenKind::PrefixMatch),
        ("$=", TokenKind::SuffixMatch),
        ("*=", TokenKind::SubstringMatch),
        ("=", TokenKind::Equal),
    ];
    OPERATORS
        .into_iter()
        .find(|(op, _)| rest.starts_with(op))
        .map(|(op, kind)| (kind, op))
}

/// Runes of an unquoted attribute value.
fn is_unquoted_char(c: char) -> bool {
    !is_space(c) && !matches!(c, ']' | '[' | '"' | '\'')
}

impl<S: TokenSink> Machine<'_, S> {
    pub(super) fn lex_selector(&mut self) -> Step<S::Error> {
        let spaced = self.cursor.eat_while(is_space) > 0;
        let Some(c) = self.cursor.peek() else {
            return Err(self.unexpected().into());
        };
        if let Some(kind) = combinator(c) {
            self.cursor.ignore();
            self.cursor.next();
            self.emit(kind)?;
            self.cursor.ignore_spaces();
            self.detach();
            return Ok(State::Selector);
        }
        match c {
            '{' => self.open_block(),
            ',' => {
                self.cursor.ignore();
                self.cursor.next();
                self.emit(TokenKind::Comma)?;
                self.detach();
                Ok(State::Selector)
            }
            _ if spaced && self.glue != Glue::Detached => {
                self.emit(TokenKind::DescendantCombinator)?;
                self.detach();
                Ok(State::Selector)
            }
            _ => {
                self.cursor.ignore();
                self.lex_simple_selector(c)
            }
        }
    }

    /// `{` ends the selector and opens its block.
    fn open_block(&mut self) -> Step<S::Error> {
        self.cursor.ignore();
        self.modes.pop();
        self.push(Mode::Block);
        self.cursor.next();
        self.emit(TokenKind::BraceStart)?;
        self.detach();
        Ok(State::Statement)
    }

    fn detach(&mut self) {
        self.glue = Glue::Detached;
        self.compound = None;
    }

    fn lex_simple_selector(&mut self, c: char) -> Step<S::Error> {
        if self.cursor.matches("#{") {
            self.begin_interpolation()?;
            return Ok(State::Interpolation);
        }
        if self.glue == Glue::Interpolation && is_name_char(c) {
            self.cursor.eat_while(is_name_char);
            let kind = self.compound.unwrap_or(TokenKind::TagSelector);
            return self.finish_simple(kind);
        }
        if !matches!(c, '.' | '#' | '*' | '&' | '[' | ':') && !is_name_start(c) {
            return Err(self.unexpected().into());
        }

        let glued = match self.glue {
            Glue::Detached => false,
            Glue::Attribute => c != '[',
            Glue::Simple | Glue::Interpolation => true,
        };
        if glued {
            self.emit(TokenKind::AndCombinator)?;
        }

        match c {
            '[' => {
                self.push(Mode::Attribute);
                self.cursor.next();
                self.emit(TokenKind::AttrStart)?;
                Ok(State::Attribute)
            }
            ':' => self.lex_pseudo(),
            '.' => {
                self.cursor.next();
                self.expect_name()?;
                self.finish_simple(TokenKind::ClassSelector)
            }
            '#' => {
                self.cursor.next();
                self.expect_name()?;
                self.finish_simple(TokenKind::IdSelector)
            }
            '*' => {
                self.cursor.next();
                self.finish_simple(TokenKind::UniversalSelector)
            }
            '&' => {
                self.cursor.next();
                self.cursor.eat_while(is_name_char);
                self.finish_simple(TokenKind::ParentSelector)
            }
            _ => {
                self.cursor.eat_while(is_name_char);
                self.finish_simple(TokenKind::TagSelector)
            }
        }
    }

    fn finish_simple(&mut self, kind: TokenKind) -> Step<S::Error> {
        self.emit(kind)?;
        self.glue = Glue::Simple;
        self.compound = Some(kind);
        Ok(State::Selector)
    }

    /// Consume a name run; at least one rune is required.
    fn expect_name(&mut self) -> Result<(), Halt<S::Error>> {
        if self.cursor.eat_while(is_name_char) == 0 {
            return Err(self.unexpected().into());
        }
        Ok(())
    }

    /// `:name` or `::name`, with optional `(...)` arguments.
    fn lex_pseudo(&mut self) -> Step<S::Error> {
        self.cursor.next();
        self.cursor.accept(":");
        self.expect_name()?;
        let next = self.finish_simple(TokenKind::PseudoSelector)?;
        if self.cursor.peek() != Some('(') {
            return Ok(next);
        }
        self.push(Mode::PseudoArguments);
        self.cursor.next();
        self.cursor.ignore();
        Ok(State::PseudoArguments)
    }

    /// The inside of `[...]`: name, then an optional operator and value.
    pub(super) fn lex_attribute(&mut self) -> Step<S::Error> {
        let frame = self.modes.top_frame();
        self.cursor.ignore_spaces();
        if self.cursor.eat_while(is_name_char) == 0 {
            return Err(self.unclosed(frame).into());
        }
        self.emit(TokenKind::AttrName)?;
        self.cursor.ignore_spaces();

        if let Some((kind, op)) = attribute_operator(self.cursor.rest()) {
            self.cursor.eat_str(op);
            self.emit(kind)?;
            self.cursor.ignore_spaces();
            if matches!(self.cursor.peek(), Some('"' | '\'')) {
                self.lex_quoted()?;
            } else {
                if self.cursor.eat_while(is_unquoted_char) == 0 {
                    return Err(self.unclosed(frame).into());
                }
                self.emit(TokenKind::UnquotedString)?;
            }
            self.cursor.ignore_spaces();
        }

        if !self.cursor.accept("]") {
            return Err(self.unclosed(frame).into());
        }
        self.emit(TokenKind::AttrEnd)?;
        self.modes.pop();
        self.glue = Glue::Attribute;
        Ok(State::Selector)
    }

    /// Raw argument text of a functional pseudo selector, up to the
    /// balancing `)`. Whitespace inside the parentheses is kept.
    pub(super) fn lex_pseudo_arguments(&mut self) -> Step<S::Error> {
        let frame = self.modes.top_frame();
        let mut depth = 0u32;
        loop {
            match self.cursor.peek() {
                None => return Err(self.unclosed(frame).into()),
                Some(')') if depth == 0 => break,
                Some(c) => {
                    match c {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => {}
                    }
                    self.cursor.next();
                }
            }
        }
        if !self.cursor.lexeme().is_empty() {
            self.emit(TokenKind::LangCode)?;
        }
        self.cursor.next();
        self.cursor.ignore();
        self.modes.pop();
        self.glue = Glue::Simple;
        Ok(self.resume())
    }
}
