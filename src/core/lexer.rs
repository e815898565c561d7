// lexer.rs

use serde::Serialize;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::core::state::State;
use crate::core::token::Token;
use crate::debug_log;

/// Delimiter that opens and closes a text literal.
pub const QUOTE: char = '"';

/// Receives every token the lexer closes, in scan order.
pub trait TokenSink {
    fn accept(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    fn accept(&mut self, token: Token) {
        self.push(token);
    }
}

/// Transition picked for one (state, character) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    TextEnd,
    TextCont,
    SymbolCont,
    SymbolResume,
    SymbolSpace,
    SymbolSkip,
    NumberCont,
    NumberStart,
    SymbolStart,
    SignStart,
    DecStart,
    FracStart,
    ExpStart,
    NumberToSymbol,
    TextStart,
    Break,
}

/// Classifies one character against the current state. `digits` tells whether the
/// buffered run holds a digit yet; the fraction, exponent and number-to-symbol rules
/// need one.
///
/// Arms are tried top to bottom and the first match wins, so the order is part of the
/// language: a digit continues `NUMBER` before it could start anything, `e` after digits
/// is an exponent before it could turn the run into a symbol, and so on. Every pair
/// lands somewhere because the last arm is the catch-all `Break`.
pub fn classify(state: State, ch: char, digits: bool) -> Rule {
    let numeric = state.takes_digits() && digits;
    match (state, ch) {
        (State::Text, QUOTE) => Rule::TextEnd,
        (State::Text, _) => Rule::TextCont,
        (State::Symbol, c) if is_symbol_part(c) => Rule::SymbolCont,
        (State::SSpace, c) if is_symbol_part(c) => Rule::SymbolResume,
        (State::Symbol, c) if c.is_whitespace() => Rule::SymbolSpace,
        (State::SSpace, c) if c.is_whitespace() => Rule::SymbolSkip,
        (s, c) if s.takes_digits() && is_digit(c) => Rule::NumberCont,
        (State::None | State::NSign, c) if is_digit(c) => Rule::NumberStart,
        (State::None, c) if is_symbol_start(c) => Rule::SymbolStart,
        (State::None | State::NSign, '+' | '-') => Rule::SignStart,
        (State::None | State::NSign, '.' | ',') => Rule::DecStart,
        (_, '.' | ',') if numeric => Rule::DecStart,
        (_, '/') if numeric => Rule::FracStart,
        (_, 'e' | 'E') if numeric => Rule::ExpStart,
        // `123abc` reads as one symbol rather than a number followed by junk.
        (_, c) if numeric && is_symbol_start(c) => Rule::NumberToSymbol,
        (State::None, QUOTE) => Rule::TextStart,
        _ => Rule::Break,
    }
}

/// Partial-token buffer plus the state it was scanned in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lexer {
    token: String,
    state: State,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Characters of the token still being built.
    pub fn pending(&self) -> &str {
        &self.token
    }

    pub fn in_text(&self) -> bool {
        self.state == State::Text
    }

    /// Scans one line. An open text literal absorbs a newline and stays open; any other
    /// partial token is closed so the lexer always ends in `NONE` or `TEXT`.
    pub fn scan_line(&mut self, code: &str, sink: &mut impl TokenSink) {
        for ch in code.chars() {
            self.step(ch, sink);
        }
        if self.in_text() {
            self.token.push('\n');
        } else if !self.token.is_empty() {
            self.close(sink);
        } else {
            self.state = State::None;
        }
    }

    /// Ends the session. An open literal gets its closing delimiter appended and is
    /// emitted; returns whether that happened.
    pub fn finish(&mut self, sink: &mut impl TokenSink) -> bool {
        let forced = self.in_text();
        if forced {
            self.token.push(QUOTE);
            self.state = State::TEnd;
            debug_log!("[lexer] forced text termination");
        }
        if !self.token.is_empty() {
            self.close(sink);
        }
        forced
    }

    /// Drops whatever was partially typed.
    pub fn discard(&mut self) {
        debug_log!("[lexer] discarding partial token {:?}", self.token);
        self.token.clear();
        self.state = State::None;
    }

    fn step(&mut self, ch: char, sink: &mut impl TokenSink) {
        let rule = classify(self.state, ch, self.holds_digit());
        debug_log!("[lexer] {} {:?} -> {:?}", self.state, ch, rule);
        match rule {
            Rule::TextEnd => {
                self.token.push(ch);
                self.state = State::TEnd;
                self.close(sink);
            }
            Rule::TextCont | Rule::SymbolCont | Rule::NumberCont => self.token.push(ch),
            Rule::SymbolResume => {
                self.token.push(' ');
                self.token.push(ch);
                self.state = State::Symbol;
            }
            Rule::SymbolSpace => self.state = State::SSpace,
            Rule::SymbolSkip => {}
            Rule::NumberStart => self.shift(ch, State::Number),
            Rule::SymbolStart | Rule::NumberToSymbol => self.shift(ch, State::Symbol),
            Rule::SignStart => self.shift(ch, State::NSign),
            Rule::DecStart => self.shift(ch, State::NDec),
            Rule::FracStart => self.shift(ch, State::NFrac),
            Rule::ExpStart => self.shift(ch, State::NExp),
            Rule::TextStart => self.shift(ch, State::Text),
            Rule::Break => {
                if !self.token.is_empty() {
                    self.close(sink);
                }
                if ch.is_whitespace() {
                    return;
                }
                // every other character stands alone
                self.token.push(ch);
                self.state = State::None;
                self.close(sink);
            }
        }
    }

    fn holds_digit(&self) -> bool {
        self.state.takes_digits() && self.token.chars().any(is_digit)
    }

    #[inline]
    fn shift(&mut self, ch: char, next: State) {
        self.token.push(ch);
        self.state = next;
    }

    /// Emits the buffered token with the kind its state resolves to, then resets.
    fn close(&mut self, sink: &mut impl TokenSink) {
        let Some(kind) = self.state.resolve() else {
            // partial text
            return;
        };
        if self.token.is_empty() {
            debug_log!("[lexer] ignoring empty token");
        } else {
            let token = Token::new(kind, std::mem::take(&mut self.token));
            debug_log!("[lexer] emit {}", token);
            sink.accept(token);
        }
        self.state = State::None;
    }
}

// Character classes

pub fn is_symbol_start(ch: char) -> bool {
    ch == '_' || ch == '\'' || is_xid_start(ch)
}
pub fn is_symbol_part(ch: char) -> bool {
    ch == '_' || ch == '\'' || is_xid_continue(ch)
}
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}


// End of file
