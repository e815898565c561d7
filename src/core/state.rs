// src/core/state.rs
use serde::Serialize;

use crate::core::token::TokenKind;

/// Scanner states. Only `None` and `Text` survive the end of a scan call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    #[default]
    None,
    Text,
    TEnd,
    Symbol,
    SSpace,
    Number,
    NDec,
    NFrac,
    NExp,
    NSign,
}

impl State {
    pub const ALL: [State; 10] = [
        State::None,
        State::Text,
        State::TEnd,
        State::Symbol,
        State::SSpace,
        State::Number,
        State::NDec,
        State::NFrac,
        State::NExp,
        State::NSign,
    ];

    pub fn name(self) -> &'static str {
        match self {
            State::None => "NONE",
            State::Text => "TEXT",
            State::TEnd => "TEND",
            State::Symbol => "SYMBOL",
            State::SSpace => "SSPACE",
            State::Number => "NUMBER",
            State::NDec => "NDEC",
            State::NFrac => "NFRAC",
            State::NExp => "NEXP",
            State::NSign => "NSIGN",
        }
    }

    pub fn is_number_family(self) -> bool {
        matches!(
            self,
            State::Number | State::NDec | State::NFrac | State::NExp | State::NSign
        )
    }

    /// Number states a further digit continues. Only `NDec` can be entered before any
    /// digit was seen (`.`, `-.`).
    pub fn takes_digits(self) -> bool {
        matches!(self, State::Number | State::NDec | State::NFrac | State::NExp)
    }

    /// Kind a buffered token takes when it is closed in this state.
    /// `None` while a text literal is still open.
    pub fn resolve(self) -> Option<TokenKind> {
        match self {
            State::Text => None,
            State::Symbol | State::SSpace => Some(TokenKind::Symbol),
            State::TEnd => Some(TokenKind::Text),
            s if s.is_number_family() => Some(TokenKind::Number),
            _ => Some(TokenKind::Operator),
        }
    }

    /// States a scan call is allowed to return in.
    pub fn is_resumable(self) -> bool {
        matches!(self, State::None | State::Text)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
