//! Session context threaded between driver calls.
//!
//! A `Context` is a plain owned value. Every operation takes `&self` and hands back a
//! new context, so a driver can keep rendering the previous one while a multi-line
//! literal is still being typed.

use serde::Serialize;

use crate::core::diagnostics::Event;
use crate::core::evaluator::{Evaluation, Machine};
use crate::core::lexer::Lexer;
use crate::core::state::State;
use crate::core::symbols::SymbolTable;
use crate::core::token::{TokenKind, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    #[serde(flatten)]
    lexer: Lexer,
    #[serde(flatten)]
    machine: Machine,
}

/// A new context plus everything the evaluator reported while producing it.
#[derive(Debug, Clone)]
pub struct Scanned {
    pub context: Context,
    pub events: Vec<Event>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans and evaluates one line of input.
    pub fn parse(&self, code: &str) -> Scanned {
        let mut next = self.clone();
        let mut events = Vec::new();
        next.lexer.scan_line(
            code,
            &mut Evaluation { machine: &mut next.machine, events: &mut events },
        );
        debug_assert!(next.state().is_resumable());
        Scanned { context: next, events }
    }

    /// Ends the session, closing an unterminated literal first.
    pub fn finish(&self) -> Scanned {
        let mut next = self.clone();
        let mut events = Vec::new();
        let forced = next
            .lexer
            .finish(&mut Evaluation { machine: &mut next.machine, events: &mut events });
        if forced {
            events.insert(0, Event::ForcedTextTermination);
        }
        Scanned { context: next, events }
    }

    /// Same session with the partially entered token thrown away.
    pub fn interrupt(&self) -> Context {
        let mut next = self.clone();
        next.lexer.discard();
        next
    }

    pub fn state(&self) -> State {
        self.lexer.state()
    }

    pub fn pending_token(&self) -> &str {
        self.lexer.pending()
    }

    /// Kind the pending token would close as; `None` while a literal is open.
    pub fn pending_kind(&self) -> Option<TokenKind> {
        self.state().resolve()
    }

    pub fn in_text(&self) -> bool {
        self.lexer.in_text()
    }

    pub fn queue(&self) -> &[Value] {
        self.machine.queue()
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.machine.symbols()
    }
}
