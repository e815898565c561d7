//! Queue evaluator: folds each completed token into the value queue.
//!
//! Literals evaluate to themselves. Four operators act on the tail of the queue:
//! `@` quote, `*` explode or dereference, `=` assign, `~` delete. An operator whose
//! precondition fails is appended like a literal and reported, so the queue never
//! loses entries to a bad operator. The one exception is `~` on an empty queue, which
//! is reported and otherwise ignored.

use serde::Serialize;

use crate::core::diagnostics::Event;
use crate::core::lexer::TokenSink;
use crate::core::symbols::SymbolTable;
use crate::core::token::{Token, TokenKind, Value};
use crate::debug_log;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Machine {
    queue: Vec<Value>,
    symbols: SymbolTable,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &[Value] {
        &self.queue
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Applies exactly one rule for `token`, recording what happened in `events`.
    pub fn eval(&mut self, token: Token, events: &mut Vec<Event>) {
        if token.kind != TokenKind::Operator {
            debug_log!("[eval] push {}", token);
            self.queue.push(token.into());
            return;
        }
        let tail = self.queue.last().map(Value::kind);
        let op = token.text.clone();
        match (op.as_str(), tail) {
            ("@", _) => self.quote(events),
            ("*", Some(TokenKind::Queue)) => self.explode(events),
            ("*", Some(TokenKind::Symbol)) => self.dereference(events),
            ("=", Some(TokenKind::Symbol)) if self.queue.len() > 1 => self.assign(events),
            ("~", Some(_)) => self.delete(events),
            // nothing to delete: reported, but the queue stays empty
            ("~", None) => events.push(Event::Meaningless { token }),
            _ => {
                debug_log!("[eval] meaningless {}", token);
                self.queue.push(token.clone().into());
                events.push(Event::Meaningless { token });
            }
        }
    }

    fn quote(&mut self, events: &mut Vec<Event>) {
        let inner = std::mem::take(&mut self.queue);
        let len = inner.len();
        self.queue.push(Value::Queue(inner));
        debug_log!("[eval] quoted {} entries", len);
        events.push(Event::Quoted { len });
    }

    fn explode(&mut self, events: &mut Vec<Event>) {
        if let Some(Value::Queue(inner)) = self.queue.pop() {
            let len = inner.len();
            self.queue.extend(inner);
            debug_log!("[eval] exploded {} entries", len);
            events.push(Event::Exploded { len });
        }
    }

    fn dereference(&mut self, events: &mut Vec<Event>) {
        let Some(slot) = self.queue.last_mut() else { return };
        let Some(name) = slot.as_symbol().map(str::to_owned) else { return };
        match self.symbols.lookup(&name) {
            Some(bound) => {
                debug_log!("[eval] {} -> {}", name, bound);
                *slot = bound.clone();
                events.push(Event::Dereferenced { name });
            }
            None => {
                debug_log!("[eval] symbol undefined: {}", name);
                *slot = Token::error().into();
                events.push(Event::SymbolUndefined { name });
            }
        }
    }

    fn assign(&mut self, events: &mut Vec<Event>) {
        let (Some(symbol), Some(value)) = (self.queue.pop(), self.queue.pop()) else {
            return;
        };
        let Some(name) = symbol.as_symbol() else { return };
        debug_log!("[eval] assign {} = {}", name, value);
        self.symbols.bind(name, value.clone());
        events.push(Event::Assigned { name: name.to_owned(), value });
    }

    fn delete(&mut self, events: &mut Vec<Event>) {
        if let Some(value) = self.queue.pop() {
            debug_log!("[eval] deleted {}", value);
            events.push(Event::Deleted { value });
        }
    }
}

/// Feeds scanned tokens straight into a machine.
pub struct Evaluation<'a> {
    pub machine: &'a mut Machine,
    pub events: &'a mut Vec<Event>,
}

impl TokenSink for Evaluation<'_> {
    fn accept(&mut self, token: Token) {
        self.machine.eval(token, self.events);
    }
}
