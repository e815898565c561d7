// src/core/diagnostics.rs
//! In-band reports produced while evaluating. The core never prints; callers decide
//! what to show.

use serde::Serialize;
use std::fmt;

use crate::core::token::{Token, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// `@` wrapped `len` entries into one queue value.
    Quoted { len: usize },
    /// `*` spliced a quoted queue of `len` entries back in.
    Exploded { len: usize },
    Dereferenced { name: String },
    SymbolUndefined { name: String },
    Assigned { name: String, value: Value },
    Deleted { value: Value },
    /// An operator whose preconditions did not hold was kept as a plain entry.
    Meaningless { token: Token },
    ForcedTextTermination,
}

impl Event {
    pub fn severity(&self) -> Severity {
        match self {
            Event::SymbolUndefined { .. } | Event::Meaningless { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Event::*;
        match self {
            Quoted { len } => write!(f, "Quoted: {} entries", len),
            Exploded { len } => write!(f, "Exploded: {} entries", len),
            Dereferenced { name } => write!(f, "Dereferenced: {}", name),
            SymbolUndefined { name } => write!(f, "Symbol undefined: {}", name),
            Assigned { name, value } => write!(f, "Assigned: {} = {}", name, value),
            Deleted { value } => write!(f, "Deleted: {}", value),
            Meaningless { token } => write!(f, "Meaningless token: {}", token.text),
            ForcedTextTermination => write!(f, "Forced text termination"),
        }
    }
}
