// src/core/render.rs
//! Console rendering of a context: the pending token and the queue as a bracketed tree.

use colored::Colorize;
use std::fmt::Write;

use crate::core::context::Context;
use crate::core::token::{TokenKind, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn context(&self, context: &Context) -> String {
        let mut out = String::new();
        if context.in_text() {
            let _ = writeln!(out, "{} {:?}", self.header("Partial Text:"), context.pending_token());
        } else if let Some(kind) = context.pending_kind().filter(|_| !context.pending_token().is_empty()) {
            let _ = writeln!(
                out,
                "{} {} {:?}",
                self.header("Token:"),
                self.tag(kind),
                context.pending_token()
            );
        }
        self.write_queue(&mut out, context.queue(), 0);
        out
    }

    fn write_queue(&self, out: &mut String, queue: &[Value], depth: usize) {
        let indent = " ".repeat(depth);
        if queue.is_empty() {
            let _ = writeln!(out, "{indent}{}", self.bracket("[]"));
            return;
        }
        for value in queue {
            match value {
                Value::Queue(inner) => {
                    let _ = writeln!(out, "{indent}{}", self.bracket("["));
                    self.write_queue(out, inner, depth + 1);
                    let _ = writeln!(out, "{indent}{}", self.bracket("]"));
                }
                Value::Scalar(token) => {
                    let _ = writeln!(out, "{indent}  {} {:?}", self.tag(token.kind), token.text);
                }
            }
        }
    }

    fn tag(&self, kind: TokenKind) -> String {
        let c = kind.chr().to_string();
        if !self.color {
            return c;
        }
        match kind {
            TokenKind::Error => c.red().bold().to_string(),
            TokenKind::Operator => c.magenta().to_string(),
            TokenKind::Text => c.green().to_string(),
            TokenKind::Symbol => c.cyan().to_string(),
            TokenKind::Number => c.yellow().to_string(),
            TokenKind::Queue => c.blue().to_string(),
        }
    }

    fn bracket(&self, s: &str) -> String {
        if self.color { s.blue().bold().to_string() } else { s.to_string() }
    }

    fn header(&self, s: &str) -> String {
        if self.color { s.dimmed().to_string() } else { s.to_string() }
    }
}
