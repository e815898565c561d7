//! Core of the queue language: scanner, evaluator and the session context they share.

#[macro_use]
pub mod debug; // gated debug logging (QLANG_DEBUG=1) provides debug_log! macro
pub mod context;
pub mod diagnostics;
pub mod evaluator;
pub mod lexer;
pub mod render;
pub mod state;
pub mod symbols;
pub mod token;

pub use context::{Context, Scanned};
pub use token::{Token, TokenKind, Value};
