//! qlang: an interactive interpreter for a minimal stack/queue language.
//!
//! The `core` module holds the scanner, the evaluator and the session context they
//! share. Everything else (command line, config, shell) drives that core one line at a
//! time.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;
