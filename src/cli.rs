use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "qlang",
    about = "qlang — interactive stack/queue language",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QlangCli {
    /// Global: path to config (TOML); default: ~/.qlang/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: report every evaluator step, not only warnings
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Program text given inline or read from a file.
#[derive(Debug, Clone, clap::Args)]
pub struct Source {
    /// Program text
    #[arg(value_name = "CODE", conflicts_with = "file")]
    pub code: Option<String>,

    /// Read the program from FILE instead
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive shell (default when no subcommand is given)
    Repl,

    /// Evaluate a whole program and print the final context
    ///
    /// Examples:
    ///   qlang eval '5 x = x *'
    ///   qlang eval --file prog.q --json
    Eval {
        #[command(flatten)]
        source: Source,

        /// Print the final context as JSON
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Scan only and print one token per line
    Tokens {
        #[command(flatten)]
        source: Source,
    },
}
