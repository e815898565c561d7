/// qlang main: subcommands + interactive shell by default.
use clap::Parser; // trait import enables QlangCli::parse()

use qlang::cli::{Command, QlangCli};
use qlang::commands;
use qlang::config::Config;
use qlang::shell;

fn main() -> anyhow::Result<()> {
    let args = QlangCli::parse();

    let config = Config::locate(args.config.as_deref())?.with_overrides(args.no_color, args.verbose);
    if !config.color {
        colored::control::set_override(false);
    }

    match args.cmd {
        None | Some(Command::Repl) => shell::start(&config),
        Some(Command::Eval { source, json }) => commands::eval::main(source, json, &config),
        Some(Command::Tokens { source }) => commands::tokens::main(source, &config),
    }
}
