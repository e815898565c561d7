use anyhow::Context as _;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::core::diagnostics::Event;
use crate::core::render::Renderer;
use crate::core::Context;
use crate::io::input::normalize;

pub fn start(config: &Config) -> anyhow::Result<()> {
    banner(config.color);

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("install Ctrl-C handler")?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock(), config, &interrupted)?;
    Ok(())
}

/// Read-eval-print loop over any line source. Returns the finished context.
///
/// A set `interrupted` flag (Ctrl-C) throws away the partial token together with the
/// line that was being read.
pub fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    config: &Config,
    interrupted: &AtomicBool,
) -> anyhow::Result<Context> {
    let renderer = Renderer::new(config.color);
    let mut context = Context::new();

    loop {
        // reprinting the queue is too noisy while entering multiline text
        if !context.in_text() {
            write!(out, "{}", renderer.context(&context))?;
        }
        let prompt = if context.in_text() { &config.text_prompt } else { &config.prompt };
        if config.color {
            write!(out, "{}", prompt.truecolor(255, 240, 0))?;
        } else {
            write!(out, "{prompt}")?;
        }
        out.flush().ok();

        let mut line = String::new();
        let read = match input.read_line(&mut line) {
            Ok(n) => Some(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => None,
            // the undecodable line is already consumed; report it and keep the session
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                write_error(out, &e, config.color)?;
                continue;
            }
            Err(e) => return Err(e).context("read input line"),
        };
        if interrupted.swap(false, Ordering::SeqCst) || read.is_none() {
            writeln!(out, "Interrupt")?;
            context = context.interrupt();
            continue;
        }
        if read == Some(0) {
            writeln!(out, "EOF")?;
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        let scanned = context.parse(&normalize(line, config.normalize));
        write_events(out, &scanned.events, config.verbose, config.color)?;
        context = scanned.context;
    }

    let done = context.finish();
    write_events(out, &done.events, true, config.color)?;
    writeln!(out, "Final Context:")?;
    write!(out, "{}", renderer.context(&done.context))?;
    Ok(done.context)
}

/// Warnings are always shown; informational events only when `verbose`.
pub fn write_events(
    out: &mut impl Write,
    events: &[Event],
    verbose: bool,
    color: bool,
) -> io::Result<()> {
    for event in events {
        if event.is_warning() {
            let label = if color { "warn:".yellow().bold().to_string() } else { "warn:".to_string() };
            writeln!(out, "{label} {event}")?;
        } else if verbose {
            let msg = event.to_string();
            if color {
                writeln!(out, "{}", msg.truecolor(130, 0, 200))?;
            } else {
                writeln!(out, "{msg}")?;
            }
        }
    }
    Ok(())
}

fn write_error(out: &mut impl Write, err: &dyn std::fmt::Display, color: bool) -> io::Result<()> {
    let label = if color { "err:".red().bold().to_string() } else { "err:".to_string() };
    writeln!(out, "{label} {err}")
}

pub fn print_events(events: &[Event], verbose: bool, color: bool) {
    let stdout = io::stdout();
    if let Err(e) = write_events(&mut stdout.lock(), events, verbose, color) {
        eprintln!("{} {}", "err:".red().bold(), e);
    }
}

fn banner(color: bool) {
    let title = "qlang — queue language shell";
    let hint = "@ quote  * explode/deref  = assign  ~ delete  ^D ends the session";
    if color {
        println!("{}", title.bold().truecolor(225, 0, 180));
        println!("{}", hint.truecolor(130, 0, 200));
    } else {
        println!("{title}");
        println!("{hint}");
    }
}
