use anyhow::Context as _;

use crate::cli::Source;
use crate::config::Config;
use crate::core::diagnostics::Event;
use crate::core::render::Renderer;
use crate::core::Context;
use crate::io::input::{normalize, read_source};
use crate::shell::print_events;

/// Feeds `code` through a fresh session one line at a time, then finishes it.
pub fn run_program(code: &str, normalize_input: bool) -> (Context, Vec<Event>) {
    let mut context = Context::new();
    let mut events = Vec::new();
    for line in code.lines() {
        let scanned = context.parse(&normalize(line, normalize_input));
        events.extend(scanned.events);
        context = scanned.context;
    }
    let done = context.finish();
    events.extend(done.events);
    (done.context, events)
}

pub fn main(source: Source, json: bool, config: &Config) -> anyhow::Result<()> {
    let code = read_source(&source)?;
    let (context, events) = run_program(&code, config.normalize);
    if json {
        let out = serde_json::to_string_pretty(&context).context("serialize context")?;
        println!("{out}");
        return Ok(());
    }
    print_events(&events, config.verbose, config.color);
    print!("{}", Renderer::new(config.color).context(&context));
    Ok(())
}
