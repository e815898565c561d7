use crate::cli::Source;
use crate::config::Config;
use crate::core::lexer::Lexer;
use crate::core::Token;
use crate::io::input::{normalize, read_source};

/// Scans without evaluating, exactly as a session would split the same lines.
pub fn scan(code: &str, normalize_input: bool) -> Vec<Token> {
    let mut lexer = Lexer::new();
    let mut tokens = Vec::new();
    for line in code.lines() {
        lexer.scan_line(&normalize(line, normalize_input), &mut tokens);
    }
    lexer.finish(&mut tokens);
    tokens
}

pub fn main(source: Source, config: &Config) -> anyhow::Result<()> {
    let code = read_source(&source)?;
    for token in scan(&code, config.normalize) {
        println!("{token}");
    }
    Ok(())
}
