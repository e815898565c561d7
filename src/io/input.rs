//! Program input: inline text, a file, or stdin, optionally NFC-normalized.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Read;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::cli::Source;

pub fn read_source(source: &Source) -> Result<String> {
    if let Some(code) = &source.code {
        return Ok(code.clone());
    }
    if let Some(path) = &source.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Read program {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Read program from stdin")?;
    Ok(buf)
}

/// NFC form of `line` when `enabled`; borrowed when nothing changes.
pub fn normalize(line: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled || is_nfc(line) {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(line.nfc().collect())
    }
}
