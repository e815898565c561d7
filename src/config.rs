use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Shell settings read from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    pub text_prompt: String,
    pub color: bool,
    pub verbose: bool,
    pub normalize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "*> ".into(),
            text_prompt: "+> \"".into(),
            color: true,
            verbose: false,
            normalize: true,
        }
    }
}

impl Config {
    /// `.qlang/config.toml` under the user's home directory, when there is one.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".qlang").join("config.toml"))
    }

    /// Settings for this run: `--config FILE` must exist, the default file may be absent.
    pub fn locate(cli_path: Option<&Path>) -> Result<Self> {
        match cli_path {
            Some(path) => Self::load(Some(path), true),
            None => Self::load(Self::default_path().as_deref(), false),
        }
    }

    pub fn from_toml(src: &str) -> Result<Self> {
        toml::from_str(src).context("parse config")
    }

    /// Loads `path`. A missing file is only tolerated when it is the default location.
    pub fn load(path: Option<&Path>, explicit: bool) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() && !explicit {
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        Self::from_toml(&src).with_context(|| format!("Config file {}", path.display()))
    }

    /// Command-line switches win over the file.
    pub fn with_overrides(mut self, no_color: bool, verbose: bool) -> Self {
        if no_color {
            self.color = false;
        }
        if verbose {
            self.verbose = true;
        }
        self
    }
}
