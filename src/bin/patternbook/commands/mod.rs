//! Command implementations

pub mod completions;
pub mod interactive;
pub mod list;
pub mod principle;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};

use patternbook::util::config::{self, Config};

/// Load configuration for this invocation.
///
/// An explicit path must exist and parse. Otherwise the global and project
/// files are merged, falling back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project = config::project_config_path(&cwd);

    Ok(match config::global_config_path() {
        Some(global) => config::load_config(&global, &project),
        None => config::load_config(Path::new(""), &project),
    })
}
