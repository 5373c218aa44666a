//! Shared helpers for the CLI commands.

pub mod logging;

use anyhow::{Context, Result};
use mindcase_core::Config;
use std::path::Path;

/// Load configuration from an explicit path, or from the default lookup.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load().context("loading config"),
    }
}
