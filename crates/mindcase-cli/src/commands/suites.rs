//! Suites command implementation

use anyhow::{Context, Result};
use mindcase_core::reader::load_sheets;
use mindcase_core::{Config, xmind_to_suites};
use std::path::Path;

/// Print the converted suites as JSON on stdout.
pub fn execute(input: &Path, pretty: bool, config: &Config) -> Result<()> {
    let sheets =
        load_sheets(input).with_context(|| format!("reading {}", input.display()))?;
    let conversion = xmind_to_suites(&sheets, config)?;

    for diagnostic in &conversion.diagnostics {
        tracing::warn!(sheet = ?diagnostic.sheet, "{}", diagnostic.message);
    }

    let json = if pretty {
        serde_json::to_string_pretty(&conversion.suites)?
    } else {
        serde_json::to_string(&conversion.suites)?
    };
    println!("{json}");
    Ok(())
}
