//! Convert command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use mindcase_core::reader::load_sheets;
use mindcase_core::{Config, DiagnosticSeverity, ZentaoExporter, xmind_to_suites};
use std::path::{Path, PathBuf};

/// Convert a mind-map export and write the Zentao CSV.
pub fn execute(
    input: &Path,
    output: Option<PathBuf>,
    product: Option<String>,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let sheets =
        load_sheets(input).with_context(|| format!("reading {}", input.display()))?;
    let conversion = xmind_to_suites(&sheets, config)?;

    let output = output.unwrap_or_else(|| input.with_extension("csv"));
    let exporter = ZentaoExporter::new(&config.export)?.with_product(product);
    let written = exporter
        .write_csv(&output, &conversion.suites)
        .with_context(|| format!("writing {}", output.display()))?;

    if quiet {
        return Ok(());
    }

    for diagnostic in &conversion.diagnostics {
        let label = match diagnostic.severity {
            DiagnosticSeverity::Error => "error".red(),
            DiagnosticSeverity::Warn => "warning".yellow(),
            DiagnosticSeverity::Info => "info".normal(),
        };
        let sheet = diagnostic.sheet.as_deref().unwrap_or("-");
        eprintln!("{label}: [{sheet}] {}", diagnostic.message);
    }

    println!(
        "✓ Wrote {} cases to {} ({} diagnostics)",
        written.to_string().green(),
        output.display(),
        conversion.diagnostics.len()
    );
    Ok(())
}
