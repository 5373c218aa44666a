//! Reads the dictionary-shaped JSON export of a mind map.
//!
//! The document is a list of sheets, each with a `title` and a root `topic`.
//! A single sheet object is accepted as a one-sheet document. Fields the
//! compiler does not use (ids, structure names, styles) are ignored.

use crate::topic::Sheet;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Sheets(Vec<Sheet>),
    Single(Sheet),
}

/// Parse sheets from JSON text.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the text is not a sheet list or a sheet.
pub fn parse_sheets(json: &str) -> Result<Vec<Sheet>> {
    let document: Document = serde_json::from_str(json).map_err(|e| {
        Error::Parse(format!(
            "expected a list of sheets with 'title' and 'topic': {e}"
        ))
    })?;

    Ok(match document {
        Document::Sheets(sheets) => sheets,
        Document::Single(sheet) => vec![sheet],
    })
}

/// Read and parse a sheets JSON file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`] for
/// malformed content.
pub fn load_sheets(path: &Path) -> Result<Vec<Sheet>> {
    let content = fs::read_to_string(path)?;
    let sheets = parse_sheets(&content)?;
    tracing::debug!("read {} sheets from {}", sheets.len(), path.display());
    Ok(sheets)
}
