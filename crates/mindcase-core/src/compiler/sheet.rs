//! Per-sheet conversion context.

use crate::config::ConvertConfig;

/// Per-sheet conversion state.
///
/// Created once for every sheet and passed down the traversal, so the title
/// separator chosen by one sheet never reaches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetContext {
    /// Separator joining ancestor titles into case names
    pub separator: String,
    /// Root title with the separator marker removed
    pub suite_name: String,
}

impl SheetContext {
    /// Derive the separator from the last character of the sheet's root title.
    ///
    /// A trailing character from `valid_separators` becomes the separator and
    /// is stripped from the suite name; otherwise the default separator is used
    /// and the title is kept as is.
    pub fn resolve(root_title: &str, config: &ConvertConfig) -> Self {
        match root_title.chars().last() {
            Some(last) if config.valid_separators.contains(last) => {
                tracing::debug!("found separator '{last}' for joining case titles");
                Self {
                    separator: last.to_string(),
                    suite_name: root_title[..root_title.len() - last.len_utf8()].to_string(),
                }
            },
            _ => Self {
                separator: config.default_separator.clone(),
                suite_name: root_title.to_string(),
            },
        }
    }
}
