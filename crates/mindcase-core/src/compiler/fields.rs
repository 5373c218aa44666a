//! Case-level fields aggregated from the ancestor chain.
//!
//! Every function takes the chain from the first topic below the suite down to
//! the case topic itself, nearest last.

use super::sheet::SheetContext;
use crate::config::ConvertConfig;
use crate::topic::{Topic, filter_elements};
use crate::types::ExecutionType;

const AUTOMATIC_LABELS: &[&str] = &["自动", "auto", "automate", "automation"];
const MANUAL_LABELS: &[&str] = &["手动", "手工", "manual"];

/// Number of trailing chain titles kept in a case name.
const TITLE_DEPTH: usize = 2;

/// Join the nearest meaningful ancestor title and the case title with the
/// sheet separator.
///
/// `case_title` replaces the case topic's own title, which differs from it
/// for expanded parameter combinations. It is always the last part of the
/// name, even when a substituted value makes it look ignorable; a blank
/// `case_title` falls back to the case topic's template title.
pub fn title(
    chain: &[&Topic],
    case_title: &str,
    sheet: &SheetContext,
    config: &ConvertConfig,
) -> String {
    let (own, ancestors) = match chain.split_last() {
        Some((topic, ancestors)) => (topic.title().trim(), ancestors),
        None => ("", chain),
    };
    let case_title = match case_title.trim() {
        "" => own,
        trimmed => trimmed,
    };

    let mut titles = filter_elements(
        ancestors.iter().map(|topic| topic.title.as_deref()),
        &config.ignore_chars,
    );
    titles.push(case_title.to_string());

    let start = titles.len().saturating_sub(TITLE_DEPTH);
    titles[start..].join(&sheet.separator)
}

/// Number every meaningful note as `"<n>. <note>"`.
pub fn preconditions(chain: &[&Topic], config: &ConvertConfig) -> String {
    let notes = filter_elements(
        chain.iter().map(|topic| topic.note.as_deref()),
        &config.ignore_chars,
    );
    if notes.is_empty() {
        return config.empty_placeholder.clone();
    }

    notes
        .iter()
        .enumerate()
        .map(|(index, note)| format!("{}. {note}", index + 1))
        .collect::<Vec<_>>()
        .join(&config.precondition_separator)
}

/// Join every meaningful comment of the chain.
pub fn summary(chain: &[&Topic], config: &ConvertConfig) -> String {
    let comments = filter_elements(
        chain.iter().map(|topic| topic.comment.as_deref()),
        &config.ignore_chars,
    );
    if comments.is_empty() {
        config.empty_placeholder.clone()
    } else {
        comments.join(&config.summary_separator)
    }
}

/// Execution type from the nearest label that names one.
pub fn execution_type(chain: &[&Topic], config: &ConvertConfig) -> ExecutionType {
    let labels = filter_elements(
        chain
            .iter()
            .flat_map(|topic| topic.labels.iter().map(|label| Some(label.as_str()))),
        &config.ignore_chars,
    );

    for label in labels.iter().rev() {
        let label = label.to_lowercase();
        if AUTOMATIC_LABELS.contains(&label.as_str()) {
            return ExecutionType::Automatic;
        }
        if MANUAL_LABELS.contains(&label.as_str()) {
            return ExecutionType::Manual;
        }
    }
    ExecutionType::Manual
}
