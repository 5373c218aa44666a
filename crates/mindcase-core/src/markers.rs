//! Marker interpretation: priority levels and test results.

use crate::config::MarkerConfig;
use crate::types::TestResult;

const PRIORITY_PREFIX: &str = "priority";

/// Highest importance level a case can carry.
pub const MAX_IMPORTANCE: u8 = 4;

/// Read the priority from a marker set.
///
/// Accepts `priority<N>` and the reader's `priority-<N>` spelling. `N` must be
/// a positive integer and is clamped to [`MAX_IMPORTANCE`]. The first priority
/// marker wins.
pub fn priority(markers: &[String]) -> Option<u8> {
    markers.iter().find_map(|marker| parse_priority(marker))
}

fn parse_priority(marker: &str) -> Option<u8> {
    let digits = marker.strip_prefix(PRIORITY_PREFIX)?;
    let digits = digits.strip_prefix('-').unwrap_or(digits);
    let level: u32 = digits.parse().ok()?;
    if level == 0 {
        return None;
    }
    Some(u8::try_from(level.min(u32::from(MAX_IMPORTANCE))).unwrap_or(MAX_IMPORTANCE))
}

/// Marker vocabulary mapping marker identifiers to test results.
///
/// Entries are evaluated in precedence order; the first entry sharing a
/// marker with the topic decides the result.
#[derive(Debug, Clone)]
pub struct ResultVocabulary {
    entries: Vec<(TestResult, Vec<String>)>,
}

impl ResultVocabulary {
    /// Build the table from configuration, in pass, failed, blocked, skipped
    /// order.
    pub fn from_config(config: &MarkerConfig) -> Self {
        Self {
            entries: vec![
                (TestResult::Pass, config.pass.clone()),
                (TestResult::Failed, config.failed.clone()),
                (TestResult::Blocked, config.blocked.clone()),
                (TestResult::Skipped, config.skipped.clone()),
            ],
        }
    }

    /// Map a marker set to exactly one result.
    pub fn result(&self, markers: &[String]) -> TestResult {
        self.entries
            .iter()
            .find(|(_, symbols)| symbols.iter().any(|symbol| markers.contains(symbol)))
            .map_or(TestResult::None, |(result, _)| *result)
    }
}

impl Default for ResultVocabulary {
    fn default() -> Self {
        Self::from_config(&MarkerConfig::default())
    }
}
