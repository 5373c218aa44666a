//! Test steps below a case topic and the case-level result.

use crate::error::{Error, Result, TopicRole};
use crate::markers::ResultVocabulary;
use crate::topic::Topic;
use crate::types::{TestResult, TestStep};

/// Parse the children of a case topic as its steps, numbered from 1.
///
/// A step with exactly one child takes that child as its expected result, and
/// the child's markers decide the step result. Otherwise the step's own markers
/// decide and the expected result is empty.
pub fn parse_steps(topics: &[Topic], vocabulary: &ResultVocabulary) -> Result<Vec<TestStep>> {
    topics
        .iter()
        .enumerate()
        .map(|(index, topic)| parse_step(index + 1, topic, vocabulary))
        .collect()
}

fn parse_step(step_number: usize, topic: &Topic, vocabulary: &ResultVocabulary) -> Result<TestStep> {
    let (expected_results, markers) = match topic.children.as_slice() {
        [expected] => (
            expected.title().to_string(),
            markers_of(expected, TopicRole::ExpectedResult)?,
        ),
        [] => (String::new(), markers_of(topic, TopicRole::Step)?),
        _ => (String::new(), topic.marker_list()),
    };

    let step = TestStep {
        step_number,
        actions: topic.title().to_string(),
        expected_results,
        result: vocabulary.result(markers),
    };
    tracing::debug!(step = step.step_number, actions = %step.actions, "found a test step");
    Ok(step)
}

pub(crate) fn markers_of(topic: &Topic, role: TopicRole) -> Result<&[String]> {
    topic
        .markers
        .as_deref()
        .ok_or_else(|| Error::MissingMarkers {
            topic: topic.title().to_string(),
            role,
        })
}

/// Roll step results up into the case result.
///
/// A result marked on the case itself wins. Otherwise the first failed or
/// blocked step decides; failing that, the last step's result is kept.
pub fn aggregate_result(own: TestResult, steps: &[TestStep]) -> TestResult {
    if own != TestResult::None {
        return own;
    }

    let mut result = TestResult::None;
    for step in steps {
        match step.result {
            TestResult::Failed | TestResult::Blocked => return step.result,
            other => result = other,
        }
    }
    result
}
