//! Recursive descent over a suite's topics.
//!
//! [`Cases`] walks the topics below one suite depth-first, keeping the
//! ancestor chain as an explicit frame stack. Suite-intermediate topics push a
//! frame; case topics are compiled against the current chain and never pushed.
//! Cases come out lazily and in document order.

use super::Compiler;
use super::sheet::SheetContext;
use crate::Result;
use crate::markers;
use crate::topic::Topic;
use crate::types::TestCase;
use std::collections::VecDeque;
use std::slice;

/// Whether a topic is a test case rather than a grouping node.
///
/// A priority marker makes a topic a case even when it has children; those
/// children are then its steps. Without one, only leaves are cases.
pub fn is_testcase_topic(topic: &Topic) -> bool {
    markers::priority(topic.marker_list()).is_some() || topic.children.is_empty()
}

struct Frame<'a> {
    topic: &'a Topic,
    children: slice::Iter<'a, Topic>,
}

/// Lazy iterator over the cases found below a suite topic.
///
/// Each item is the outcome for one case. A corrupt case topic yields a single
/// `Err` and the walk continues with its next sibling.
pub struct Cases<'a> {
    compiler: &'a Compiler,
    sheet: &'a SheetContext,
    roots: slice::Iter<'a, Topic>,
    frames: Vec<Frame<'a>>,
    pending: VecDeque<TestCase>,
}

impl<'a> Cases<'a> {
    /// Start a walk over `topics` with an empty ancestor chain.
    pub fn new(compiler: &'a Compiler, sheet: &'a SheetContext, topics: &'a [Topic]) -> Self {
        Self {
            compiler,
            sheet,
            roots: topics.iter(),
            frames: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn next_topic(&mut self) -> Option<&'a Topic> {
        loop {
            let Some(frame) = self.frames.last_mut() else {
                return self.roots.next();
            };
            if let Some(child) = frame.children.next() {
                return Some(child);
            }
            self.frames.pop();
        }
    }
}

impl Iterator for Cases<'_> {
    type Item = Result<TestCase>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(case) = self.pending.pop_front() {
                return Some(Ok(case));
            }

            let topic = self.next_topic()?;
            if is_testcase_topic(topic) {
                let mut chain: Vec<&Topic> = self.frames.iter().map(|frame| frame.topic).collect();
                chain.push(topic);
                match self.compiler.build_cases(&chain, self.sheet) {
                    Ok(cases) => self.pending.extend(cases),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                self.frames.push(Frame {
                    topic,
                    children: topic.children.iter(),
                });
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    fn names(compiler: &Compiler, topics: &[Topic]) -> Vec<String> {
        let sheet = SheetContext {
            separator: " ".to_string(),
            suite_name: "Root".to_string(),
        };
        Cases::new(compiler, &sheet, topics)
            .map(|case| case.unwrap().name)
            .collect()
    }

    #[test]
    fn test_leaf_is_a_case() {
        assert!(is_testcase_topic(&Topic::new("Leaf")));
    }

    #[test]
    fn test_parent_without_priority_is_a_suite_node() {
        let topic = Topic::new("Group").with_children(vec![Topic::new("Leaf")]);
        assert!(!is_testcase_topic(&topic));
    }

    #[test]
    fn test_priority_beats_children() {
        let topic = Topic::new("Case")
            .with_markers(["priority-1"])
            .with_children(vec![Topic::new("Step")]);
        assert!(is_testcase_topic(&topic));
    }

    #[test]
    fn test_topic_without_markers_field_classified_by_children() {
        assert!(is_testcase_topic(&Topic::new("Leaf").without_markers()));
    }

    #[test]
    fn test_walk_yields_cases_in_document_order() {
        // Given: Nested groups with cases at several depths
        let topics = vec![
            Topic::new("Account").with_children(vec![
                Topic::new("Login").with_children(vec![Topic::new("valid"), Topic::new("invalid")]),
                Topic::new("Logout"),
            ]),
            Topic::new("Standalone"),
        ];
        let compiler = Compiler::new(&Config::default());

        // When: Walking the suite
        let found = names(&compiler, &topics);

        // Then: Every leaf is a case with its last-two-level name
        assert_eq!(found, vec!["Login valid", "Login invalid", "Account Logout", "Standalone"]);
    }

    #[test]
    fn test_priority_case_children_are_steps() {
        let topics = vec![
            Topic::new("Checkout")
                .with_markers(["priority-1"])
                .with_children(vec![Topic::new("Add item"), Topic::new("Pay")]),
        ];
        let compiler = Compiler::new(&Config::default());
        let sheet = SheetContext {
            separator: " ".to_string(),
            suite_name: "Root".to_string(),
        };

        let cases: Vec<TestCase> = Cases::new(&compiler, &sheet, &topics)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].steps.len(), 2);
        assert_eq!(cases[0].importance, 1);
    }

    #[test]
    fn test_corrupt_case_does_not_stop_the_walk() {
        let topics = vec![
            Topic::new("Broken").without_markers(),
            Topic::new("Fine"),
        ];
        let compiler = Compiler::new(&Config::default());
        let sheet = SheetContext {
            separator: " ".to_string(),
            suite_name: "Root".to_string(),
        };

        let outcomes: Vec<Result<TestCase>> = Cases::new(&compiler, &sheet, &topics).collect();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].as_ref().is_err_and(crate::Error::is_topic_local));
        assert_eq!(outcomes[1].as_ref().unwrap().name, "Fine");
    }

    #[test]
    fn test_ancestors_popped_between_branches() {
        let topics = vec![
            Topic::new("A").with_note("note A").with_children(vec![Topic::new("a1")]),
            Topic::new("B").with_children(vec![Topic::new("b1")]),
        ];
        let compiler = Compiler::new(&Config::default());
        let sheet = SheetContext {
            separator: " ".to_string(),
            suite_name: "Root".to_string(),
        };

        let cases: Vec<TestCase> = Cases::new(&compiler, &sheet, &topics)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(cases[0].preconditions, "1. note A");
        assert_eq!(cases[1].name, "B b1");
        assert_eq!(cases[1].preconditions, "无");
    }
}
