//! Tree-to-model compiler: mind-map sheets in, test suites out.
//!
//! ## Sheet layout
//!
//! ```text
//! Sheet root "3.6.0>"          -> root TestSuite "3.6.0", separator ">"
//! ├── Settings                 -> TestSuite "Settings"
//! │   ├── Theme                   (grouping topic, part of the chain)
//! │   │   └── Dark mode        -> TestCase "Theme>Dark mode"
//! │   └── Reset [priority-1]   -> TestCase "Reset", children are steps
//! │       └── Press reset
//! │           └── Defaults restored (expected result)
//! └── About                    -> TestSuite "About"
//! ```
//!
//! Conversion degrades per topic: a corrupt case is reported as a
//! [`Diagnostic`] and the rest of the document still converts.

pub mod descent;
pub mod fields;
pub mod params;
/// Per-sheet separator resolution
pub mod sheet;
/// Step parsing and result roll-up
pub mod steps;

pub use descent::{Cases, is_testcase_topic};
pub use sheet::SheetContext;

use crate::config::{Config, ConvertConfig};
use crate::markers::{self, ResultVocabulary};
use crate::topic::{Sheet, Topic, normalize_topics};
use crate::types::{Conversion, Diagnostic, DiagnosticSeverity, TestCase, TestSuite};
use crate::{Result, TopicRole};
use tracing::{debug, warn};

/// Converts sheets into test suites under one configuration.
///
/// Holds no per-document state, so one compiler can convert any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: ConvertConfig,
    vocabulary: ResultVocabulary,
}

impl Compiler {
    /// Create a compiler from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.convert.clone(),
            vocabulary: ResultVocabulary::from_config(&config.markers),
        }
    }

    /// Convert every sheet of a document.
    ///
    /// Blank sheets are skipped and corrupt case topics are left out; both are
    /// reported in [`Conversion::diagnostics`], as are sheets that yield no
    /// cases at all.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that are not confined to a topic.
    pub fn convert(&self, sheets: &[Sheet]) -> Result<Conversion> {
        let mut conversion = Conversion::default();

        for sheet in sheets {
            debug!("start to parse a sheet: {}", sheet.title);
            let topics = normalize_topics(&sheet.topic.children, &self.config.ignore_chars);
            if topics.is_empty() {
                warn!(
                    "blank sheet ({}), should have at least 1 sub topic (test suite)",
                    sheet.title
                );
                conversion.diagnostics.push(Diagnostic {
                    severity: DiagnosticSeverity::Warn,
                    message: "sheet has no test suites".to_string(),
                    sheet: Some(sheet.title.clone()),
                });
                continue;
            }

            let suite = self.sheet_to_suite(sheet, &topics, &mut conversion.diagnostics)?;
            if suite.case_count() == 0 {
                conversion.diagnostics.push(Diagnostic {
                    severity: DiagnosticSeverity::Info,
                    message: "sheet converted without test cases".to_string(),
                    sheet: Some(sheet.title.clone()),
                });
            }
            debug!(
                "sheet ({}) parsing complete: {} cases",
                sheet.title,
                suite.case_count()
            );
            conversion.suites.push(suite);
        }

        Ok(conversion)
    }

    fn sheet_to_suite(
        &self,
        sheet: &Sheet,
        topics: &[Topic],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<TestSuite> {
        let context = SheetContext::resolve(sheet.topic.title(), &self.config);

        let sub_suites = topics
            .iter()
            .map(|topic| self.parse_testsuite(sheet, topic, &context, diagnostics))
            .collect::<Result<Vec<_>>>()?;

        Ok(TestSuite {
            name: context.suite_name,
            details: sheet.topic.note.clone().unwrap_or_default(),
            sub_suites,
            testcase_list: Vec::new(),
        })
    }

    fn parse_testsuite(
        &self,
        sheet: &Sheet,
        topic: &Topic,
        context: &SheetContext,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<TestSuite> {
        debug!("start to parse a testsuite: {}", topic.title());
        let mut testcase_list = Vec::new();

        for outcome in Cases::new(self, context, &topic.children) {
            match outcome {
                Ok(case) => testcase_list.push(case),
                Err(e) if e.is_topic_local() => {
                    warn!("skipping test case in suite '{}': {e}", topic.title());
                    diagnostics.push(Diagnostic {
                        severity: DiagnosticSeverity::Error,
                        message: e.to_string(),
                        sheet: Some(sheet.title.clone()),
                    });
                },
                Err(e) => return Err(e),
            }
        }

        Ok(TestSuite {
            name: topic.title().to_string(),
            details: topic.note.clone().unwrap_or_default(),
            sub_suites: Vec::new(),
            testcase_list,
        })
    }

    /// Build the case (or, for a parameterized template, every case) for the
    /// last topic of `chain`.
    pub(crate) fn build_cases(
        &self,
        chain: &[&Topic],
        sheet: &SheetContext,
    ) -> Result<Vec<TestCase>> {
        let Some(&topic) = chain.last() else {
            return Ok(Vec::new());
        };
        let own_markers = steps::markers_of(topic, TopicRole::TestCase)?;

        let steps = steps::parse_steps(&topic.children, &self.vocabulary)?;
        let result = steps::aggregate_result(self.vocabulary.result(own_markers), &steps);
        let importance = markers::priority(own_markers).unwrap_or(self.config.default_importance);
        let preconditions = fields::preconditions(chain, &self.config);
        let summary = fields::summary(chain, &self.config);
        let execution_type = fields::execution_type(chain, &self.config);

        let make_case = |case_title: &str| {
            let case = TestCase {
                name: fields::title(chain, case_title, sheet, &self.config),
                summary: summary.clone(),
                preconditions: preconditions.clone(),
                execution_type,
                importance,
                steps: steps.clone(),
                result,
            };
            debug!("found a testcase: {}", case.name);
            case
        };

        let cases = match params::parameter_spec(topic.comment.as_deref()) {
            Some(spec) => {
                match spec.combination_count() {
                    Some(count) => {
                        debug!("expanding '{}' into {count} combinations", topic.title());
                    },
                    None => warn!(
                        "'{}' has more parameter combinations than can be counted",
                        topic.title()
                    ),
                }
                spec.combinations()
                    .map(|binding| make_case(&params::render_title(topic.title(), &binding)))
                    .collect()
            },
            None => vec![make_case(topic.title())],
        };
        Ok(cases)
    }
}

/// Convert sheets with the given configuration.
///
/// # Errors
///
/// See [`Compiler::convert`].
pub fn xmind_to_suites(sheets: &[Sheet], config: &Config) -> Result<Conversion> {
    Compiler::new(config).convert(sheets)
}
