use serde::{Deserialize, Serialize};

/// Execution result of a case or step, serialized as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TestResult {
    /// Not executed
    #[default]
    None,
    /// Passed
    Pass,
    /// Failed
    Failed,
    /// Blocked
    Blocked,
    /// Skipped
    Skipped,
}

impl TestResult {
    /// Numeric result code used by test-management tools.
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Pass => 1,
            Self::Failed => 2,
            Self::Blocked => 3,
            Self::Skipped => 4,
        }
    }
}

impl From<TestResult> for u8 {
    fn from(result: TestResult) -> Self {
        result.code()
    }
}

impl TryFrom<u8> for TestResult {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Pass),
            2 => Ok(Self::Failed),
            3 => Ok(Self::Blocked),
            4 => Ok(Self::Skipped),
            other => Err(format!("unknown test result code {other}")),
        }
    }
}

/// How a case is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    /// Run by hand
    #[default]
    Manual,
    /// Run by automation
    Automatic,
}

impl ExecutionType {
    /// Label used in exported rows.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
        }
    }
}

/// One numbered step of a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    /// 1-based position within the case
    pub step_number: usize,
    pub actions: String,
    /// Empty when the step has no expected-result child
    pub expected_results: String,
    pub result: TestResult,
}

/// A compiled test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Last two meaningful chain titles joined by the sheet separator
    pub name: String,
    pub summary: String,
    pub preconditions: String,
    pub execution_type: ExecutionType,
    /// 1 (highest) to 4
    pub importance: u8,
    pub steps: Vec<TestStep>,
    pub result: TestResult,
}

/// A suite: one per sheet at the top, one per root child below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    pub details: String,
    pub sub_suites: Vec<TestSuite>,
    pub testcase_list: Vec<TestCase>,
}

impl TestSuite {
    /// Total number of cases in this suite and all nested suites.
    pub fn case_count(&self) -> usize {
        self.testcase_list.len()
            + self
                .sub_suites
                .iter()
                .map(Self::case_count)
                .sum::<usize>()
    }
}

/// A problem found while converting, reported instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    /// Sheet the diagnostic was raised for
    pub sheet: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A case was left out
    Error,
    /// A sheet or topic was skipped
    Warn,
    Info,
}

/// Output of converting a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub suites: Vec<TestSuite>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Total number of cases across all sheets.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(TestSuite::case_count).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_as_code() {
        let json = serde_json::to_string(&TestResult::Blocked).unwrap();
        assert_eq!(json, "3");

        let parsed: TestResult = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, TestResult::Skipped);

        assert!(serde_json::from_str::<TestResult>("9").is_err());
    }

    #[test]
    fn test_execution_type_labels() {
        assert_eq!(ExecutionType::default(), ExecutionType::Manual);
        assert_eq!(ExecutionType::Automatic.as_str(), "automatic");
        assert_eq!(
            serde_json::to_string(&ExecutionType::Manual).unwrap(),
            "\"manual\""
        );
    }

    #[test]
    fn test_suite_case_count_includes_nested() {
        let case = TestCase {
            name: "Login".to_string(),
            summary: "无".to_string(),
            preconditions: "无".to_string(),
            execution_type: ExecutionType::Manual,
            importance: 2,
            steps: vec![],
            result: TestResult::None,
        };
        let suite = TestSuite {
            name: "Root".to_string(),
            sub_suites: vec![TestSuite {
                name: "Account".to_string(),
                testcase_list: vec![case.clone(), case],
                ..TestSuite::default()
            }],
            ..TestSuite::default()
        };

        assert_eq!(suite.case_count(), 2);
    }
}
