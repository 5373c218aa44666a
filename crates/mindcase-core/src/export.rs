//! Zentao CSV export.
//!
//! Rows are built from a closed set of [`Column`]s. The column list comes from
//! [`ExportConfig::columns`] as header names, so an unknown header is caught
//! when the exporter is created rather than when the first row is written.

use crate::config::ExportConfig;
use crate::types::{TestCase, TestStep, TestSuite};
use crate::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// One column of a Zentao import sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Case ID, left empty so Zentao assigns one
    Id,
    /// Case title
    Title,
    /// Module path `/<product>/<suite>/`
    Module,
    /// Tag
    Tag,
    /// Preconditions
    Preconditions,
    /// Summary, exported as the case note
    Summary,
    /// Numbered step actions
    Steps,
    /// Numbered expected results
    ExpectedResults,
    /// Edit mode
    EditMode,
    /// Priority `P0`-`P3`
    Priority,
    /// Owner
    Owner,
    /// Case status
    Status,
    /// Execution type
    ExecutionType,
}

impl Column {
    /// Every column in default output order.
    pub const ALL: [Self; 13] = [
        Self::Id,
        Self::Title,
        Self::Module,
        Self::Tag,
        Self::Preconditions,
        Self::Summary,
        Self::Steps,
        Self::ExpectedResults,
        Self::EditMode,
        Self::Priority,
        Self::Owner,
        Self::Status,
        Self::ExecutionType,
    ];

    /// Header text Zentao expects for this column.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "用例名称",
            Self::Module => "所属模块",
            Self::Tag => "标签",
            Self::Preconditions => "前置条件",
            Self::Summary => "备注",
            Self::Steps => "步骤描述",
            Self::ExpectedResults => "预期结果",
            Self::EditMode => "编辑模式",
            Self::Priority => "用例等级",
            Self::Owner => "责任人",
            Self::Status => "用例状态",
            Self::ExecutionType => "excution_type",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.header() == s.trim())
            .ok_or_else(|| Error::UnknownColumn(s.to_string()))
    }
}

/// Every case of every sheet as `(product, suite, case)`, in document order.
///
/// `product` is the sheet's root suite name and `suite` the name of the suite
/// the case was found in.
pub fn flatten_cases(suites: &[TestSuite]) -> impl Iterator<Item = (&str, &str, &TestCase)> {
    suites.iter().flat_map(|product| {
        product.sub_suites.iter().flat_map(move |suite| {
            suite
                .testcase_list
                .iter()
                .map(move |case| (product.name.as_str(), suite.name.as_str(), case))
        })
    })
}

/// Builds Zentao import rows from converted suites.
#[derive(Debug, Clone)]
pub struct ZentaoExporter {
    columns: Vec<Column>,
    owner: String,
    status: String,
    edit_mode: String,
    product: Option<String>,
}

impl ZentaoExporter {
    /// Create an exporter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] for a header that names no column.
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let columns = config
            .columns
            .iter()
            .map(|header| header.parse())
            .collect::<Result<Vec<Column>>>()?;

        Ok(Self {
            columns,
            owner: config.owner.clone(),
            status: config.status.clone(),
            edit_mode: config.edit_mode.clone(),
            product: None,
        })
    }

    /// Use `product` in module paths instead of each sheet's root suite name.
    #[must_use]
    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.product = product;
        self
    }

    /// Columns in output order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header row.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header()).collect()
    }

    /// One row per case, header excluded.
    pub fn rows(&self, suites: &[TestSuite]) -> Vec<Vec<String>> {
        flatten_cases(suites)
            .map(|(product, suite, case)| {
                let product = self.product.as_deref().unwrap_or(product);
                self.row(product, suite, case)
            })
            .collect()
    }

    fn row(&self, product: &str, suite: &str, case: &TestCase) -> Vec<String> {
        let (steps, expected) = step_columns(&case.steps);
        self.columns
            .iter()
            .map(|column| match column {
                Column::Id | Column::Tag => String::new(),
                Column::Title => case.name.clone(),
                Column::Module => format!("/{product}/{suite}/"),
                Column::Preconditions => case.preconditions.clone(),
                Column::Summary => case.summary.clone(),
                Column::Steps => steps.clone(),
                Column::ExpectedResults => expected.clone(),
                Column::EditMode => self.edit_mode.clone(),
                Column::Priority => priority_label(case.importance).to_string(),
                Column::Owner => self.owner.clone(),
                Column::Status => self.status.clone(),
                Column::ExecutionType => case.execution_type.as_str().to_string(),
            })
            .collect()
    }

    /// Write the header and all rows as CSV, returning the number of cases.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: io::Write>(&self, writer: W, suites: &[TestSuite]) -> Result<usize> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(self.header())?;

        let rows = self.rows(suites);
        for row in &rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(rows.len())
    }

    /// Write the CSV to a file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_csv(&self, path: &Path, suites: &[TestSuite]) -> Result<usize> {
        let file = File::create(path)?;
        let written = self.write(file, suites)?;
        tracing::debug!("wrote {written} cases to {}", path.display());
        Ok(written)
    }
}

impl Default for ZentaoExporter {
    fn default() -> Self {
        let config = ExportConfig::default();
        Self {
            columns: Column::ALL.to_vec(),
            owner: config.owner,
            status: config.status,
            edit_mode: config.edit_mode,
            product: None,
        }
    }
}

fn step_columns(steps: &[TestStep]) -> (String, String) {
    let actions = steps
        .iter()
        .map(|step| numbered(step.step_number, &step.actions))
        .collect::<Vec<_>>()
        .join("\n");
    let expected = steps
        .iter()
        .filter(|step| !step.expected_results.is_empty())
        .map(|step| numbered(step.step_number, &step.expected_results))
        .collect::<Vec<_>>()
        .join("\n");
    (actions, expected)
}

fn numbered(number: usize, text: &str) -> String {
    format!("{number}. {}", text.replace('\n', "").trim())
}

const fn priority_label(importance: u8) -> &'static str {
    match importance {
        1 => "P0",
        2 => "P1",
        4 => "P3",
        _ => "P2",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ExecutionType, TestResult};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn step(number: usize, actions: &str, expected: &str) -> TestStep {
        TestStep {
            step_number: number,
            actions: actions.to_string(),
            expected_results: expected.to_string(),
            result: TestResult::None,
        }
    }

    fn case(name: &str, importance: u8, steps: Vec<TestStep>) -> TestCase {
        TestCase {
            name: name.to_string(),
            summary: "无".to_string(),
            preconditions: "1. logged in".to_string(),
            execution_type: ExecutionType::Automatic,
            importance,
            steps,
            result: TestResult::None,
        }
    }

    fn suites() -> Vec<TestSuite> {
        vec![TestSuite {
            name: "3.6.0".to_string(),
            sub_suites: vec![
                TestSuite {
                    name: "Settings".to_string(),
                    testcase_list: vec![case(
                        "Theme>Dark mode",
                        1,
                        vec![
                            step(1, "Open\nsettings", ""),
                            step(2, "Toggle theme ", "Theme is dark"),
                        ],
                    )],
                    ..TestSuite::default()
                },
                TestSuite {
                    name: "About".to_string(),
                    testcase_list: vec![case("Version shown", 7, vec![])],
                    ..TestSuite::default()
                },
            ],
            ..TestSuite::default()
        }]
    }

    #[test]
    fn test_column_headers_parse_back() {
        for column in Column::ALL {
            assert_eq!(column.header().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        // Given: A config naming a column that does not exist
        let config = ExportConfig {
            columns: vec!["ID".to_string(), "Reviewer".to_string()],
            ..ExportConfig::default()
        };

        // When: Creating the exporter
        let err = ZentaoExporter::new(&config).unwrap_err();

        // Then: The unknown header is reported
        assert!(matches!(err, Error::UnknownColumn(ref name) if name == "Reviewer"));
        assert_eq!(err.category(), "export");
    }

    #[test]
    fn test_flatten_cases_in_document_order() {
        let suites = suites();

        let flat: Vec<(&str, &str, &str)> = flatten_cases(&suites)
            .map(|(product, suite, case)| (product, suite, case.name.as_str()))
            .collect();

        assert_eq!(
            flat,
            vec![
                ("3.6.0", "Settings", "Theme>Dark mode"),
                ("3.6.0", "About", "Version shown"),
            ]
        );
    }

    #[test]
    fn test_row_values() {
        let exporter = ZentaoExporter::default();

        let rows = exporter.rows(&suites());

        assert_eq!(
            rows[0],
            vec![
                "",
                "Theme>Dark mode",
                "/3.6.0/Settings/",
                "",
                "1. logged in",
                "无",
                "1. Opensettings\n2. Toggle theme",
                "2. Theme is dark",
                "STEP",
                "P0",
                "july",
                "Prepare",
                "automatic",
            ]
        );
        assert_eq!(rows[1][9], "P2");
        assert_eq!(rows[1][6], "");
    }

    #[test]
    fn test_product_override_and_column_subset() {
        let config = ExportConfig {
            columns: vec!["所属模块".to_string(), "用例名称".to_string()],
            ..ExportConfig::default()
        };
        let exporter = ZentaoExporter::new(&config)
            .unwrap()
            .with_product(Some("Mobile".to_string()));

        let rows = exporter.rows(&suites());

        assert_eq!(exporter.header(), vec!["所属模块", "用例名称"]);
        assert_eq!(rows[0], vec!["/Mobile/Settings/", "Theme>Dark mode"]);
    }

    #[test]
    fn test_write_csv_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cases.csv");

        let written = ZentaoExporter::default().write_csv(&path, &suites())?;

        assert_eq!(written, 2);
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        assert_eq!(headers.len(), 13);
        assert_eq!(&headers[1], "用例名称");
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][6], "1. Opensettings\n2. Toggle theme");
        Ok(())
    }
}
