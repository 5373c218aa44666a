//! Error types and handling for mindcase-core operations.
//!
//! Conversion of a mind map is designed to degrade per topic rather than per
//! document, so errors are split into two groups:
//!
//! - **Topic-local errors**: a single topic is structurally corrupt (for example
//!   a test case without a markers field). The descent engine reports these for
//!   the offending case only and keeps converting the rest of the tree.
//! - **Document errors**: I/O, unreadable input, invalid configuration or an
//!   exporter misconfiguration. These abort the operation that raised them.
//!
//! ```rust
//! use mindcase_core::Error;
//!
//! let err = Error::MissingMarkers {
//!     topic: "Login succeeds".to_string(),
//!     role: mindcase_core::TopicRole::TestCase,
//! };
//! assert!(err.is_topic_local());
//! assert_eq!(err.category(), "structure");
//! ```

use std::fmt;
use thiserror::Error;

/// The part a topic plays when it is consulted for markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicRole {
    /// The topic was classified as a test case.
    TestCase,
    /// The topic is a test step without an expected-result child.
    Step,
    /// The topic is the single expected-result child of a step.
    ExpectedResult,
}

impl fmt::Display for TopicRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TestCase => "test case",
            Self::Step => "test step",
            Self::ExpectedResult => "expected result",
        };
        f.write_str(label)
    }
}

/// The main error type for mindcase-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed while reading input or writing exported rows.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document could not be understood.
    ///
    /// Raised by the sheet reader when the JSON does not have the expected
    /// sheet/topic shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A topic that must carry a markers field has none.
    ///
    /// This is the only structural failure of the input tree. It is confined
    /// to the test case it belongs to.
    #[error("Topic '{topic}' ({role}) has no markers field")]
    MissingMarkers {
        /// Title of the offending topic.
        topic: String,
        /// Role the topic was consulted in.
        role: TopicRole,
    },

    /// Export column header is not one of the known columns.
    #[error("Unknown export column: {0}")]
    UnknownColumn(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Whether the failure is confined to a single topic.
    ///
    /// The sheet driver records topic-local errors as diagnostics and moves on
    /// to the next topic; everything else aborts the conversion.
    #[must_use]
    pub const fn is_topic_local(&self) -> bool {
        matches!(self, Self::MissingMarkers { .. })
    }

    /// Get the error category as a string identifier for logging.
    ///
    /// - `"io"` - File system and I/O operations
    /// - `"parse"` - Input document shape
    /// - `"config"` - Configuration and settings
    /// - `"serialization"` - JSON/TOML/CSV conversion
    /// - `"structure"` - Corrupt topic in the mind-map tree
    /// - `"export"` - Exporter configuration
    /// - `"other"` - Uncategorized errors
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::MissingMarkers { .. } => "structure",
            Self::UnknownColumn(_) => "export",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
