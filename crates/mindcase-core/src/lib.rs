//! # mindcase-core
//!
//! Core functionality for mindcase: compiling mind-map topic trees into test
//! suites, test cases and test steps.
//!
//! ## Architecture
//!
//! - **Topics**: the read-only input tree and its normalizer
//! - **Compiler**: recursive descent over each sheet, classifying topics as
//!   suites or cases and building every case from its ancestor chain
//! - **Markers**: priority and test-result interpretation of topic markers
//! - **Export**: flattening suites into Zentao CSV rows
//! - **Configuration**: separators, ignore characters, marker vocabulary and
//!   export columns
//! - **Error Handling**: one error type, with topic-local failures kept apart
//!   from document failures
//!
//! ## Quick Start
//!
//! ```rust
//! use mindcase_core::{Config, Sheet, Topic, xmind_to_suites};
//!
//! let sheet = Sheet::new(
//!     "Sheet 1",
//!     Topic::new("3.6.0>").with_children(vec![
//!         Topic::new("Settings").with_children(vec![
//!             Topic::new("Theme").with_children(vec![Topic::new("Dark mode")]),
//!         ]),
//!     ]),
//! );
//!
//! let conversion = xmind_to_suites(&[sheet], &Config::default())?;
//! let case = &conversion.suites[0].sub_suites[0].testcase_list[0];
//! assert_eq!(case.name, "Theme>Dark mode");
//! assert_eq!(case.importance, 2);
//! # Ok::<(), mindcase_core::Error>(())
//! ```
//!
//! ## Thread Safety
//!
//! Conversion is a pure transform: the per-sheet separator and the ancestor
//! chain live in values owned by one traversal, so separate documents can be
//! converted on separate threads with a shared [`Compiler`].

/// Tree-to-model compiler
pub mod compiler;
/// Configuration management
pub mod config;
/// Error types and result aliases
pub mod error;
/// Zentao CSV row exporter
pub mod export;
/// Priority and result markers
pub mod markers;
/// JSON sheet reader
pub mod reader;
/// Mind-map topic tree and normalizer
pub mod topic;
/// Test-asset model
pub mod types;

// Re-export commonly used types
pub use compiler::{Compiler, xmind_to_suites};
pub use config::{Config, ConvertConfig, ExportConfig, MarkerConfig};
pub use error::{Error, Result, TopicRole};
pub use export::{Column, ZentaoExporter, flatten_cases};
pub use markers::ResultVocabulary;
pub use topic::{Sheet, Topic, normalize_topics};
pub use types::*;
