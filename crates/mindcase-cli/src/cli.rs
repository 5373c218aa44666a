//! # CLI Structure and Argument Parsing
//!
//! ```bash
//! # Write Zentao CSV next to the input (release.csv)
//! mindcase convert release.json
//!
//! # Choose the output path and the product shown in module paths
//! mindcase convert release.json --output out/cases.csv --product Mobile
//!
//! # Inspect the converted suites
//! mindcase suites release.json --pretty
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `mindcase` command
#[derive(Parser, Clone, Debug)]
#[command(name = "mindcase")]
#[command(version)]
#[command(about = "mindcase - Compile mind-map test designs into test cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default lookup
    #[arg(long, global = true, env = "MINDCASE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Convert a mind-map JSON export into a Zentao CSV file
    Convert {
        /// Mind-map JSON export (list of sheets)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// CSV file to write [default: INPUT with a .csv extension]
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Product name used in module paths instead of each sheet's root title
        #[arg(long, value_name = "NAME")]
        product: Option<String>,
    },

    /// Print the converted test suites as JSON
    Suites {
        /// Mind-map JSON export (list of sheets)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}
