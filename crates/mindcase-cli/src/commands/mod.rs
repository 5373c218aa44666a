//! Command implementations for the mindcase CLI

mod convert;
mod suites;

pub use convert::execute as convert;
pub use suites::execute as print_suites;
