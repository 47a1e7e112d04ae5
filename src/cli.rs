//! Argument parsing and command dispatch

pub mod command;
pub mod help;
pub mod parser;
pub mod record;
pub mod report;
pub mod testing;
pub mod version;

// Re-export types for convenient access
pub use command::{Handler, RegisteredCommand};
pub use parser::ConfiguredParser;
pub use record::ArgRecord;
pub use version::{MINIMUM_VERSION, check_minimum_version};
