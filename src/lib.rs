#![forbid(unsafe_code)]

//! Cly: building blocks for small command line programs
//!
//! Cly wraps clap with a preconfigured parser that turns documented handler
//! functions into commands, and ships helpers for running shell commands and
//! printing colored terminal output.

pub mod cli;
pub mod colors;
pub mod config;
pub mod docstring;
pub mod error;
pub mod shell;
pub mod types;

// Re-export error types for convenient access
pub use error::{ClyError, ConfigError, ShellError};

// Re-export core types for convenient access
pub use cli::{ArgRecord, ConfiguredParser, Handler};
pub use config::CliConfig;
pub use types::{CommandLine, ToolchainVersion};
