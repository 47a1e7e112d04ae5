//! Configuration record parsing and validation

pub mod cli_toml;

pub use cli_toml::{CliConfig, ColorChoice};
