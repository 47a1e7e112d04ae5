//! Parsing and validation for CLI configuration records
//!
//! A `CliConfig` is usually built in code with [`CliConfig::new`], but it can
//! also be kept next to the program in a TOML file:
//!
//! ```toml
//! name = "Batcomputer"
//! description = "Run Batcomputer analysis on selected areas."
//! epilog = "Wayne Enterprises"
//! version = "1.0.0"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration record for a [`ConfiguredParser`](crate::cli::ConfiguredParser)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Program name, shown by `--version`
    pub name: String,

    /// Text shown between usage and the argument sections
    #[serde(default)]
    pub description: String,

    /// Text shown at the end of every help page
    #[serde(default)]
    pub epilog: String,

    /// Program version, shown by `--version`
    pub version: String,

    /// Show help when the program is called without arguments
    #[serde(default = "default_add_help")]
    pub add_help: bool,

    /// Fixed text printed before the program name in usage lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation: Option<String>,

    /// Color output setting for error reporting
    #[serde(default)]
    pub color: ColorChoice,
}

fn default_add_help() -> bool {
    true
}

impl CliConfig {
    /// Creates a configuration with default presentation options
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        epilog: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        CliConfig {
            name: name.into(),
            description: description.into(),
            epilog: epilog.into(),
            version: version.into(),
            add_help: default_add_help(),
            invocation: None,
            color: ColorChoice::default(),
        }
    }

    /// Sets whether help is shown when no arguments are given
    pub fn with_add_help(mut self, add_help: bool) -> Self {
        self.add_help = add_help;
        self
    }

    /// Sets the text printed before the program name in usage lines
    pub fn with_invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }

    /// Sets the color choice used for error reporting
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Program name must not be empty".to_string(),
            ));
        }

        if self.version.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Version of '{}' must not be empty",
                self.name
            )));
        }

        if let Some(invocation) = &self.invocation
            && invocation.contains('\n')
        {
            return Err(ConfigError::Validation(
                "Invocation prefix must fit on a single line".to_string(),
            ));
        }

        Ok(())
    }
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when the output stream is a terminal
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
name = "Batcomputer"
description = "Run Batcomputer analysis on selected areas."
epilog = "Wayne Enterprises"
version = "1.0.0"
add_help = false
invocation = "[cargo run --bin batcomputer --]"
color = "never"
"#;

    #[test]
    fn test_valid_config_parsing() {
        let config = CliConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.name, "Batcomputer");
        assert_eq!(
            config.description,
            "Run Batcomputer analysis on selected areas."
        );
        assert_eq!(config.epilog, "Wayne Enterprises");
        assert_eq!(config.version, "1.0.0");
        assert!(!config.add_help);
        assert_eq!(
            config.invocation.as_deref(),
            Some("[cargo run --bin batcomputer --]")
        );
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_minimal_config() {
        let minimal = r#"
name = "Test"
version = "test"
"#;

        let config = CliConfig::parse(minimal).unwrap();
        assert_eq!(config.name, "Test");
        assert_eq!(config.description, "");
        assert_eq!(config.epilog, "");
        assert!(config.add_help);
        assert_eq!(config.invocation, None);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_new_matches_parsed_defaults() {
        let built = CliConfig::new("Test", "", "", "test");
        let parsed = CliConfig::parse("name = \"Test\"\nversion = \"test\"\n").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let result = CliConfig::parse("version = \"1.0.0\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = CliConfig::parse("name = \"  \"\nversion = \"1.0.0\"\n");
        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("name")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_version_is_rejected() {
        let result = CliConfig::parse("name = \"Test\"\nversion = \"\"\n");
        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("Test")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_multiline_invocation_is_rejected() {
        let config = CliConfig::new("Test", "", "", "1").with_invocation("a\nb");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let result = CliConfig::parse("name = \"Test\"\nversion = \"1\"\ncolor = \"sometimes\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_builder_methods() {
        let config = CliConfig::new("Test", "desc", "epi", "2.0")
            .with_add_help(false)
            .with_invocation("[sudo]")
            .with_color(ColorChoice::Always);
        assert!(!config.add_help);
        assert_eq!(config.invocation.as_deref(), Some("[sudo]"));
        assert_eq!(config.color, ColorChoice::Always);
    }
}
