#![forbid(unsafe_code)]

//! Core domain types for cly
//!
//! This module defines the small value types shared by the parser and the
//! shell helpers.

use std::fmt;
use std::str::FromStr;

/// Separator used when joining argument tokens into one command line
pub const SPACE: &str = " ";

/// A shell command line
///
/// Built either from a complete command string, which is kept unchanged, or
/// from a list of tokens, which are joined with a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandLine(String);

impl CommandLine {
    /// Creates a command line from a complete command string
    pub fn new(command: impl Into<String>) -> Self {
        CommandLine(command.into())
    }

    /// Creates a command line by joining tokens with a single space
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let parts: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        CommandLine(parts.join(SPACE))
    }

    /// Returns the command line as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommandLine {
    fn from(command: &str) -> Self {
        CommandLine::new(command)
    }
}

impl From<String> for CommandLine {
    fn from(command: String) -> Self {
        CommandLine::new(command)
    }
}

impl From<&String> for CommandLine {
    fn from(command: &String) -> Self {
        CommandLine::new(command.as_str())
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(tokens: Vec<String>) -> Self {
        CommandLine::from_tokens(tokens)
    }
}

impl From<Vec<&str>> for CommandLine {
    fn from(tokens: Vec<&str>) -> Self {
        CommandLine::from_tokens(tokens)
    }
}

impl From<&[&str]> for CommandLine {
    fn from(tokens: &[&str]) -> Self {
        CommandLine::from_tokens(tokens)
    }
}

impl From<&[String]> for CommandLine {
    fn from(tokens: &[String]) -> Self {
        CommandLine::from_tokens(tokens)
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(tokens: [&str; N]) -> Self {
        CommandLine::from_tokens(tokens)
    }
}

impl From<CommandLine> for String {
    fn from(command: CommandLine) -> Self {
        command.0
    }
}

/// A toolchain version reduced to its major and minor components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolchainVersion {
    pub major: u32,
    pub minor: u32,
}

impl ToolchainVersion {
    /// Creates a new version
    pub const fn new(major: u32, minor: u32) -> Self {
        ToolchainVersion { major, minor }
    }

    /// Finds the first `major.minor[.patch]` token in a version banner
    ///
    /// Accepts plain versions (`1.85.0`) as well as full `rustc --version`
    /// output (`rustc 1.85.0 (4d91de4e4 2025-02-17)`).
    pub fn parse(banner: &str) -> Option<Self> {
        banner.split_whitespace().find_map(|token| token.parse().ok())
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ToolchainVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let major = parts.next().and_then(|p| p.parse::<u32>().ok());
        // Pre-release suffixes such as `0-nightly` only affect the patch part.
        let minor = parts.next().and_then(|p| p.parse::<u32>().ok());
        match (major, minor) {
            (Some(major), Some(minor)) => Ok(ToolchainVersion { major, minor }),
            _ => Err(format!("Invalid version: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_from_tokens() {
        assert_eq!(
            CommandLine::from(vec!["the", "dark", "knight"]).as_str(),
            "the dark knight"
        );
        assert_eq!(
            CommandLine::from(["-r", "command", "-v", "1"]).as_str(),
            "-r command -v 1"
        );
    }

    #[test]
    fn test_command_line_string_is_unchanged() {
        let command = CommandLine::from(r#"grep -Inr "batman" ."#);
        assert_eq!(command.as_str(), r#"grep -Inr "batman" ."#);
        assert_eq!(command.to_string(), r#"grep -Inr "batman" ."#);
    }

    #[test]
    fn test_command_line_empty_tokens() {
        let tokens: Vec<String> = Vec::new();
        assert_eq!(CommandLine::from(tokens).as_str(), "");
    }

    #[test]
    fn test_toolchain_version_parse() {
        assert_eq!(
            ToolchainVersion::parse("rustc 1.85.0 (4d91de4e4 2025-02-17)"),
            Some(ToolchainVersion::new(1, 85))
        );
        assert_eq!(
            ToolchainVersion::parse("rustc 1.90.0-nightly (abc 2025-06-01)"),
            Some(ToolchainVersion::new(1, 90))
        );
        assert_eq!(
            ToolchainVersion::parse("1.7"),
            Some(ToolchainVersion::new(1, 7))
        );
        assert_eq!(ToolchainVersion::parse("rustc unknown"), None);
        assert_eq!(ToolchainVersion::parse(""), None);
    }

    #[test]
    fn test_toolchain_version_ordering() {
        assert!(ToolchainVersion::new(1, 70) < ToolchainVersion::new(1, 85));
        assert!(ToolchainVersion::new(2, 0) > ToolchainVersion::new(1, 99));
        assert_eq!(ToolchainVersion::new(1, 85).to_string(), "1.85");
    }
}
