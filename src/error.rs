//! Error types for cly
//!
//! Library code never terminates the process. Every failure is returned as one
//! of these types and the outermost entry point decides how to exit, using
//! [`ClyError::exit_code`].

use crate::types::ToolchainVersion;

/// Exit code for successful runs, help and version display
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for library-level failures (toolchain, colors, configuration)
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for usage errors, matching clap
pub const EXIT_USAGE: i32 = 2;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Shell command errors
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The shell itself could not be started
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited with a non-zero status
    #[error("Command '{command}' returned non-zero exit status {code}.")]
    Failed { command: String, code: i32 },

    /// Several commands ran and at least one of them failed
    #[error("{} of {total} commands failed", .failures.len())]
    Multiple { failures: Vec<ShellError>, total: usize },
}

impl ShellError {
    /// Exit code a program should terminate with for this failure
    ///
    /// A failed command propagates its own code, a batch of commands exits
    /// with the number of failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::Spawn { .. } => EXIT_FAILURE,
            ShellError::Failed { code, .. } => *code,
            ShellError::Multiple { failures, .. } => {
                i32::try_from(failures.len()).unwrap_or(i32::MAX)
            }
        }
    }
}

/// Top-level error type for cly
#[derive(Debug, thiserror::Error)]
pub enum ClyError {
    /// The toolchain that built the program is older than required
    #[error(
        "Rust version {found} does not meet minimum requirement of {required}."
    )]
    UnsupportedVersion {
        found: ToolchainVersion,
        required: ToolchainVersion,
    },

    /// A color name outside the color table was requested
    #[error("{name} is not a valid color. Available colors: {available}.")]
    UnknownColor { name: String, available: String },

    /// Two commands were registered under the same name
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    /// A parsed argument could not be converted to the type a handler expects
    #[error("Invalid value '{value}' for '{name}': {message}")]
    InvalidValue {
        name: String,
        value: String,
        message: String,
    },

    /// Argument parsing stopped: usage error, help or version display
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Shell command error
    #[error(transparent)]
    Shell(#[from] ShellError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error while writing handler output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClyError {
    /// Exit code a program should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClyError::Usage(err) => err.exit_code(),
            ClyError::Shell(err) => err.exit_code(),
            ClyError::InvalidValue { .. } => EXIT_USAGE,
            ClyError::UnsupportedVersion { .. }
            | ClyError::UnknownColor { .. }
            | ClyError::DuplicateCommand(_)
            | ClyError::Config(_)
            | ClyError::Io(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_command_message() {
        let err = ShellError::Failed {
            command: "batman --version".to_string(),
            code: 127,
        };
        assert_eq!(
            err.to_string(),
            "Command 'batman --version' returned non-zero exit status 127."
        );
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn test_multiple_failures_exit_with_count() {
        let failure = |code| ShellError::Failed {
            command: "false".to_string(),
            code,
        };
        let err = ShellError::Multiple {
            failures: vec![failure(1), failure(3)],
            total: 5,
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "2 of 5 commands failed");
        assert_eq!(ClyError::from(err).exit_code(), 2);
    }

    #[test]
    fn test_library_errors_exit_with_one() {
        let err = ClyError::UnknownColor {
            name: "blue".to_string(),
            available: "green, red or yellow".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_FAILURE);

        let err = ClyError::Config(ConfigError::Validation("empty name".to_string()));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_unsupported_version_message() {
        let err = ClyError::UnsupportedVersion {
            found: ToolchainVersion::new(1, 70),
            required: ToolchainVersion::new(1, 85),
        };
        assert_eq!(
            err.to_string(),
            "Rust version 1.70 does not meet minimum requirement of 1.85."
        );
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_invalid_value_is_usage_error() {
        let err = ClyError::InvalidValue {
            name: "count".to_string(),
            value: "ten".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }
}
