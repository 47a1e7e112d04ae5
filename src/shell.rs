#![forbid(unsafe_code)]

//! Synchronous shell command helpers
//!
//! Commands are handed to the platform shell as a single line, so quoting,
//! pipes and globbing behave exactly as typed. Be careful with untrusted
//! input: nothing here escapes arguments.
//!
//! Every call blocks until the child exits. The query helpers
//! ([`get_output`], [`get_returncode`], [`get_standard_output`]) never fail on
//! a non-zero exit, while [`run_command`] and [`run_multiple_commands`] turn
//! it into a [`ShellError`].

use crate::error::ShellError;
use crate::types::CommandLine;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Joins argument tokens into a single command line
///
/// A complete command string is returned unchanged.
pub fn parse_arguments(arguments: impl Into<CommandLine>) -> String {
    let command: CommandLine = arguments.into();
    command.into()
}

/// Captured result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The command line that was run
    pub command: String,
    /// Everything the command wrote to standard output
    pub stdout: String,
    /// Everything the command wrote to standard error
    pub stderr: String,
    /// Exit code of the command
    pub returncode: i32,
}

impl CommandOutput {
    /// Returns true when the command exited with code 0
    pub fn success(&self) -> bool {
        self.returncode == 0
    }
}

/// How standard output is split by [`ShellCommand::standard_output`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSplit {
    /// Whitespace separated words
    #[default]
    Words,
    /// Non-empty lines
    Lines,
}

/// A shell command ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    command: CommandLine,
    directory: Option<PathBuf>,
}

impl ShellCommand {
    /// Creates a command from a command string or a list of tokens
    pub fn new(arguments: impl Into<CommandLine>) -> Self {
        ShellCommand {
            command: arguments.into(),
            directory: None,
        }
    }

    /// Runs the command in `directory` instead of the current directory
    pub fn current_dir(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    /// Returns the command line
    pub fn command_line(&self) -> &str {
        self.command.as_str()
    }

    /// Runs the command capturing stdout, stderr and the exit code
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Spawn` if the shell cannot be started. A non-zero
    /// exit is not an error.
    pub fn output(&self) -> Result<CommandOutput, ShellError> {
        log::debug!("Capturing output of '{}'", self.command);
        let output = self
            .process()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.spawn_error(source))?;

        let returncode = exit_code(output.status);
        log::debug!("'{}' exited with {}", self.command, returncode);

        Ok(CommandOutput {
            command: self.command.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            returncode,
        })
    }

    /// Runs the command and returns only its exit code
    pub fn returncode(&self) -> Result<i32, ShellError> {
        Ok(self.output()?.returncode)
    }

    /// Runs the command and splits its standard output
    ///
    /// Returns `None` when the command printed nothing (or only whitespace).
    pub fn standard_output(&self, split: OutputSplit) -> Result<Option<Vec<String>>, ShellError> {
        let stdout = self.output()?.stdout;
        let parts: Vec<String> = match split {
            OutputSplit::Words => stdout.split_whitespace().map(str::to_string).collect(),
            OutputSplit::Lines => stdout
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        };

        if parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parts))
        }
    }

    /// Runs the command streaming its output to this process' streams
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Failed` with the command's own exit code if it
    /// exits with a non-zero status, or `ShellError::Spawn` if the shell
    /// cannot be started.
    pub fn run(&self) -> Result<(), ShellError> {
        log::debug!("Running '{}'", self.command);
        let status = self
            .process()
            .status()
            .map_err(|source| self.spawn_error(source))?;

        match exit_code(status) {
            0 => Ok(()),
            code => {
                log::debug!("'{}' failed with {}", self.command, code);
                Err(ShellError::Failed {
                    command: self.command.to_string(),
                    code,
                })
            }
        }
    }

    fn process(&self) -> Command {
        let mut process = shell();
        process.arg(self.command.as_str());
        if let Some(directory) = &self.directory {
            process.current_dir(directory);
        }
        process
    }

    fn spawn_error(&self, source: std::io::Error) -> ShellError {
        ShellError::Spawn {
            command: self.command.to_string(),
            source,
        }
    }
}

#[cfg(unix)]
fn shell() -> Command {
    let mut command = Command::new("sh");
    command.arg("-c");
    command
}

#[cfg(not(unix))]
fn shell() -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C");
    command
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Captures stdout, stderr and the exit code of a command
pub fn get_output(arguments: impl Into<CommandLine>) -> Result<CommandOutput, ShellError> {
    ShellCommand::new(arguments).output()
}

/// Returns the exit code of a command
pub fn get_returncode(arguments: impl Into<CommandLine>) -> Result<i32, ShellError> {
    ShellCommand::new(arguments).returncode()
}

/// Returns the standard output of a command split into words or lines
pub fn get_standard_output(
    arguments: impl Into<CommandLine>,
    split: OutputSplit,
) -> Result<Option<Vec<String>>, ShellError> {
    ShellCommand::new(arguments).standard_output(split)
}

/// Runs a command, failing if it exits with a non-zero status
pub fn run_command(arguments: impl Into<CommandLine>) -> Result<(), ShellError> {
    ShellCommand::new(arguments).run()
}

/// Runs every command, then reports all failures at once
///
/// Commands run in order and a failure does not stop the remaining ones.
///
/// # Errors
///
/// Returns `ShellError::Multiple` holding one error per failed command. Its
/// exit code is the number of failures.
pub fn run_multiple_commands<I>(commands: I) -> Result<(), ShellError>
where
    I: IntoIterator<Item = ShellCommand>,
{
    let mut total = 0;
    let mut failures = Vec::new();

    for command in commands {
        total += 1;
        if let Err(e) = command.run() {
            failures.push(e);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        log::debug!("{} of {} commands failed", failures.len(), total);
        Err(ShellError::Multiple { failures, total })
    }
}
