//! Command handlers and their registration

use crate::cli::help::{self, COMMAND_HELP};
use crate::cli::record::ArgRecord;
use crate::config::CliConfig;
use crate::error::ClyError;
use clap::Arg;
use std::fmt;
use std::io::Write;

type Callback = Box<dyn Fn(&ArgRecord, &mut dyn Write) -> Result<(), ClyError>>;

/// A function run when its command is selected
///
/// The handler declares the parameters it reads. Before it is called, the
/// parsed record is narrowed to those ids, and their docstring descriptions
/// become argument help where none is given.
pub struct Handler {
    name: String,
    docstring: Option<String>,
    parameters: Vec<String>,
    callback: Callback,
}

impl Handler {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&ArgRecord, &mut dyn Write) -> Result<(), ClyError> + 'static,
    {
        Handler {
            name: name.into(),
            docstring: None,
            parameters: Vec::new(),
            callback: Box::new(callback),
        }
    }

    /// Attaches documentation in NumPy, Google or Sphinx style
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Declares the argument ids the handler reads
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn docstring(&self) -> Option<&str> {
        self.docstring.as_deref()
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Calls the handler with the fields it declared
    pub fn call(&self, record: &ArgRecord, out: &mut dyn Write) -> Result<(), ClyError> {
        let record = record.narrow(&self.parameters);
        log::debug!(
            "Calling '{}' with {} of its {} parameters",
            self.name,
            record.len(),
            self.parameters.len()
        );
        (self.callback)(&record, out)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("docstring", &self.docstring)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// A command registered on a [`ConfiguredParser`](crate::cli::ConfiguredParser)
#[derive(Debug)]
pub struct RegisteredCommand {
    name: String,
    help: String,
    handler: Handler,
    arguments: Vec<Arg>,
}

impl RegisteredCommand {
    pub(crate) fn new(name: String, help: String, handler: Handler) -> Self {
        RegisteredCommand {
            name,
            help,
            handler,
            arguments: Vec::new(),
        }
    }

    /// Adds an argument to the command
    pub fn arg(&mut self, arg: Arg) -> &mut Self {
        self.arguments.push(arg);
        self
    }

    /// Name the command is invoked by
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full help text; its first line is the short help
    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Builds the clap subcommand
    pub(crate) fn build(&self, config: &CliConfig) -> clap::Command {
        let mut command = clap::Command::new(self.name.clone())
            .help_template(help::help_template(config.invocation.as_deref()))
            .disable_help_flag(true)
            .arg(help::help_arg(COMMAND_HELP, true))
            .args(self.arguments.iter().cloned());

        let help = self.help.trim();
        if let Some(summary) = help.lines().next() {
            command = command.about(summary.to_string()).long_about(help::reflow(help));
        }
        if !config.epilog.is_empty() {
            command = command.after_help(help::reflow(&config.epilog));
        }

        help::backfill_param_help(command, &self.handler)
    }
}
