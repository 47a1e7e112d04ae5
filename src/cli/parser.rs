//! Preconfigured argument parser with command dispatch

use crate::cli::command::{Handler, RegisteredCommand};
use crate::cli::help::{self, COMMAND_VALUE_NAME, COMMANDS_HEADING, PROGRAM_HELP};
use crate::cli::record::ArgRecord;
use crate::cli::{report, version};
use crate::colors;
use crate::config::CliConfig;
use crate::docstring::help_from_docstring;
use crate::error::ClyError;
use clap::Arg;
use std::ffi::OsString;
use std::io::{self, Write};

/// Argument parser built from a [`CliConfig`]
///
/// Comes with `-h/--help` and `-v/--version`, a help layout with `Usage:` on
/// its own line, and one subcommand per registered [`Handler`].
///
/// ```no_run
/// use cly::cli::{ArgRecord, ConfiguredParser, Handler};
/// use cly::config::CliConfig;
/// use std::io::Write;
///
/// let config = CliConfig::new("Batcomputer", "Gotham tools.", "", "1.0.0");
/// let mut cli = ConfiguredParser::new(config).unwrap();
/// let hello = Handler::new("hello", |_: &ArgRecord, out: &mut dyn Write| {
///     writeln!(out, "I'm Batman")?;
///     Ok(())
/// })
/// .with_docstring("Say hello.");
/// cli.create_command(hello, None, None).unwrap();
/// cli.run_and_exit();
/// ```
#[derive(Debug)]
pub struct ConfiguredParser {
    config: CliConfig,
    arguments: Vec<Arg>,
    commands: Vec<RegisteredCommand>,
}

impl ConfiguredParser {
    /// Creates a parser
    ///
    /// # Errors
    ///
    /// Returns `ClyError::UnsupportedVersion` if the compiling toolchain is
    /// older than [`version::MINIMUM_VERSION`].
    pub fn new(config: CliConfig) -> Result<Self, ClyError> {
        version::check_minimum_version()?;
        Ok(ConfiguredParser {
            config,
            arguments: Vec::new(),
            commands: Vec::new(),
        })
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Adds a program-level argument
    pub fn add_argument(&mut self, arg: Arg) -> &mut Self {
        self.arguments.push(arg);
        self
    }

    /// Registers a handler as a command
    ///
    /// # Arguments
    ///
    /// * `handler` - Function run when the command is selected
    /// * `alias` - Command name, defaults to the handler name
    /// * `help_message` - Help text, defaults to the handler's docstring summary
    ///
    /// # Errors
    ///
    /// Returns `ClyError::DuplicateCommand` if the name is already taken.
    pub fn create_command(
        &mut self,
        handler: Handler,
        alias: Option<&str>,
        help_message: Option<&str>,
    ) -> Result<&mut RegisteredCommand, ClyError> {
        let name = alias.unwrap_or(handler.name()).to_string();
        if self.commands.iter().any(|c| c.name() == name) {
            return Err(ClyError::DuplicateCommand(name));
        }

        let help = match help_message {
            Some(message) => message.to_string(),
            None => help_from_docstring(handler.docstring()),
        };

        log::debug!("Registering command '{}'", name);
        self.commands.push(RegisteredCommand::new(name, help, handler));
        let index = self.commands.len() - 1;
        Ok(&mut self.commands[index])
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    /// Builds the clap command for the program and every registered command
    ///
    /// Help text is wrapped to [`colors::terminal_width`].
    pub fn command(&self) -> clap::Command {
        let config = &self.config;
        let width = colors::terminal_width();
        let mut command = clap::Command::new(config.name.clone())
            .version(format!("version {}", config.version))
            .help_template(help::help_template(config.invocation.as_deref()))
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .term_width(width)
            .arg(help::help_arg(PROGRAM_HELP, false))
            .arg(help::version_arg())
            .args(self.arguments.iter().cloned());

        if !config.description.is_empty() {
            command = command.about(help::reflow(&config.description));
        }
        if !config.epilog.is_empty() {
            command = command.after_help(help::reflow(&config.epilog));
        }

        if !self.commands.is_empty() {
            command = command
                .subcommand_required(true)
                .subcommand_value_name(COMMAND_VALUE_NAME)
                .subcommand_help_heading(COMMANDS_HEADING)
                .subcommands(
                    self.commands
                        .iter()
                        .map(|c| c.build(config).term_width(width)),
                );
        }

        command
    }

    /// Parses arguments into a record without running any handler
    ///
    /// `args` starts with the program name. When `add_help` is set and
    /// nothing follows it, the help page is requested instead.
    ///
    /// # Errors
    ///
    /// Returns `ClyError::Usage` for invalid arguments and for help or
    /// version display.
    pub fn parse_from<I, T>(&self, args: I) -> Result<ArgRecord, ClyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if self.config.add_help && args.len() <= 1 {
            if args.is_empty() {
                args.push(OsString::from(&self.config.name));
            }
            args.push(OsString::from("--help"));
        }

        let command = self.command();
        let matches = command.clone().try_get_matches_from(args)?;
        let mut record = ArgRecord::from_matches(&command, &matches);

        if let Some((name, sub_matches)) = matches.subcommand()
            && let Some(subcommand) = command.find_subcommand(name)
        {
            let mut sub_record = ArgRecord::from_matches(subcommand, sub_matches);
            sub_record.set_command(name);
            record.merge(sub_record);
        }

        Ok(record)
    }

    /// Parses arguments and runs the selected command
    ///
    /// Handler output goes to `out`.
    pub fn run_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<(), ClyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let record = self.parse_from(args)?;
        if let Some(name) = record.command()
            && let Some(registered) = self.commands.iter().find(|c| c.name() == name)
        {
            registered.handler().call(&record, out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Runs with the process arguments, writing to standard output
    pub fn run(&self) -> Result<(), ClyError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_from(std::env::args_os(), &mut out)
    }

    /// Runs with the process arguments and exits the process
    ///
    /// Errors are reported on standard error and turned into exit codes.
    pub fn run_and_exit(&self) -> ! {
        report::exit(self.run(), self.config.color)
    }
}
