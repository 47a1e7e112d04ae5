//! Help page layout shared by the program and its commands

use crate::cli::command::Handler;
use crate::docstring::param_help_from_docstring;
use clap::{Arg, ArgAction, Command};

pub const PROGRAM_HELP: &str = "Show program's help message.";
pub const COMMAND_HELP: &str = "Show command's help message.";
pub const VERSION_HELP: &str = "Show program's version.";

pub const COMMANDS_HEADING: &str = "Commands";
pub const COMMAND_VALUE_NAME: &str = "command";

pub(crate) const HELP_ID: &str = "help";
pub(crate) const VERSION_ID: &str = "version";

/// Help template with `Usage:` on its own line and the invocation indented
/// below it
///
/// `invocation` is printed verbatim in front of the program name.
pub fn help_template(invocation: Option<&str>) -> String {
    let prefix = match invocation {
        Some(text) if !text.is_empty() => format!("{} ", text),
        _ => String::new(),
    };
    format!(
        "{{about-with-newline}}\n{{usage-heading}}\n  {}{{usage}}\n\n{{all-args}}{{after-help}}",
        prefix
    )
}

/// Joins the lines of each paragraph so clap can wrap them to the terminal
///
/// Paragraphs are separated by blank lines and stay separated.
pub fn reflow(text: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.extend(line.split_whitespace());
        }
    }
    paragraphs.join("\n\n")
}

/// `-h/--help` switch
///
/// Commands use the long form so their full description is always shown.
pub fn help_arg(help: &'static str, long: bool) -> Arg {
    Arg::new(HELP_ID)
        .short('h')
        .long("help")
        .help(help)
        .action(if long {
            ArgAction::HelpLong
        } else {
            ArgAction::Help
        })
}

/// `-v/--version` switch
pub fn version_arg() -> Arg {
    Arg::new(VERSION_ID)
        .short('v')
        .long("version")
        .help(VERSION_HELP)
        .action(ArgAction::Version)
}

/// Fills in missing argument help from the handler's docstring
///
/// Only arguments named after a declared parameter are touched, and
/// explicit help is never replaced.
pub fn backfill_param_help(command: Command, handler: &Handler) -> Command {
    let parameters = handler.parameters();
    let docstring = handler.docstring();

    command.mut_args(|arg| {
        let id = arg.get_id().as_str();
        let switch = matches!(
            arg.get_action(),
            ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
        );
        if switch || arg.get_help().is_some() || !parameters.iter().any(|p| p == id) {
            return arg;
        }

        let text = param_help_from_docstring(id, docstring);
        if text.is_empty() {
            arg
        } else {
            log::trace!("Using docstring help for '{}'", id);
            arg.help(text)
        }
    })
}
