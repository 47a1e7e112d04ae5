//! Batcomputer command handlers

use crate::database;
use cly::cli::{ArgRecord, Handler};
use cly::error::ClyError;
use cly::shell::{self, ShellCommand};
use std::io::Write;

const IDENTIFY_DOC: &str = "
    Identify the person behind each alias.

    For each alias, get person behind it, if it is stored in Batcomputer. Else,
    informs each one not yet identified.

    Parameters
    ----------
    aliases : Vec<String>
        One or more alias to be identified, separated by spaces.
    oracle : bool, optional
        Use Oracle's help to get more data, by default false
";

const LIST_ALIASES_DOC: &str = "
    List all aliases in Batcomputer.

    List each one of the aliases stored in Batcomputer. List one alias per
    line.

    Args:
        oracle (bool): Use Oracle's help to get more data. Defaults to false.
";

const EXECUTE_DOC: &str = "
    Run shell commands from the Batcomputer.

    Every command runs even when an earlier one fails. A single failing command
    exits with its own status, several failures exit with their count.

    :param commands: Shell commands to run, each one quoted
        as a single argument
    :param directory: Directory to run the commands in
";

pub fn identify(record: &ArgRecord, out: &mut dyn Write) -> Result<(), ClyError> {
    let oracle = record.flag("oracle");

    for alias in record.values("aliases") {
        let data = if oracle {
            database::oracle_data(alias)
        } else {
            database::alias_data(alias)
        };
        match data {
            Some(data) => writeln!(out, "{}", data)?,
            None => writeln!(
                out,
                "{} not identified by Batcomputer yet",
                database::title(alias)
            )?,
        }
    }
    Ok(())
}

pub fn list_aliases(record: &ArgRecord, out: &mut dyn Write) -> Result<(), ClyError> {
    let oracle = record.flag("oracle");

    for alias in database::aliases() {
        let data = if oracle {
            database::oracle_data(alias)
        } else {
            database::alias_data(alias)
        };
        if let Some(data) = data {
            writeln!(out, "{}", data)?;
        }
    }
    Ok(())
}

pub fn execute(record: &ArgRecord, out: &mut dyn Write) -> Result<(), ClyError> {
    let directory = record.value("directory");
    let mut commands: Vec<ShellCommand> = record
        .values("commands")
        .iter()
        .map(|command| {
            let command = ShellCommand::new(command.as_str());
            match directory {
                Some(directory) => command.current_dir(directory),
                None => command,
            }
        })
        .collect();

    // Child processes share our stdout, so flush what the handler wrote.
    out.flush()?;

    if commands.len() == 1
        && let Some(command) = commands.pop()
    {
        command.run()?;
    } else {
        shell::run_multiple_commands(commands)?;
    }
    Ok(())
}

pub fn identify_handler() -> Handler {
    Handler::new("identify", identify)
        .with_docstring(IDENTIFY_DOC)
        .with_parameters(["aliases", "oracle"])
}

pub fn list_aliases_handler() -> Handler {
    Handler::new("list_aliases", list_aliases)
        .with_docstring(LIST_ALIASES_DOC)
        .with_parameters(["oracle"])
}

pub fn execute_handler() -> Handler {
    Handler::new("execute", execute)
        .with_docstring(EXECUTE_DOC)
        .with_parameters(["commands", "directory"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use cly::docstring::{DocstringStyle, param_help_from_docstring};

    type Callback = fn(&ArgRecord, &mut dyn Write) -> Result<(), ClyError>;

    fn run(handler: Callback, record: &ArgRecord) -> String {
        let mut out: Vec<u8> = Vec::new();
        handler(record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_docstrings_use_every_style() {
        assert_eq!(DocstringStyle::detect(IDENTIFY_DOC), Some(DocstringStyle::Numpy));
        assert_eq!(DocstringStyle::detect(LIST_ALIASES_DOC), Some(DocstringStyle::Google));
        assert_eq!(DocstringStyle::detect(EXECUTE_DOC), Some(DocstringStyle::Sphinx));
    }

    #[test]
    fn test_parameter_help() {
        assert_eq!(
            param_help_from_docstring("oracle", Some(LIST_ALIASES_DOC)),
            "Use Oracle's help to get more data."
        );
        assert_eq!(
            param_help_from_docstring("commands", Some(EXECUTE_DOC)),
            "Shell commands to run, each one quoted as a single argument."
        );
    }

    #[test]
    fn test_identify() {
        let mut record = ArgRecord::new();
        record.insert("aliases", ["batman", "penguin"]);
        let output = run(identify, &record);
        assert_eq!(
            output,
            "Bruce Wayne A.K.A. Batman \u{1f987}\nPenguin not identified by Batcomputer yet\n"
        );
    }

    #[test]
    fn test_list_aliases_with_oracle() {
        let mut record = ArgRecord::new();
        record.insert("oracle", ["true"]);
        let output = run(list_aliases, &record);
        assert_eq!(output.matches("Portrayed by").count(), 3);
    }
}
