//! Error reporting and process exit

use crate::config::ColorChoice;
use crate::error::{ClyError, EXIT_SUCCESS, ShellError};
use std::io::{self, IsTerminal};
use std::process;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

const ERROR_PREFIX: &str = "ERROR: ";

/// Lines describing an error, one per failure
///
/// Clap errors are rendered by clap itself and produce no lines here.
pub fn error_lines(err: &ClyError) -> Vec<String> {
    match err {
        ClyError::Usage(_) => Vec::new(),
        ClyError::Shell(ShellError::Multiple { failures, .. }) => failures
            .iter()
            .map(|failure| format!("{}{}", ERROR_PREFIX, failure))
            .collect(),
        other => vec![format!("{}{}", ERROR_PREFIX, other)],
    }
}

fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if io::stderr().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Writes error lines in bold red
pub fn write_error(out: &mut dyn WriteColor, err: &ClyError) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true).set_intense(true);

    for line in error_lines(err) {
        out.set_color(&spec)?;
        write!(out, "{}", line)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints an error
///
/// Help and version pages go to standard output through clap, everything
/// else to standard error.
pub fn report(err: &ClyError, color: ColorChoice) {
    if let ClyError::Usage(clap_err) = err {
        if let Err(e) = clap_err.print() {
            log::warn!("Failed to print usage message: {}", e);
        }
        return;
    }

    let mut stderr = StandardStream::stderr(color_choice(color));
    if let Err(e) = write_error(&mut stderr, err) {
        log::warn!("Failed to report error: {}", e);
    }
}

/// Terminates the process with the exit code of `result`
pub fn exit(result: Result<(), ClyError>, color: ColorChoice) -> ! {
    match result {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(err) => {
            log::debug!("Exiting after error: {:?}", err);
            report(&err, color);
            process::exit(err.exit_code())
        }
    }
}
