//! Helpers for testing programs built on [`ConfiguredParser`]

use crate::cli::parser::ConfiguredParser;
use crate::cli::report::error_lines;
use crate::error::{ClyError, EXIT_SUCCESS};

/// Program name used in place of `argv[0]`
pub const TEST_PROGRAM: &str = "file_name";

/// Runs a parser in-process and captures what it prints
///
/// Returns the exit code the process would have ended with, and the handler
/// output followed by any rendered help, usage or error message.
pub fn run_cli(cli: &ConfiguredParser, args: &[&str]) -> (i32, String) {
    let mut out: Vec<u8> = Vec::new();
    let argv = std::iter::once(TEST_PROGRAM).chain(args.iter().copied());
    let result = cli.run_from(argv, &mut out);
    let mut output = String::from_utf8_lossy(&out).into_owned();

    match result {
        Ok(()) => (EXIT_SUCCESS, output),
        Err(err) => {
            match &err {
                ClyError::Usage(clap_err) => output.push_str(&clap_err.render().to_string()),
                other => {
                    for line in error_lines(other) {
                        output.push_str(&line);
                        output.push('\n');
                    }
                }
            }
            (err.exit_code(), output)
        }
    }
}
