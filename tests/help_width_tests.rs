//! Help wrapping driven by the `COLUMNS` environment variable

use cly::cli::testing::run_cli;
use cly::cli::{ArgRecord, ConfiguredParser, Handler};
use cly::config::CliConfig;
use serial_test::serial;
use std::io::Write;

const DESCRIPTION: &str = "Run Batcomputer analysis on selected areas of Gotham, cross \
     checking every alias against the case files Oracle keeps and the reports Commissioner \
     Gordon sends.\n\nResults are printed one per line.";

fn parser() -> ConfiguredParser {
    let config = CliConfig::new("Batcomputer", DESCRIPTION, "Wayne Enterprises", "1.0.0");
    let mut cli = ConfiguredParser::new(config).unwrap();
    let scan = Handler::new("scan", |_: &ArgRecord, out: &mut dyn Write| {
        writeln!(out, "done")?;
        Ok(())
    })
    .with_docstring(format!("{}\n\nArgs:\n    area: Area to scan.\n", DESCRIPTION));
    cli.create_command(scan, None, None).unwrap();
    cli
}

fn widest_line(text: &str) -> usize {
    text.lines().map(|line| line.chars().count()).max().unwrap_or(0)
}

#[test]
#[serial]
fn test_help_fits_columns() {
    // SAFETY: this binary has no other test reading the environment concurrently
    unsafe { std::env::set_var("COLUMNS", "80") };
    let cli = parser();
    let (program_code, program_help) = run_cli(&cli, &["--help"]);
    let (command_code, command_help) = run_cli(&cli, &["scan", "--help"]);
    unsafe { std::env::remove_var("COLUMNS") };

    assert_eq!(program_code, 0);
    assert!(widest_line(&program_help) <= 80, "{}", program_help);
    assert!(program_help.contains("\n\nResults are printed one per line."));

    assert_eq!(command_code, 0);
    assert!(widest_line(&command_help) <= 80, "{}", command_help);
    assert!(command_help.contains("\n\nResults are printed one per line."));
}
