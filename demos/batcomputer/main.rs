//! Batcomputer: a demo program built on cly

mod commands;
mod database;

use clap::{Arg, ArgAction};
use cly::cli::{ConfiguredParser, report};
use cly::config::{CliConfig, ColorChoice};
use cly::error::ClyError;
use log::LevelFilter;

const CONFIG: &str = include_str!("batcomputer.toml");

fn build_cli() -> Result<ConfiguredParser, ClyError> {
    let config = CliConfig::parse(CONFIG)?;
    let mut cli = ConfiguredParser::new(config)?;

    cli.add_argument(
        Arg::new("oracle")
            .short('o')
            .long("oracle")
            .action(ArgAction::SetTrue)
            .help("Use Oracle's help to get more data."),
    );

    cli.create_command(commands::identify_handler(), Some("id"), None)?
        .arg(
            Arg::new("aliases")
                .value_name("aliases")
                .num_args(1..)
                .required(true),
        );

    cli.create_command(commands::list_aliases_handler(), Some("ls"), None)?;

    cli.create_command(commands::execute_handler(), Some("exec"), None)?
        .arg(
            Arg::new("commands")
                .value_name("commands")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .value_name("DIR"),
        );

    Ok(cli)
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match build_cli() {
        Ok(cli) => cli.run_and_exit(),
        Err(e) => report::exit(Err(e), ColorChoice::Auto),
    }
}
