//! race-circuit CLI
//!
//! Command-line interface for the running-club race schedule and
//! point-series standings.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::Level;

use race_circuit_catalog::Season;
use race_circuit_catalog::settings::load_configured_season;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data_dir = cli.data_dir;
    let season = || -> Result<Season, CliError> { Ok(load_configured_season(data_dir.clone())?) };

    match cli.command {
        Commands::Races => commands::races::run_races(&season()?),
        Commands::Standings { gender, top, all } => {
            commands::standings::run_standings(&season()?, gender, top, all)
        }
        Commands::Participant { name } => {
            commands::participant::run_participant(&season()?, &name)
        }
        Commands::Parse { summary } => commands::parse::run_parse(&season()?, &summary),
        Commands::Date { date } => commands::date::run_date(&date),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(data_dir.clone()),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDataDir { dir } => commands::config::run_config_set_data_dir(&dir),
            ConfigAction::ClearDataDir => commands::config::run_config_clear_data_dir(),
        },
    }
}

/// Route `log` output to stdout.
///
/// Normal runs print bare messages so `log::info!` doubles as user output;
/// `--verbose` adds timestamps and levels. `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
