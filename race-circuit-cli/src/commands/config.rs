use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_catalog::season::{RACES_FILE, ROSTER_FILE};
use race_circuit_catalog::settings;

use crate::CliError;

/// Show the settings file and where season data will be loaded from.
pub(crate) fn run_config_show(cli_data_dir: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "race-circuit Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let from_cli = cli_data_dir.is_some();
    match settings::resolve_data_dir(cli_data_dir) {
        Some(dir) => {
            let source = if from_cli { "--data-dir" } else { "settings" };
            log::info!(
                "  Data directory: {} ({})",
                dir.display().if_supports_color(Stdout, |t| t.cyan()),
                source,
            );
            for file in [RACES_FILE, ROSTER_FILE] {
                if !dir.join(file).exists() {
                    log::warn!("{} not found in {}", file, dir.display());
                }
            }
        }
        None => log::info!("  Data directory: built-in season"),
    }

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }

    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_data_dir(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let dir = dir.canonicalize()?;
    settings::save_data_dir(Some(dir.as_path()))?;
    log::info!(
        "Data directory set to {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_config_clear_data_dir() -> Result<(), CliError> {
    settings::save_data_dir(None)?;
    log::info!("Data directory cleared; using built-in season");
    Ok(())
}
