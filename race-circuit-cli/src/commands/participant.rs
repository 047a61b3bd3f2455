use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_catalog::Season;

use crate::CliError;

use super::log_result;

pub(crate) fn run_participant(season: &Season, name: &str) -> Result<(), CliError> {
    let (group, participant) = season
        .roster
        .find_participant(name)
        .ok_or_else(|| CliError::unknown_participant(name))?;

    log::info!(
        "{} [{}]{}",
        participant.name.if_supports_color(Stdout, |t| t.bold()),
        group.label().if_supports_color(Stdout, |t| t.cyan()),
        if participant.renewed {
            format!(" {}", "(renewed)".if_supports_color(Stdout, |t| t.green()))
        } else {
            String::new()
        },
    );

    if participant.results.is_empty() {
        log::info!("  No results yet");
        return Ok(());
    }

    for result in &participant.results {
        log_result(result);
    }
    log::info!(
        "  {:<48} {:>3} pts",
        "Total".if_supports_color(Stdout, |t| t.bold()),
        participant.total_points(),
    );
    Ok(())
}
