use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_catalog::Season;
use race_circuit_core::{parse_results, sum_points};

use crate::CliError;

use super::log_result;

pub(crate) fn run_parse(season: &Season, summary: &str) -> Result<(), CliError> {
    let results = parse_results(summary, &season.registry)?;

    if results.is_empty() {
        log::info!("No results in summary");
        return Ok(());
    }

    for result in &results {
        log_result(result);
    }
    log::info!(
        "  {:<48} {:>3} pts",
        "Total".if_supports_color(Stdout, |t| t.bold()),
        sum_points(&results),
    );
    Ok(())
}
