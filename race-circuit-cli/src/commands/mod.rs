pub(crate) mod config;
pub(crate) mod date;
pub(crate) mod parse;
pub(crate) mod participant;
pub(crate) mod races;
pub(crate) mod standings;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_core::RaceResult;

/// One indented result line: "Mountain Goat 15K    2 pts".
pub(crate) fn log_result(result: &RaceResult) {
    let race = match &result.distance {
        Some(d) => format!("{} {}", result.race, d),
        None => result.race.clone(),
    };
    log::info!(
        "  {:<48} {:>3} pts",
        race,
        result.points.if_supports_color(Stdout, |t| t.bold()),
    );
}
