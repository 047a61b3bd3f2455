use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_catalog::Season;
use race_circuit_core::{AgeGroup, Gender, standings};

use crate::CliError;

pub(crate) fn run_standings(
    season: &Season,
    gender: Option<Gender>,
    top: Option<usize>,
    all: bool,
) -> Result<(), CliError> {
    let groups: Vec<&AgeGroup> = match gender {
        Some(g) => season.roster.by_gender(g).collect(),
        None => season.roster.groups().iter().collect(),
    };

    if groups.is_empty() {
        log::warn!("No age groups in roster");
        return Ok(());
    }

    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        log::info!(
            "{} ({} participants)",
            group.label().if_supports_color(Stdout, |t| t.bold()),
            group.participants.len(),
        );

        let table = standings(group);
        let shown = table
            .iter()
            .filter(|s| all || s.points > 0)
            .take(top.unwrap_or(usize::MAX));

        let mut any = false;
        for standing in shown {
            any = true;
            log::info!(
                "  {:>3}. {:<32} {:>3} pts  ({} {})",
                standing.place,
                standing.name,
                standing.points.if_supports_color(Stdout, |t| t.bold()),
                standing.races,
                if standing.races == 1 { "race" } else { "races" },
            );
        }
        if !any {
            log::info!(
                "  {}",
                "No points scored yet".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}
