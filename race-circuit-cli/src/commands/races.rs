use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_catalog::Season;

use crate::CliError;

pub(crate) fn run_races(season: &Season) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Race Schedule".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for race in &season.registry {
        let date = race.formatted_date()?;
        let likely = if date.is_likely {
            format!(" {}", "(likely)".if_supports_color(Stdout, |t| t.yellow()))
        } else {
            String::new()
        };

        log::info!(
            "  {:<14} {} [{}]{}",
            date.display.if_supports_color(Stdout, |t| t.cyan()),
            race.name.if_supports_color(Stdout, |t| t.bold()),
            race.abbreviation,
            likely,
        );
        if race.has_distances() {
            log::info!("    Distances: {}", race.distances.join(", "));
        }
        if let Some(org) = &race.org {
            log::info!("    Hosted by: {}", org);
        }
        match &race.url {
            Some(url) => log::info!("    {}", url.if_supports_color(Stdout, |t| t.dimmed())),
            None => log::info!(
                "    {}",
                "Registration not yet available".if_supports_color(Stdout, |t| t.dimmed())
            ),
        }
    }

    Ok(())
}
