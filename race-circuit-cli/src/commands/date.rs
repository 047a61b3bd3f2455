use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use race_circuit_core::format_race_date;

use crate::CliError;

pub(crate) fn run_date(date: &str) -> Result<(), CliError> {
    let formatted = format_race_date(date)?;
    log::info!(
        "{}{}",
        formatted.display.if_supports_color(Stdout, |t| t.bold()),
        if formatted.is_likely {
            format!(" {}", "(likely)".if_supports_color(Stdout, |t| t.yellow()))
        } else {
            String::new()
        },
    );
    Ok(())
}
