//! Core data model and logic for the running-club point series.
//!
//! Result summaries (`"SE(2) CC10(2) MG15(1)"`) are parsed against a
//! [`RaceRegistry`] into [`RaceResult`]s, and race dates are rendered into
//! short labels by [`format_race_date`]. Everything here is pure: data is
//! built once at load time and never mutated.

pub mod date;
pub mod error;
pub mod registry;
pub mod results;
pub mod types;

pub use date::{FormattedDate, LIKELY_MARKER, format_race_date, splice_end_date};
pub use error::{DateError, RegistryError, ResultParseError};
pub use registry::RaceRegistry;
pub use results::{Standing, parse_results, standings, sum_points, total_points};
pub use types::{
    AgeGroup, AgeRange, Gender, GenderParseError, Participant, Race, RaceResult, Roster,
};
