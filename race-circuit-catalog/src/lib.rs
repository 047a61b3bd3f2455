//! Season data for the race circuit: the race schedule and the roster, loaded
//! from YAML and validated against the result-summary parser.
//!
//! The 2025 season is embedded in the crate; a data directory with the same
//! layout can replace it at runtime (see [`settings`]).

pub mod error;
pub mod season;
pub mod settings;
pub mod yaml;

pub use error::CatalogError;
pub use season::{Season, builtin_season, load_season};
pub use yaml::{load_registry, load_roster, parse_registry, parse_roster};
