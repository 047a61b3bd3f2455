//! A loaded season: the race registry and the roster built against it.

use std::path::Path;

use race_circuit_core::{RaceRegistry, Roster};

use crate::error::CatalogError;
use crate::yaml::{load_registry, load_roster, parse_registry, parse_roster};

/// File name of the race schedule inside a data directory.
pub const RACES_FILE: &str = "races.yaml";
/// File name of the roster inside a data directory.
pub const ROSTER_FILE: &str = "roster.yaml";

const BUILTIN_RACES: &str = include_str!("../data/races.yaml");
const BUILTIN_ROSTER: &str = include_str!("../data/roster.yaml");

/// Immutable season data.
#[derive(Debug, Clone)]
pub struct Season {
    pub registry: RaceRegistry,
    pub roster: Roster,
}

/// Load the season embedded in the binary.
pub fn builtin_season() -> Result<Season, CatalogError> {
    let registry = parse_registry(BUILTIN_RACES, "<builtin>/races.yaml")?;
    let roster = parse_roster(BUILTIN_ROSTER, "<builtin>/roster.yaml", &registry)?;
    Ok(Season { registry, roster })
}

/// Load a season from a data directory.
///
/// Expected structure:
/// ```text
/// data_dir/
///   races.yaml
///   roster.yaml
/// ```
/// A directory without `roster.yaml` yields an empty roster, so a schedule
/// can be published before anyone has scored.
pub fn load_season(data_dir: &Path) -> Result<Season, CatalogError> {
    if !data_dir.is_dir() {
        return Err(CatalogError::DirNotFound(data_dir.display().to_string()));
    }

    let registry = load_registry(&data_dir.join(RACES_FILE))?;
    let roster_path = data_dir.join(ROSTER_FILE);
    let roster = if roster_path.exists() {
        load_roster(&roster_path, &registry)?
    } else {
        log::debug!("No {} in {}", ROSTER_FILE, data_dir.display());
        Roster::default()
    };

    Ok(Season { registry, roster })
}
