//! YAML loading for the race schedule and the roster.
//!
//! `races.yaml` is a sequence of [`Race`] entries. `roster.yaml` is a
//! sequence of age groups whose participants carry their results as a
//! compact summary string, parsed against the registry at load time.

use std::path::Path;

use race_circuit_core::{
    AgeGroup, AgeRange, Gender, Participant, Race, RaceRegistry, Roster, parse_results,
};
use serde::Deserialize;

use crate::error::CatalogError;

/// An age group as written in `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
struct GroupEntry {
    gender: Gender,
    age_range: AgeRange,
    #[serde(default)]
    participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ParticipantEntry {
    name: String,
    /// Result summary, e.g. "SE(1) MG15(2)". Missing means no results yet.
    #[serde(default)]
    results: String,
    #[serde(default)]
    renewed: bool,
}

/// Parse a race registry from YAML text. `origin` names the source in errors.
pub fn parse_registry(contents: &str, origin: &str) -> Result<RaceRegistry, CatalogError> {
    let races: Vec<Race> = serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
        path: origin.to_string(),
        source: e,
    })?;
    Ok(RaceRegistry::new(races)?)
}

/// Load a race registry from a YAML file.
pub fn load_registry(path: &Path) -> Result<RaceRegistry, CatalogError> {
    let contents = read_file(path)?;
    parse_registry(&contents, &path.display().to_string())
}

/// Parse a roster from YAML text, resolving every result summary against
/// `registry`.
///
/// Fails on the first participant whose summary does not parse; no partial
/// roster is returned.
pub fn parse_roster(
    contents: &str,
    origin: &str,
    registry: &RaceRegistry,
) -> Result<Roster, CatalogError> {
    let entries: Vec<GroupEntry> =
        serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
            path: origin.to_string(),
            source: e,
        })?;

    let groups = entries
        .into_iter()
        .map(|entry| build_group(entry, registry))
        .collect::<Result<Vec<_>, _>>()?;

    let roster = Roster::new(groups);
    log::debug!(
        "Loaded roster from {origin}: {} groups, {} participants",
        roster.groups().len(),
        roster.participant_count()
    );
    Ok(roster)
}

/// Load a roster from a YAML file.
pub fn load_roster(path: &Path, registry: &RaceRegistry) -> Result<Roster, CatalogError> {
    let contents = read_file(path)?;
    parse_roster(&contents, &path.display().to_string(), registry)
}

fn build_group(entry: GroupEntry, registry: &RaceRegistry) -> Result<AgeGroup, CatalogError> {
    let mut participants = Vec::with_capacity(entry.participants.len());
    for p in entry.participants {
        let results =
            parse_results(&p.results, registry).map_err(|e| CatalogError::Results {
                participant: p.name.clone(),
                source: e,
            })?;
        participants.push(Participant {
            name: p.name,
            results,
            renewed: p.renewed,
        });
    }

    Ok(AgeGroup {
        gender: entry.gender,
        age_range: entry.age_range,
        participants,
    })
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
