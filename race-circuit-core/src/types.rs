//! Data model for the point series: races, results, participants, age groups.

use serde::Deserialize;

use crate::date::{FormattedDate, format_race_date};
use crate::error::DateError;

// ── Race ────────────────────────────────────────────────────────────────────

/// A race on the circuit schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Race {
    pub name: String,
    /// `YYYY-MM-DD`, optionally a range (`2025-03-15/16`) and/or a trailing
    /// `*` when the date is not yet confirmed.
    pub date: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Distance labels in registry order (e.g. "5K", "10K").
    #[serde(default)]
    pub distances: Vec<String>,
    /// Short uppercase code used in result summaries (e.g. "MG").
    pub abbreviation: String,
    #[serde(default)]
    pub org: Option<String>,
}

impl Race {
    /// Resolve a distance prefix to a registered distance label.
    ///
    /// Returns the first label, in registry order, that starts with `prefix`.
    /// Ambiguous prefixes resolve to the first match: with "1K" declared
    /// before "10K", "1" resolves to "1K".
    pub fn resolve_distance(&self, prefix: &str) -> Option<&str> {
        self.distances
            .iter()
            .find(|d| d.starts_with(prefix))
            .map(String::as_str)
    }

    /// Whether this race is split into distance categories.
    pub fn has_distances(&self) -> bool {
        !self.distances.is_empty()
    }

    /// Display label for the race date.
    pub fn formatted_date(&self) -> Result<FormattedDate, DateError> {
        format_race_date(&self.date)
    }
}

// ── Results ─────────────────────────────────────────────────────────────────

/// One scored race for a participant. Only produced by
/// [`parse_results`](crate::results::parse_results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceResult {
    /// Full race name, resolved from the abbreviation.
    pub race: String,
    /// Matched distance label, `None` for races without distance categories.
    pub distance: Option<String>,
    pub points: u32,
}

// ── Participants ────────────────────────────────────────────────────────────

/// A club member registered in the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    /// Results in the order they appear in the source summary.
    pub results: Vec<RaceResult>,
    /// Membership renewed for the current season.
    pub renewed: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, results: Vec<RaceResult>) -> Self {
        Self {
            name: name.into(),
            results,
            renewed: false,
        }
    }

    pub fn total_points(&self) -> u32 {
        crate::results::total_points(self)
    }

    pub fn race_count(&self) -> usize {
        self.results.len()
    }
}

// ── Age groups ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown gender string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderParseError(pub String);

impl std::fmt::Display for GenderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gender: '{}' (expected female or male)", self.0)
    }
}

impl std::error::Error for GenderParseError {}

impl std::str::FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" | "women" | "w" => Ok(Self::Female),
            "male" | "m" | "men" => Ok(Self::Male),
            _ => Err(GenderParseError(s.to_string())),
        }
    }
}

/// Inclusive age bracket. `max: None` is open-ended (e.g. 70+).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    #[serde(default)]
    pub max: Option<u32>,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && self.max.is_none_or(|max| age <= max)
    }

    /// Short label: "30-39", or "70+" for open-ended brackets.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}

/// Participants of one gender within an age bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroup {
    pub gender: Gender,
    pub age_range: AgeRange,
    pub participants: Vec<Participant>,
}

impl AgeGroup {
    /// "Female 30-39"
    pub fn label(&self) -> String {
        format!("{} {}", self.gender, self.age_range.label())
    }
}

// ── Roster ──────────────────────────────────────────────────────────────────

/// The full season roster, grouped by gender and age bracket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    groups: Vec<AgeGroup>,
}

impl Roster {
    pub fn new(groups: Vec<AgeGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[AgeGroup] {
        &self.groups
    }

    pub fn by_gender(&self, gender: Gender) -> impl Iterator<Item = &AgeGroup> {
        self.groups.iter().filter(move |g| g.gender == gender)
    }

    /// Look up a participant by name (case-insensitive), returning their group too.
    pub fn find_participant(&self, name: &str) -> Option<(&AgeGroup, &Participant)> {
        self.groups.iter().find_map(|group| {
            group
                .participants
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .map(|p| (group, p))
        })
    }

    pub fn participant_count(&self) -> usize {
        self.groups.iter().map(|g| g.participants.len()).sum()
    }
}
