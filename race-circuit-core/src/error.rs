use thiserror::Error;

/// Errors raised while parsing a participant's result summary.
///
/// These are data-entry faults: a single bad token aborts construction of
/// the dataset that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultParseError {
    #[error("Invalid race result format: \"{0}\"")]
    MalformedToken(String),

    #[error("Race with abbreviation {0} not found")]
    UnknownRace(String),

    #[error("Distance {prefix} not found for race {race}")]
    UnknownDistance { race: String, prefix: String },
}

/// Errors raised while building a race registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate race abbreviation: {abbreviation} ({first} and {second})")]
    DuplicateAbbreviation {
        abbreviation: String,
        first: String,
        second: String,
    },

    #[error("Invalid abbreviation \"{abbreviation}\" for race {race}: expected uppercase letters")]
    InvalidAbbreviation { race: String, abbreviation: String },
}

/// Errors raised while formatting a race date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The string is not `YYYY-MM-DD` or `YYYY-MM-DD/<suffix>`.
    #[error("Malformed date: \"{0}\"")]
    Malformed(String),

    /// The components are numeric but name a day that does not exist.
    #[error("Date does not exist: \"{0}\"")]
    InvalidDate(String),
}

impl ResultParseError {
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken(token.into())
    }

    pub fn unknown_race(abbreviation: impl Into<String>) -> Self {
        Self::UnknownRace(abbreviation.into())
    }

    pub fn unknown_distance(race: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::UnknownDistance {
            race: race.into(),
            prefix: prefix.into(),
        }
    }
}
