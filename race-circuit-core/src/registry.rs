//! The race registry: the immutable lookup table result summaries are
//! validated against.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::types::Race;

/// Ordered, validated set of races keyed by abbreviation.
#[derive(Debug, Clone, Default)]
pub struct RaceRegistry {
    races: Vec<Race>,
    /// Abbreviation -> index into `races`
    index: HashMap<String, usize>,
}

impl RaceRegistry {
    /// Build a registry, preserving declaration order.
    ///
    /// Fails if an abbreviation is not made of uppercase ASCII letters (no
    /// result token could reference it) or appears twice.
    pub fn new(races: Vec<Race>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(races.len());

        for (i, race) in races.iter().enumerate() {
            if !is_valid_abbreviation(&race.abbreviation) {
                return Err(RegistryError::InvalidAbbreviation {
                    race: race.name.clone(),
                    abbreviation: race.abbreviation.clone(),
                });
            }
            if let Some(&prev) = index.get(&race.abbreviation) {
                let first: &Race = &races[prev];
                return Err(RegistryError::DuplicateAbbreviation {
                    abbreviation: race.abbreviation.clone(),
                    first: first.name.clone(),
                    second: race.name.clone(),
                });
            }
            index.insert(race.abbreviation.clone(), i);
        }

        log::debug!("Race registry built with {} races", races.len());
        Ok(Self { races, index })
    }

    /// Exact abbreviation lookup.
    pub fn find(&self, abbreviation: &str) -> Option<&Race> {
        self.index.get(abbreviation).map(|&i| &self.races[i])
    }

    /// All races in declaration order.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Race> {
        self.races.iter()
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

impl<'a> IntoIterator for &'a RaceRegistry {
    type Item = &'a Race;
    type IntoIter = std::slice::Iter<'a, Race>;

    fn into_iter(self) -> Self::IntoIter {
        self.races.iter()
    }
}

fn is_valid_abbreviation(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())
}
