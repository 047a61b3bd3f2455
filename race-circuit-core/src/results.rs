//! Parser for compact result summaries, plus points aggregation.
//!
//! A summary lists the races a participant scored in, separated by
//! whitespace:
//! ```text
//! SE(2) CC10(2) MG15(1)
//! ```
//! Each token is a race abbreviation, an optional distance prefix, and the
//! points earned in parentheses.

use crate::error::ResultParseError;
use crate::registry::RaceRegistry;
use crate::types::{AgeGroup, Participant, RaceResult};

/// Parse a result summary against the race registry.
///
/// Whitespace-only input yields no results. The first invalid token aborts
/// the whole parse.
///
/// # Examples
///
/// ```
/// use race_circuit_core::{Race, RaceRegistry, parse_results};
///
/// let registry = RaceRegistry::new(vec![Race {
///     name: "Mountain Goat".into(),
///     date: "2025-03-15".into(),
///     url: None,
///     distances: vec!["5K".into(), "10K".into(), "15K".into()],
///     abbreviation: "MG".into(),
///     org: Some("KRR".into()),
/// }])
/// .unwrap();
///
/// let results = parse_results("MG10(2)", &registry).unwrap();
/// assert_eq!(results[0].race, "Mountain Goat");
/// assert_eq!(results[0].distance.as_deref(), Some("10K"));
/// assert_eq!(results[0].points, 2);
/// ```
pub fn parse_results(
    summary: &str,
    registry: &RaceRegistry,
) -> Result<Vec<RaceResult>, ResultParseError> {
    summary
        .split_whitespace()
        .map(|token| parse_token(token, registry))
        .collect()
}

/// Sum of points across a participant's results.
pub fn total_points(participant: &Participant) -> u32 {
    sum_points(&participant.results)
}

/// Sum of points across a list of results.
pub fn sum_points(results: &[RaceResult]) -> u32 {
    results.iter().map(|r| r.points).sum()
}

fn parse_token(token: &str, registry: &RaceRegistry) -> Result<RaceResult, ResultParseError> {
    let parts =
        split_token(token).ok_or_else(|| ResultParseError::malformed_token(token))?;

    let race = registry
        .find(parts.abbreviation)
        .ok_or_else(|| ResultParseError::unknown_race(parts.abbreviation))?;

    let distance = if parts.distance.is_empty() {
        None
    } else {
        let label = race
            .resolve_distance(parts.distance)
            .ok_or_else(|| ResultParseError::unknown_distance(&race.name, parts.distance))?;
        Some(label.to_string())
    };

    // split_token only yields digits; overflow is the one failure left.
    let points = parts
        .points
        .parse::<u32>()
        .map_err(|_| ResultParseError::malformed_token(token))?;

    log::debug!(
        "Parsed {token} -> {} {} ({points} pts)",
        race.name,
        distance.as_deref().unwrap_or("-"),
    );

    Ok(RaceResult {
        race: race.name.clone(),
        distance,
        points,
    })
}

// ── Tokenizer ───────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
struct TokenParts<'a> {
    abbreviation: &'a str,
    distance: &'a str,
    points: &'a str,
}

/// Find the first `ABBR[DIGITS](DIGITS)` occurrence in a token and split it
/// into its three parts. Text around the occurrence is ignored, so
/// `"(MG5(1))"` and `"MG5(1),"` both yield `MG`, `5`, `1`.
fn split_token(token: &str) -> Option<TokenParts<'_>> {
    let bytes = token.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        if !bytes[start].is_ascii_uppercase() {
            start += 1;
            continue;
        }
        // A run of capitals either matches from its first letter or not at
        // all, so only run starts need checking.
        let abbr_end = span_end(bytes, start, u8::is_ascii_uppercase);
        if let Some(parts) = match_at(token, start, abbr_end) {
            return Some(parts);
        }
        start = abbr_end;
    }

    None
}

/// Match `[DIGITS](DIGITS)` right after the abbreviation `token[start..abbr_end]`.
fn match_at(token: &str, start: usize, abbr_end: usize) -> Option<TokenParts<'_>> {
    let bytes = token.as_bytes();

    let dist_end = span_end(bytes, abbr_end, u8::is_ascii_digit);
    if bytes.get(dist_end) != Some(&b'(') {
        return None;
    }

    let points_start = dist_end + 1;
    let points_end = span_end(bytes, points_start, u8::is_ascii_digit);
    if points_end == points_start || bytes.get(points_end) != Some(&b')') {
        return None;
    }

    Some(TokenParts {
        abbreviation: &token[start..abbr_end],
        distance: &token[abbr_end..dist_end],
        points: &token[points_start..points_end],
    })
}

/// Index of the first byte at or after `from` that fails `pred`.
fn span_end(bytes: &[u8], from: usize, pred: fn(&u8) -> bool) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.iter().position(|b| !pred(b)))
        .map_or(bytes.len(), |n| from + n)
}

// ── Standings ───────────────────────────────────────────────────────────────

/// A participant's position within an age group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Competition ranking: tied totals share a place and the next place is
    /// skipped (1, 2, 2, 4).
    pub place: usize,
    pub name: String,
    pub points: u32,
    pub races: usize,
    pub renewed: bool,
}

/// Rank an age group's participants by total points, highest first.
///
/// Ties keep roster order.
pub fn standings(group: &AgeGroup) -> Vec<Standing> {
    let mut ranked: Vec<&Participant> = group.participants.iter().collect();
    ranked.sort_by_key(|p| std::cmp::Reverse(total_points(p)));

    let mut out: Vec<Standing> = Vec::with_capacity(ranked.len());
    for (i, participant) in ranked.into_iter().enumerate() {
        let points = total_points(participant);
        let place = match out.last() {
            Some(prev) if prev.points == points => prev.place,
            _ => i + 1,
        };
        out.push(Standing {
            place,
            name: participant.name.clone(),
            points,
            races: participant.race_count(),
            renewed: participant.renewed,
        });
    }
    out
}

#[cfg(test)]
#[path = "tests/results_tests.rs"]
mod tests;
