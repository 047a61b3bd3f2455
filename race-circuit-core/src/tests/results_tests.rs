use super::*;
use crate::types::{AgeRange, Gender, Race};

fn race(name: &str, abbreviation: &str, distances: &[&str]) -> Race {
    Race {
        name: name.into(),
        date: "2025-01-01".into(),
        url: None,
        distances: distances.iter().map(|d| d.to_string()).collect(),
        abbreviation: abbreviation.into(),
        org: None,
    }
}

fn make_registry() -> RaceRegistry {
    RaceRegistry::new(vec![
        race("Siberian Express", "SE", &[]),
        race(
            "Charleston Challenge Mid-Winter Classic",
            "CC",
            &["5K", "10K", "15K"],
        ),
        race("Mountain Goat", "MG", &["5K", "10K", "15K"]),
        race("Clinton Lake Trail Race", "CL", &["10", "30"]),
    ])
    .unwrap()
}

fn result(race: &str, distance: Option<&str>, points: u32) -> RaceResult {
    RaceResult {
        race: race.into(),
        distance: distance.map(String::from),
        points,
    }
}

// -- parse_results --

#[test]
fn empty_summary_yields_no_results() {
    let registry = make_registry();
    assert!(parse_results("", &registry).unwrap().is_empty());
    assert!(parse_results("   ", &registry).unwrap().is_empty());
    assert!(parse_results("\t\n", &registry).unwrap().is_empty());
}

#[test]
fn single_result_with_distance() {
    let results = parse_results("MG5(1)", &make_registry()).unwrap();
    assert_eq!(results, vec![result("Mountain Goat", Some("5K"), 1)]);
}

#[test]
fn race_without_distances() {
    let results = parse_results("SE(2)", &make_registry()).unwrap();
    assert_eq!(results, vec![result("Siberian Express", None, 2)]);
}

#[test]
fn multiple_results_keep_source_order() {
    let results = parse_results("SE(2) CC10(2) MG15(1)", &make_registry()).unwrap();
    assert_eq!(
        results,
        vec![
            result("Siberian Express", None, 2),
            result("Charleston Challenge Mid-Winter Classic", Some("10K"), 2),
            result("Mountain Goat", Some("15K"), 1),
        ]
    );
}

#[test]
fn extra_whitespace_is_ignored() {
    let results = parse_results("  CC15(2)   MG15(1) ", &make_registry()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].distance.as_deref(), Some("15K"));
}

#[test]
fn distance_prefix_matches_exact_label() {
    // CL registers bare numbers rather than "10K"
    let results = parse_results("CL10(3)", &make_registry()).unwrap();
    assert_eq!(results[0].distance.as_deref(), Some("10"));
}

#[test]
fn ambiguous_prefix_resolves_to_first_registered() {
    let registry = RaceRegistry::new(vec![race("Short Stuff", "SS", &["1K", "10K", "1M"])]).unwrap();
    let results = parse_results("SS1(1) SS10(1)", &registry).unwrap();
    assert_eq!(results[0].distance.as_deref(), Some("1K"));
    assert_eq!(results[1].distance.as_deref(), Some("10K"));
}

#[test]
fn unknown_race() {
    let err = parse_results("XX(1)", &make_registry()).unwrap_err();
    assert_eq!(err, ResultParseError::UnknownRace("XX".into()));
}

#[test]
fn unknown_distance() {
    let err = parse_results("MG99(1)", &make_registry()).unwrap_err();
    assert_eq!(
        err,
        ResultParseError::UnknownDistance {
            race: "Mountain Goat".into(),
            prefix: "99".into(),
        }
    );
}

#[test]
fn distance_on_race_without_distances() {
    let err = parse_results("SE5(1)", &make_registry()).unwrap_err();
    assert!(matches!(err, ResultParseError::UnknownDistance { .. }));
}

#[test]
fn malformed_tokens() {
    let registry = make_registry();
    for token in [
        "MG", "MG5", "mg5(1)", "5(1)", "MG5()", "MG5(1", "MG5(x)", "(1)", "MG-5(1)",
    ] {
        let err = parse_results(token, &registry).unwrap_err();
        assert_eq!(
            err,
            ResultParseError::MalformedToken(token.into()),
            "token {:?}",
            token
        );
    }
}

#[test]
fn surrounding_text_is_ignored() {
    let registry = make_registry();
    for token in ["xMG5(1)", "MG5(1),", "(MG5(1))", "MG5(1)x"] {
        assert_eq!(
            parse_results(token, &registry).unwrap(),
            vec![result("Mountain Goat", Some("5K"), 1)],
            "token {:?}",
            token
        );
    }
}

#[test]
fn first_bad_token_aborts_whole_parse() {
    let err = parse_results("SE(1) XX(2) MG99(1)", &make_registry()).unwrap_err();
    assert_eq!(err, ResultParseError::UnknownRace("XX".into()));
}

#[test]
fn points_overflow_is_malformed() {
    let err = parse_results("SE(99999999999)", &make_registry()).unwrap_err();
    assert!(matches!(err, ResultParseError::MalformedToken(_)));
}

#[test]
fn error_messages() {
    assert_eq!(
        ResultParseError::malformed_token("MG5").to_string(),
        "Invalid race result format: \"MG5\""
    );
    assert_eq!(
        ResultParseError::unknown_race("XX").to_string(),
        "Race with abbreviation XX not found"
    );
    assert_eq!(
        ResultParseError::unknown_distance("Mountain Goat", "99").to_string(),
        "Distance 99 not found for race Mountain Goat"
    );
}

// -- split_token --

#[test]
fn split_token_parts() {
    assert_eq!(
        split_token("CC10(2)"),
        Some(TokenParts {
            abbreviation: "CC",
            distance: "10",
            points: "2",
        })
    );
    assert_eq!(
        split_token("SE(12)"),
        Some(TokenParts {
            abbreviation: "SE",
            distance: "",
            points: "12",
        })
    );
    assert_eq!(split_token("É(1)"), None);
    // A capital run that fails to match does not hide a later one.
    assert_eq!(
        split_token("MGx-SE(3)"),
        Some(TokenParts {
            abbreviation: "SE",
            distance: "",
            points: "3",
        })
    );
}

// -- total_points --

#[test]
fn total_points_sums_results() {
    let participant = Participant::new(
        "Krista Overstreet",
        vec![result("A", None, 2), result("B", None, 3)],
    );
    assert_eq!(total_points(&participant), 5);
    assert_eq!(participant.total_points(), 5);
}

#[test]
fn total_points_with_no_results() {
    let participant = Participant::new("Oona Joyce", Vec::new());
    assert_eq!(total_points(&participant), 0);
}

#[test]
fn sum_points_of_parsed_summary() {
    let results = parse_results("SE(2) CC10(2) MG15(1)", &make_registry()).unwrap();
    assert_eq!(sum_points(&results), 5);
    assert_eq!(sum_points(&[]), 0);
}

// -- standings --

fn group(participants: Vec<Participant>) -> AgeGroup {
    AgeGroup {
        gender: Gender::Female,
        age_range: AgeRange {
            min: 40,
            max: Some(49),
        },
        participants,
    }
}

#[test]
fn standings_rank_by_points() {
    let registry = make_registry();
    let g = group(vec![
        Participant::new("Low", parse_results("MG10(1)", &registry).unwrap()),
        Participant::new("High", parse_results("SE(2) CC10(2) MG15(1)", &registry).unwrap()),
        Participant::new("None", Vec::new()),
    ]);

    let table = standings(&g);
    let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["High", "Low", "None"]);
    assert_eq!(table[0].points, 5);
    assert_eq!(table[0].races, 3);
    assert_eq!(table[2].points, 0);
}

#[test]
fn standings_ties_share_place_and_keep_roster_order() {
    let registry = make_registry();
    let g = group(vec![
        Participant::new("A", parse_results("MG10(1)", &registry).unwrap()),
        Participant::new("B", parse_results("MG10(2)", &registry).unwrap()),
        Participant::new("C", parse_results("MG15(2)", &registry).unwrap()),
        Participant::new("D", parse_results("SE(1)", &registry).unwrap()),
    ]);

    let table = standings(&g);
    let placed: Vec<(usize, &str)> = table.iter().map(|s| (s.place, s.name.as_str())).collect();
    assert_eq!(placed, vec![(1, "B"), (1, "C"), (3, "A"), (3, "D")]);
}

#[test]
fn standings_of_empty_group() {
    assert!(standings(&group(Vec::new())).is_empty());
}
