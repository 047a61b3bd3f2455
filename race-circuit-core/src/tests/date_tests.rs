use super::*;

fn display(s: &str) -> String {
    format_race_date(s).unwrap().display
}

#[test]
fn single_date() {
    assert_eq!(
        format_race_date("2025-03-15").unwrap(),
        FormattedDate {
            display: "Mar 15".into(),
            is_likely: false,
        }
    );
}

#[test]
fn likely_single_date() {
    assert_eq!(
        format_race_date("2025-03-15*").unwrap(),
        FormattedDate {
            display: "Mar 15".into(),
            is_likely: true,
        }
    );
}

#[test]
fn day_is_not_zero_padded() {
    assert_eq!(display("2025-01-04"), "Jan 4");
    assert_eq!(display("2025-12-01"), "Dec 1");
}

#[test]
fn all_month_abbreviations() {
    let expected = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    for (i, month) in expected.iter().enumerate() {
        let s = format!("2025-{:02}-10", i + 1);
        assert_eq!(display(&s), format!("{month} 10"));
    }
}

#[test]
fn same_month_range_uses_em_dash() {
    assert_eq!(display("2025-03-15/16"), "Mar 15\u{2014}16");
}

#[test]
fn cross_month_range() {
    assert_eq!(display("2025-03-29/04-05"), "Mar 29 - Apr 5");
}

#[test]
fn likely_range() {
    let formatted = format_race_date("2025-03-15/16*").unwrap();
    assert!(formatted.is_likely);
    assert_eq!(formatted.display, "Mar 15\u{2014}16");
}

#[test]
fn marker_anywhere_in_string() {
    let formatted = format_race_date("2025-0*3-15").unwrap();
    assert!(formatted.is_likely);
    assert_eq!(formatted.display, "Mar 15");
}

#[test]
fn unpadded_components_are_accepted() {
    assert_eq!(display("2025-3-5"), "Mar 5");
}

// -- splice_end_date boundaries --

#[test]
fn splice_shorter_suffix() {
    assert_eq!(splice_end_date("2025-03-15", "16"), "2025-03-16");
    assert_eq!(splice_end_date("2025-03-29", "04-05"), "2025-04-05");
    assert_eq!(splice_end_date("2025-03-15", "7"), "2025-03-17");
}

#[test]
fn splice_suffix_equal_to_full_length() {
    assert_eq!(splice_end_date("2025-03-15", "2026-01-02"), "2026-01-02");
}

#[test]
fn splice_suffix_longer_than_start() {
    assert_eq!(splice_end_date("2025-3-5", "2025-04-05"), "2025-04-05");
}

#[test]
fn range_with_full_end_date() {
    assert_eq!(display("2025-03-29/2025-04-05"), "Mar 29 - Apr 5");
}

#[test]
fn range_month_compare_ignores_year() {
    // Same calendar month in different years still collapses.
    assert_eq!(display("2025-03-15/2026-03-16"), "Mar 15\u{2014}16");
}

// -- errors --

#[test]
fn nonexistent_day_is_rejected() {
    assert_eq!(
        format_race_date("2025-02-30"),
        Err(DateError::InvalidDate("2025-02-30".into()))
    );
    assert_eq!(
        format_race_date("2025-13-01"),
        Err(DateError::InvalidDate("2025-13-01".into()))
    );
}

#[test]
fn invalid_range_end_is_rejected() {
    assert_eq!(
        format_race_date("2025-04-30/31*"),
        Err(DateError::InvalidDate("2025-04-30/31*".into()))
    );
}

#[test]
fn malformed_dates() {
    for s in [
        "",
        "2025",
        "2025-03",
        "March 15",
        "2025-03-15-01",
        "2025-03-xx",
        "2025-03-15/",
        "2025--15",
    ] {
        assert_eq!(
            format_race_date(s),
            Err(DateError::Malformed(s.into())),
            "input {:?}",
            s
        );
    }
}

#[test]
fn components_must_be_bare_digits() {
    for s in ["2025- 03-15", "+2025-03-15", "2025-03- 15", "2025-03-15/ 16", "2025-+3-15"] {
        assert_eq!(
            format_race_date(s),
            Err(DateError::Malformed(s.into())),
            "input {:?}",
            s
        );
    }
}
