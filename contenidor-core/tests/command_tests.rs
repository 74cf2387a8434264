//! Time expression parsing: accepted forms, resolution, and rejection.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use contenidor_core::command::{CommandError, TimeExpr, parse_time_expr, resolve_time_expr};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 15)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

fn parsed(input: &str) -> TimeExpr {
    parse_time_expr(input).expect("expression should parse")
}

// ── Accepted forms ──────────────────────────────────────────────────────────

#[test]
fn now_resolves_to_the_reference_instant() {
    assert_eq!(parsed("now"), TimeExpr::Now);
    assert_eq!(parsed("NOW"), TimeExpr::Now);
    assert_eq!(parsed("  now  "), TimeExpr::Now);
    assert_eq!(parsed("now").resolve(reference()), reference());
}

#[test]
fn signed_offsets_parse_to_minutes() {
    assert_eq!(parsed("+3h"), TimeExpr::Offset(Duration::minutes(180)));
    assert_eq!(parsed("-45m"), TimeExpr::Offset(Duration::minutes(-45)));
    assert_eq!(parsed("+1h30m"), TimeExpr::Offset(Duration::minutes(90)));
    assert_eq!(parsed("+2d"), TimeExpr::Offset(Duration::minutes(2 * 24 * 60)));
    assert_eq!(parsed("-1d12h"), TimeExpr::Offset(Duration::minutes(-(36 * 60))));
}

#[test]
fn offsets_resolve_relative_to_the_reference() {
    let shifted = resolve_time_expr("+3h", reference()).expect("valid offset");
    assert_eq!(shifted, reference() + Duration::hours(3));

    let back = resolve_time_expr("-45m", reference()).expect("valid offset");
    assert_eq!(back, reference() - Duration::minutes(45));
}

#[test]
fn at_pins_a_clock_time_on_the_reference_date() {
    let expr = parsed("at 21:00");
    assert_eq!(expr, TimeExpr::At(NaiveTime::from_hms_opt(21, 0, 0).expect("valid time")));

    let resolved = expr.resolve(reference());
    assert_eq!(resolved.date(), reference().date());
    assert_eq!(resolved.time(), NaiveTime::from_hms_opt(21, 0, 0).expect("valid time"));
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(parsed("AT 21:00"), parsed("at 21:00"));
    assert_eq!(parsed("On 2025-09-15"), parsed("on 2025-09-15"));
}

#[test]
fn on_accepts_date_only_and_date_time() {
    let midnight = NaiveDate::from_ymd_opt(2025, 9, 15)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");
    assert_eq!(parsed("on 2025-09-15"), TimeExpr::On(midnight));

    let evening = NaiveDate::from_ymd_opt(2025, 9, 15)
        .expect("valid date")
        .and_hms_opt(22, 30, 0)
        .expect("valid time");
    assert_eq!(parsed("on 2025-09-15 22:30"), TimeExpr::On(evening));
    assert_eq!(parsed("on 2025-09-15T22:30"), TimeExpr::On(evening));
}

#[test]
fn absolute_expressions_ignore_the_reference() {
    let resolved = resolve_time_expr("on 2025-09-15 22:30", reference()).expect("valid date-time");
    assert_eq!(resolved.to_string(), "2025-09-15 22:30:00");
}

// ── Rejected input ──────────────────────────────────────────────────────────

#[test]
fn empty_input_is_rejected_as_empty() {
    assert!(matches!(parse_time_expr(""), Err(CommandError::Empty)));
    assert!(matches!(parse_time_expr("   "), Err(CommandError::Empty)));
}

#[test]
fn junk_is_rejected_as_unrecognized() {
    assert!(matches!(parse_time_expr("soon"), Err(CommandError::Unrecognized(_))));
    assert!(matches!(parse_time_expr("3h"), Err(CommandError::Unrecognized(_))));
    assert!(matches!(parse_time_expr("tomorrow 21:00"), Err(CommandError::Unrecognized(_))));
}

#[test]
fn malformed_offsets_are_rejected() {
    assert!(matches!(parse_time_expr("+"), Err(CommandError::InvalidOffset(_))));
    assert!(matches!(parse_time_expr("+h"), Err(CommandError::InvalidOffset(_))));
    assert!(matches!(parse_time_expr("+5x"), Err(CommandError::InvalidOffset(_))));
    // a number without a unit is ambiguous
    assert!(matches!(parse_time_expr("+30"), Err(CommandError::InvalidOffset(_))));
    // beyond the one-year cap
    assert!(matches!(parse_time_expr("+9999999d"), Err(CommandError::InvalidOffset(_))));
}

#[test]
fn out_of_range_clock_times_and_dates_are_parse_errors() {
    assert!(matches!(parse_time_expr("at 25:00"), Err(CommandError::Parse(_))));
    assert!(matches!(parse_time_expr("at 21:60"), Err(CommandError::Parse(_))));
    assert!(matches!(parse_time_expr("on 2025-13-01"), Err(CommandError::Parse(_))));
    assert!(matches!(parse_time_expr("on 2025-02-30"), Err(CommandError::Parse(_))));
    assert!(matches!(parse_time_expr("on 2025-09-15 24:30"), Err(CommandError::Parse(_))));
}
