//! Evaluator scenarios: seasonal windows, the glass curfew, and the fixed
//! verdict shape.

use chrono::{NaiveDate, NaiveDateTime};
use contenidor_core::model::{EvaluationMode, EvaluationResult, Season, WasteCategory, WasteVerdict};
use contenidor_core::rules::{
    GLASS_CURFEW, SUMMER_HOUSEHOLD_WINDOW, WINTER_HOUSEHOLD_WINDOW, evaluate, governing_window,
    household_window,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

fn verdict(result: &EvaluationResult, category: WasteCategory) -> WasteVerdict {
    result
        .entries
        .iter()
        .copied()
        .find(|entry| entry.category == category)
        .expect("one verdict per category")
}

// ── Verdict shape ───────────────────────────────────────────────────────────

#[test]
fn produces_exactly_one_verdict_per_category_in_fixed_order() {
    let result = evaluate(at(2025, 7, 15, 12, 0));
    let order: Vec<WasteCategory> = result.entries.iter().map(|entry| entry.category).collect();
    assert_eq!(order, WasteCategory::ALL, "fixed evaluation order");
}

#[test]
fn evaluation_is_deterministic() {
    let instant = at(2025, 7, 15, 21, 30);
    assert_eq!(evaluate(instant), evaluate(instant), "identical input, identical output");
}

// ── Rule scenarios ──────────────────────────────────────────────────────────

#[test]
fn summer_evening_inside_household_window() {
    let result = evaluate(at(2025, 7, 15, 21, 30));
    assert_eq!(result.season, Season::Summer);

    let organic = verdict(&result, WasteCategory::Organic);
    assert!(organic.allowed);
    assert_eq!(organic.mode, EvaluationMode::Window);
    assert_eq!(organic.season, Some(Season::Summer));

    let other = verdict(&result, WasteCategory::OtherHousehold);
    assert!(other.allowed);
    assert_eq!(other.mode, EvaluationMode::Window);

    let glass = verdict(&result, WasteCategory::Glass);
    assert!(glass.allowed, "21:30 is before the quiet hours");
    assert_eq!(glass.mode, EvaluationMode::Curfew);

    let recyclables = verdict(&result, WasteCategory::Recyclables);
    assert!(recyclables.allowed);
    assert_eq!(recyclables.mode, EvaluationMode::Always);

    let bulky = verdict(&result, WasteCategory::Bulky);
    assert!(!bulky.allowed);
    assert_eq!(bulky.mode, EvaluationMode::CheckRequired);
    assert_eq!(bulky.season, Some(Season::Summer));
}

#[test]
fn winter_evening_uses_the_earlier_window() {
    let result = evaluate(at(2025, 12, 10, 20, 0));
    assert_eq!(result.season, Season::Winter);

    let organic = verdict(&result, WasteCategory::Organic);
    assert!(organic.allowed, "20:00 is inside the 19:00-24:00 winter window");
    assert_eq!(organic.season, Some(Season::Winter));

    let other = verdict(&result, WasteCategory::OtherHousehold);
    assert!(other.allowed);

    assert!(verdict(&result, WasteCategory::Glass).allowed);
    assert!(verdict(&result, WasteCategory::Recyclables).allowed);

    let bulky = verdict(&result, WasteCategory::Bulky);
    assert!(!bulky.allowed);
    assert_eq!(bulky.season, Some(Season::Winter));
}

#[test]
fn summer_afternoon_is_before_the_household_window() {
    let result = evaluate(at(2025, 7, 15, 18, 0));

    let organic = verdict(&result, WasteCategory::Organic);
    assert!(!organic.allowed, "18:00 is before the 21:00 summer start");
    assert_eq!(organic.season, Some(Season::Summer));

    let other = verdict(&result, WasteCategory::OtherHousehold);
    assert!(!other.allowed);
}

#[test]
fn glass_is_blocked_during_overnight_quiet_hours() {
    let result = evaluate(at(2025, 3, 1, 0, 30));
    let glass = verdict(&result, WasteCategory::Glass);
    assert!(!glass.allowed, "00:30 falls inside the 23:00-08:00 curfew");
    assert_eq!(glass.mode, EvaluationMode::Curfew);
}

// ── Rule structure ──────────────────────────────────────────────────────────

#[test]
fn organic_and_other_household_always_share_one_verdict() {
    for instant in [
        at(2025, 7, 15, 18, 0),
        at(2025, 7, 15, 21, 30),
        at(2025, 12, 10, 19, 30),
        at(2025, 12, 10, 12, 0),
        at(2025, 1, 1, 0, 0),
    ] {
        let result = evaluate(instant);
        let organic = verdict(&result, WasteCategory::Organic);
        let other = verdict(&result, WasteCategory::OtherHousehold);
        assert_eq!(organic.allowed, other.allowed, "shared window at {instant}");
        assert_eq!(organic.season, other.season);
    }
}

#[test]
fn household_window_shifts_one_hour_earlier_in_winter() {
    // 19:30 is inside the winter window but before the summer one
    let winter = evaluate(at(2025, 12, 10, 19, 30));
    assert!(verdict(&winter, WasteCategory::Organic).allowed);

    let summer = evaluate(at(2025, 7, 15, 19, 30));
    assert!(!verdict(&summer, WasteCategory::Organic).allowed);

    assert_eq!(household_window(Season::Summer), SUMMER_HOUSEHOLD_WINDOW);
    assert_eq!(household_window(Season::Winter), WINTER_HOUSEHOLD_WINDOW);
}

#[test]
fn midnight_closes_the_household_window_and_opens_the_curfew() {
    let result = evaluate(at(2025, 7, 16, 0, 0));
    assert!(!verdict(&result, WasteCategory::Organic).allowed);
    assert!(!verdict(&result, WasteCategory::Glass).allowed);
    assert!(verdict(&result, WasteCategory::Recyclables).allowed);
}

#[test]
fn seasonless_rules_carry_no_season_tag() {
    let result = evaluate(at(2025, 7, 15, 12, 0));
    assert_eq!(verdict(&result, WasteCategory::Glass).season, None);
    assert_eq!(verdict(&result, WasteCategory::Recyclables).season, None);
}

#[test]
fn governing_windows_match_the_rule_table() {
    assert_eq!(
        governing_window(WasteCategory::Organic, Season::Summer),
        Some(SUMMER_HOUSEHOLD_WINDOW)
    );
    assert_eq!(
        governing_window(WasteCategory::OtherHousehold, Season::Winter),
        Some(WINTER_HOUSEHOLD_WINDOW)
    );
    assert_eq!(governing_window(WasteCategory::Glass, Season::Summer), Some(GLASS_CURFEW));
    assert_eq!(governing_window(WasteCategory::Recyclables, Season::Winter), None);
    assert_eq!(governing_window(WasteCategory::Bulky, Season::Summer), None);
}
