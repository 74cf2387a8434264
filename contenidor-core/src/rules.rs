//! Per-category deposit rule evaluation.

use chrono::NaiveDateTime;

use crate::model::{
    ClockWindow, EvaluationMode, EvaluationResult, Season, WasteCategory, WasteVerdict,
};

/// Evening deposit window for organic and other household waste in summer.
pub const SUMMER_HOUSEHOLD_WINDOW: ClockWindow = ClockWindow::new(21, 0, 24, 0);
/// Evening deposit window for organic and other household waste in winter,
/// one hour earlier than in summer.
pub const WINTER_HOUSEHOLD_WINDOW: ClockWindow = ClockWindow::new(19, 0, 24, 0);
/// Overnight quiet hours during which glass may not be deposited, year-round.
pub const GLASS_CURFEW: ClockWindow = ClockWindow::new(23, 0, 8, 0);

/// The evening window governing organic and other household waste in the
/// given season. Both categories always share one window.
#[must_use]
pub fn household_window(season: Season) -> ClockWindow {
    match season {
        Season::Summer => SUMMER_HOUSEHOLD_WINDOW,
        Season::Winter => WINTER_HOUSEHOLD_WINDOW,
    }
}

/// The clock window a category's rule is expressed in, if it has one:
/// the permissive evening window for household waste, the quiet-hours
/// curfew for glass, nothing for the unconditional and check-required
/// categories.
#[must_use]
pub fn governing_window(category: WasteCategory, season: Season) -> Option<ClockWindow> {
    match category {
        WasteCategory::Organic | WasteCategory::OtherHousehold => Some(household_window(season)),
        WasteCategory::Glass => Some(GLASS_CURFEW),
        WasteCategory::Recyclables | WasteCategory::Bulky => None,
    }
}

/// Evaluate every waste category at the given local wall-clock instant.
///
/// Produces exactly one verdict per category, in [`WasteCategory::ALL`]
/// order. The function is total and deterministic: identical input yields
/// a structurally identical result, with no I/O and no shared state.
///
/// Bulky items never have a computable time rule; their verdict is a
/// conservative not-allowed with [`EvaluationMode::CheckRequired`], tagged
/// with the season so callers can point at the right facility hours.
#[must_use]
pub fn evaluate(at: NaiveDateTime) -> EvaluationResult {
    let season = Season::of(at.date());
    let time = at.time();

    let household_allowed = household_window(season).contains(time);
    let glass_allowed = !GLASS_CURFEW.contains(time);

    let entries = vec![
        WasteVerdict {
            category: WasteCategory::Organic,
            allowed: household_allowed,
            mode: EvaluationMode::Window,
            season: Some(season),
        },
        WasteVerdict {
            category: WasteCategory::OtherHousehold,
            allowed: household_allowed,
            mode: EvaluationMode::Window,
            season: Some(season),
        },
        WasteVerdict {
            category: WasteCategory::Glass,
            allowed: glass_allowed,
            mode: EvaluationMode::Curfew,
            season: None,
        },
        WasteVerdict {
            category: WasteCategory::Recyclables,
            allowed: true,
            mode: EvaluationMode::Always,
            season: None,
        },
        WasteVerdict {
            category: WasteCategory::Bulky,
            allowed: false,
            mode: EvaluationMode::CheckRequired,
            season: Some(season),
        },
    ];

    EvaluationResult { season, entries }
}
