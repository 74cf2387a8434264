//! Domain data structures for waste categories, seasons, and verdicts.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Schedule article covering the four container categories.
const SCHEDULE_URL: &str =
    "https://www.javea.com/en/xabia-actualiza-los-horarios-para-tirar-la-basura-y-advierte-habra-sanciones/";
/// Ecoparc opening hours page for bulky items.
const ECOPARC_URL: &str = "https://www.ajxabia.com/ver/1282/ecoparc.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Household waste categories with a communal street bin in Xàbia.
pub enum WasteCategory {
    /// Food scraps, garden waste, and other biodegradables.
    Organic,
    /// Non-recyclable household waste (the "resto" bin).
    OtherHousehold,
    /// Glass bottles and jars.
    Glass,
    /// Paper, cardboard, plastic, and metal packaging.
    Recyclables,
    /// Furniture, appliances, and anything bound for the Ecoparc.
    Bulky,
}

impl WasteCategory {
    /// All categories in the fixed evaluation order.
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::Organic,
        WasteCategory::OtherHousehold,
        WasteCategory::Glass,
        WasteCategory::Recyclables,
        WasteCategory::Bulky,
    ];

    /// Official municipal source describing this category's deposit rules.
    #[must_use]
    pub fn details_url(self) -> &'static str {
        match self {
            WasteCategory::Bulky => ECOPARC_URL,
            _ => SCHEDULE_URL,
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            WasteCategory::Organic => "organic",
            WasteCategory::OtherHousehold => "other",
            WasteCategory::Glass => "glass",
            WasteCategory::Recyclables => "recyclables",
            WasteCategory::Bulky => "bulky",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Municipal schedule season, derived from the evaluation date.
pub enum Season {
    /// May 1 through September 30, inclusive.
    Summer,
    /// The remainder of the year.
    Winter,
}

impl Season {
    /// Determine the season the given date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Season {
        if calendar::is_summer_season(date) {
            Season::Summer
        } else {
            Season::Winter
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// How a verdict was derived from the municipal rules.
pub enum EvaluationMode {
    /// Allowed only inside a clock-time range.
    Window,
    /// Allowed except inside a clock-time range.
    Curfew,
    /// Unconditionally allowed.
    Always,
    /// No simple time rule; an external source must be consulted.
    CheckRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Inclusive clock-time range; `end_hour` 24 means end of day.
pub struct ClockWindow {
    /// Start hour, 0-23.
    pub start_hour: u32,
    /// Start minute, 0-59.
    pub start_minute: u32,
    /// End hour, 0-24.
    pub end_hour: u32,
    /// End minute, 0-59.
    pub end_minute: u32,
}

impl ClockWindow {
    /// Construct a window from its hour/minute bounds.
    #[must_use]
    pub const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    /// Check whether the time of day falls inside the window.
    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        calendar::is_within_clock_window(
            time,
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        )
    }
}

impl fmt::Display for ClockWindow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Allow/deny decision for one category at one point in time.
pub struct WasteVerdict {
    /// Category the verdict applies to.
    pub category: WasteCategory,
    /// Whether depositing is currently allowed.
    pub allowed: bool,
    /// How the decision was derived.
    pub mode: EvaluationMode,
    /// Season context, for rules that shift with the season.
    pub season: Option<Season>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Verdicts for every category at a single point in time.
pub struct EvaluationResult {
    /// Season the evaluation date falls in.
    pub season: Season,
    /// One verdict per category, in [`WasteCategory::ALL`] order.
    pub entries: Vec<WasteVerdict>,
}
