//! Season and clock-window predicates the rule evaluator is built on.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// First day of the summer schedule, as (month, day).
const SUMMER_START: (u32, u32) = (5, 1);
/// Last day of the summer schedule, as (month, day), inclusive.
const SUMMER_END: (u32, u32) = (9, 30);

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Check whether the date falls within the summer schedule of its own year,
/// May 1 through September 30 inclusive of the whole end day.
///
/// Only (month, day) matter; the year is used solely to pick which May/September
/// bound the date is compared against, so the answer is year-independent.
#[must_use]
pub fn is_summer_season(date: NaiveDate) -> bool {
    let month_day = (date.month(), date.day());
    (SUMMER_START..=SUMMER_END).contains(&month_day)
}

/// Check whether the time of day lies inside the clock window, both bounds
/// inclusive. The date component is ignored entirely.
///
/// A window whose end precedes its start wraps over midnight: 23:00-08:00
/// covers late evening and early morning. An `end_hour` of 24 marks end of
/// day (1440 minutes); it is at or past every valid start, so such a window
/// never wraps and is inclusive through 23:59.
#[must_use]
pub fn is_within_clock_window(
    time: NaiveTime,
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
) -> bool {
    let probe = time.hour() * 60 + time.minute();
    let start = start_hour * 60 + start_minute;
    let end = if end_hour == 24 {
        MINUTES_PER_DAY
    } else {
        end_hour * 60 + end_minute
    };

    if end >= start {
        probe >= start && probe <= end
    } else {
        // wraps over midnight
        probe >= start || probe <= end
    }
}
