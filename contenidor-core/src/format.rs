//! Pure formatting helpers for the presentation layer.
//!
//! Language and reference date are always explicit parameters; nothing here
//! reads a clock or shared state.

use chrono::{NaiveDate, NaiveDateTime};

use crate::i18n::{self, Language, Message};

/// "HH:MM" clock label.
#[must_use]
pub fn clock_label(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// "DD.MM.YYYY" date label.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Localized today/tomorrow/yesterday for nearby dates, otherwise
/// "in N days" / "N days ago" relative to `today`.
#[must_use]
pub fn relative_day_label(date: NaiveDate, today: NaiveDate, language: Language) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => i18n::translate(language, Message::Today).to_owned(),
        1 => i18n::translate(language, Message::Tomorrow).to_owned(),
        -1 => i18n::translate(language, Message::Yesterday).to_owned(),
        days if days > 1 => format!("in {days} days"),
        days => format!("{} days ago", days.abs()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::relative_day_label;
    use crate::i18n::Language;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn nearby_dates_use_localized_labels() {
        let today = date(2025, 7, 15);
        assert_eq!(relative_day_label(today, today, Language::English), "Today");
        assert_eq!(
            relative_day_label(date(2025, 7, 16), today, Language::Spanish),
            "Mañana"
        );
        assert_eq!(
            relative_day_label(date(2025, 7, 14), today, Language::Valencian),
            "Ahir"
        );
    }

    #[test]
    fn distant_dates_count_days() {
        let today = date(2025, 7, 15);
        assert_eq!(
            relative_day_label(date(2025, 7, 20), today, Language::English),
            "in 5 days"
        );
        assert_eq!(
            relative_day_label(date(2025, 7, 10), today, Language::English),
            "5 days ago"
        );
    }
}
