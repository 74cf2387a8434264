//! Free-text time expressions for the command-style front end.
//!
//! Callers parse user input here and hand the resolved timestamp to
//! [`crate::rules::evaluate`]; malformed input never reaches the evaluator.

use chrono::{
    Duration, NaiveDate, NaiveDateTime, NaiveTime, ParseError as ChronoParseError,
};

/// Largest accepted relative offset, one year in minutes.
const MAX_OFFSET_MINUTES: i64 = 366 * 24 * 60;

#[derive(thiserror::Error, Debug)]
/// Errors produced while parsing a time expression.
pub enum CommandError {
    /// The input was empty or whitespace.
    #[error("Empty time expression")]
    Empty,
    /// The input matched none of the accepted forms.
    #[error("Unrecognized time expression: {0}")]
    Unrecognized(String),
    /// A relative offset was malformed or out of range.
    #[error("Invalid offset: {0}")]
    InvalidOffset(String),
    /// A clock time or date failed to parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ChronoParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A parsed time expression, not yet anchored to a reference instant.
pub enum TimeExpr {
    /// The reference instant itself (`now`).
    Now,
    /// A signed offset from the reference instant (`+3h`, `-45m`, `+1h30m`).
    Offset(Duration),
    /// A wall-clock time on the reference date (`at 21:00`).
    At(NaiveTime),
    /// An absolute date or date-time (`on 2025-09-15 22:30`).
    On(NaiveDateTime),
}

impl TimeExpr {
    /// Anchor the expression to a concrete timestamp.
    #[must_use]
    pub fn resolve(self, reference: NaiveDateTime) -> NaiveDateTime {
        match self {
            TimeExpr::Now => reference,
            TimeExpr::Offset(delta) => reference + delta,
            TimeExpr::At(time) => reference.date().and_time(time),
            TimeExpr::On(at) => at,
        }
    }
}

/// Parse a free-text time expression.
///
/// Accepted forms, keywords case-insensitive:
/// - `now`
/// - signed offsets with minute/hour/day components: `+3h`, `-45m`, `+1h30m`,
///   `-2d` (a unit is required after every number)
/// - `at HH:MM`
/// - `on YYYY-MM-DD` (midnight) or `on YYYY-MM-DD HH:MM`, also with a `T`
///   separator
///
/// # Errors
///
/// Returns a [`CommandError`] describing why the input was rejected.
pub fn parse_time_expr(input: &str) -> Result<TimeExpr, CommandError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }

    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(TimeExpr::Now);
    }

    if let Some(rest) = keyword_rest(trimmed, "at") {
        let time = NaiveTime::parse_from_str(rest, "%H:%M")?;
        return Ok(TimeExpr::At(time));
    }

    if let Some(rest) = keyword_rest(trimmed, "on") {
        return parse_on(rest);
    }

    if trimmed.starts_with(['+', '-']) {
        return parse_offset(trimmed);
    }

    Err(CommandError::Unrecognized(trimmed.to_owned()))
}

/// Parse an expression and resolve it against the reference instant in one
/// step.
///
/// # Errors
///
/// Returns a [`CommandError`] when the input fails to parse.
pub fn resolve_time_expr(
    input: &str,
    reference: NaiveDateTime,
) -> Result<NaiveDateTime, CommandError> {
    parse_time_expr(input).map(|expr| expr.resolve(reference))
}

/// Split off a leading keyword and return the rest, or `None` if the input
/// does not start with that keyword.
fn keyword_rest<'input>(input: &'input str, keyword: &str) -> Option<&'input str> {
    let (head, rest) = input.split_once(char::is_whitespace)?;
    head.eq_ignore_ascii_case(keyword)
        .then(|| rest.trim_start())
}

fn parse_on(rest: &str) -> Result<TimeExpr, CommandError> {
    if let Some((date_part, time_part)) = rest.split_once([' ', 'T']) {
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?;
        let time = NaiveTime::parse_from_str(time_part.trim_start(), "%H:%M")?;
        Ok(TimeExpr::On(date.and_time(time)))
    } else {
        let date = NaiveDate::parse_from_str(rest, "%Y-%m-%d")?;
        Ok(TimeExpr::On(date.and_time(NaiveTime::MIN)))
    }
}

fn parse_offset(expr: &str) -> Result<TimeExpr, CommandError> {
    let invalid = || CommandError::InvalidOffset(expr.to_owned());

    let mut characters = expr.chars();
    let negative = characters.next() == Some('-');
    let body = characters.as_str();
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total_minutes: i64 = 0;
    let mut current: i64 = 0;
    let mut pending_digits = false;

    for character in body.chars() {
        if let Some(digit) = character.to_digit(10) {
            current = current * 10 + i64::from(digit);
            if current > MAX_OFFSET_MINUTES {
                return Err(invalid());
            }
            pending_digits = true;
        } else {
            if !pending_digits {
                return Err(invalid());
            }
            let scale = match character.to_ascii_lowercase() {
                'm' => 1,
                'h' => 60,
                'd' => 24 * 60,
                _ => return Err(invalid()),
            };
            total_minutes += current * scale;
            if total_minutes > MAX_OFFSET_MINUTES {
                return Err(invalid());
            }
            current = 0;
            pending_digits = false;
        }
    }

    // a trailing number without a unit is ambiguous
    if pending_digits {
        return Err(invalid());
    }

    if negative {
        total_minutes = -total_minutes;
    }
    Ok(TimeExpr::Offset(Duration::minutes(total_minutes)))
}
