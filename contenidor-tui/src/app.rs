use chrono::{Duration, NaiveDateTime};
use contenidor_core::command::{TimeExpr, parse_time_expr};
use contenidor_core::i18n::Language;

/// Minutes per arrow-key step of the time selector.
pub(crate) const STEP_MINUTES: i64 = 15;

/// Keep chrono arithmetic well inside range however long the arrows are held.
const OFFSET_LIMIT_MINUTES: i64 = 10 * 366 * 24 * 60;

pub(crate) struct App {
    pub language: Language,

    /// Signed adjustment applied on top of the base instant.
    pub offset_minutes: i64,
    /// Absolute instant selected via `at`/`on` commands; `None` tracks the
    /// live clock.
    pub pinned: Option<NaiveDateTime>,

    pub command_input: String,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            language: Language::English,
            offset_minutes: 0,
            pinned: None,
            command_input: String::new(),
            error_message: None,
        }
    }

    /// The instant verdicts are computed for.
    pub(crate) fn evaluation_instant(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.pinned.unwrap_or(now) + Duration::minutes(self.offset_minutes)
    }

    /// Whether the display tracks the live clock without adjustment.
    pub(crate) fn is_live(&self) -> bool {
        self.pinned.is_none() && self.offset_minutes == 0
    }

    pub(crate) fn step(&mut self, minutes: i64) {
        self.offset_minutes =
            (self.offset_minutes + minutes).clamp(-OFFSET_LIMIT_MINUTES, OFFSET_LIMIT_MINUTES);
    }

    pub(crate) fn reset_to_now(&mut self) {
        self.pinned = None;
        self.offset_minutes = 0;
    }

    /// Parse the command buffer and apply it to the time selection. On
    /// success the buffer is cleared; on failure it is kept for correction
    /// and the error goes to the status bar.
    pub(crate) fn submit_command(&mut self, now: NaiveDateTime) {
        match parse_time_expr(&self.command_input) {
            Ok(TimeExpr::Now) => self.reset_to_now(),
            Ok(TimeExpr::Offset(delta)) => self.step(delta.num_minutes()),
            Ok(expr) => {
                self.pinned = Some(expr.resolve(self.evaluation_instant(now)));
                self.offset_minutes = 0;
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                return;
            }
        }
        self.command_input.clear();
        self.error_message = None;
    }
}
