//! Core rule engine for Xàbia/Javea communal street bin deposit hours.

/// Season and clock-window predicates used by the rule evaluator.
pub mod calendar;
/// Free-text time expression parsing for the command-style front end.
pub mod command;
/// Pure formatting helpers for clock, date, and relative-day labels.
pub mod format;
/// Typed message catalog and language fallback chain.
pub mod i18n;
/// Domain models shared by the evaluator and its callers.
pub mod model;
/// The per-category deposit rule evaluator.
pub mod rules;

pub use calendar::*;
pub use command::*;
pub use format::*;
pub use i18n::*;
pub use model::*;
pub use rules::*;
