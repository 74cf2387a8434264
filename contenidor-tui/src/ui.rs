use chrono::NaiveDateTime;
use contenidor_core::format::{clock_label, date_label, relative_day_label};
use contenidor_core::i18n::{self, Language, Message};
use contenidor_core::model::{EvaluationMode, EvaluationResult, Season, WasteCategory, WasteVerdict};
use contenidor_core::rules;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App, now: NaiveDateTime) {
    let at = app.evaluation_instant(now);
    let result = rules::evaluate(at);

    let area = frame.area();

    // Outer layout: title, time panel, command line, verdicts, details, status
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, time_area, command_area, verdict_area, details_area, status_area] = chunks
    else {
        return;
    };

    draw_header(frame, app, result.season, *header_area);
    draw_time_panel(frame, app, now, at, *time_area);
    draw_command_line(frame, app, *command_area);
    draw_verdicts(frame, app, &result, *verdict_area);
    draw_details_link(frame, app, *details_area);
    draw_status(frame, app, *status_area);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, season: Season, area: Rect) {
    let season_message = match season {
        Season::Summer => Message::SeasonSummer,
        Season::Winter => Message::SeasonWinter,
    };
    let text = format!(
        "contenidor – Xàbia street bin hours · {} · {}",
        i18n::translate(app.language, season_message),
        app.language.native_name(),
    );

    let header =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Contenidor"));
    frame.render_widget(header, area);
}

fn draw_time_panel(
    frame: &mut Frame<'_>,
    app: &App,
    now: NaiveDateTime,
    at: NaiveDateTime,
    area: Rect,
) {
    let mode_label = if app.is_live() {
        i18n::translate(app.language, Message::Now).to_owned()
    } else if app.offset_minutes == 0 {
        i18n::translate(app.language, Message::Preview).to_owned()
    } else {
        format!(
            "{} {}",
            i18n::translate(app.language, Message::Preview),
            offset_label(app.offset_minutes),
        )
    };

    let text = format!(
        "{}  ·  {} ({})  ·  {mode_label}",
        clock_label(at),
        date_label(at.date()),
        relative_day_label(at.date(), now.date(), app.language),
    );

    let style = if app.is_live() {
        Style::default()
    } else {
        Style::default().fg(Color::Yellow)
    };

    let panel = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Time (←/→ ±15 min)"));
    frame.render_widget(panel, area);
}

fn draw_command_line(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let input = Paragraph::new(app.command_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(
            "Time command (now · +3h · -45m · at 21:00 · on 2025-09-15 22:30, Enter)",
        ))
        .wrap(Wrap { trim: true });
    frame.render_widget(input, area);
}

fn draw_verdicts(frame: &mut Frame<'_>, app: &App, result: &EvaluationResult, area: Rect) {
    let rows = result.entries.iter().map(|entry| {
        let name = Span::styled(
            i18n::category_label(app.language, entry.category),
            Style::default().fg(category_color(entry.category)),
        );
        let badge = Span::styled(
            status_label(app.language, *entry),
            status_style(*entry),
        );
        let hours = hours_label(*entry, result.season);

        Row::new(vec![
            Cell::from(name),
            Cell::from(badge),
            Cell::from(hours),
        ])
    });

    let column_widths = [
        Constraint::Length(24),
        Constraint::Length(20),
        Constraint::Min(16),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Category", "Status", "Hours"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Street bins"))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_details_link(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = format!(
        "{}: {}",
        i18n::translate(app.language, Message::MoreDetails),
        WasteCategory::Organic.details_url(),
    );
    let link = Paragraph::new(text).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(link, area);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let nav_hint =
        "Type a time command · Enter apply · ←/→ step · Tab language · Esc reset · q/Ctrl-C quit";

    let status_text = if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        format!(
            "{nav_hint} · {}",
            i18n::translate(app.language, Message::Legal)
        )
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, area);
}

fn status_label(language: Language, verdict: WasteVerdict) -> &'static str {
    let message = match verdict.mode {
        EvaluationMode::Always => Message::StatusAlways,
        EvaluationMode::CheckRequired => Message::StatusCheck,
        EvaluationMode::Window | EvaluationMode::Curfew => {
            if verdict.allowed {
                Message::StatusAllowed
            } else {
                Message::StatusNotAllowed
            }
        }
    };
    i18n::translate(language, message)
}

fn status_style(verdict: WasteVerdict) -> Style {
    let color = match verdict.mode {
        EvaluationMode::Always => Color::Cyan,
        EvaluationMode::CheckRequired => Color::Yellow,
        EvaluationMode::Window | EvaluationMode::Curfew => {
            if verdict.allowed {
                Color::Green
            } else {
                Color::Red
            }
        }
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn hours_label(verdict: WasteVerdict, season: Season) -> String {
    match verdict.mode {
        EvaluationMode::Window => rules::governing_window(verdict.category, season)
            .map_or_else(String::new, |window| window.to_string()),
        EvaluationMode::Curfew => rules::governing_window(verdict.category, season)
            .map_or_else(String::new, |window| format!("not {window}")),
        EvaluationMode::Always => "24/7".to_owned(),
        EvaluationMode::CheckRequired => verdict.category.details_url().to_owned(),
    }
}

fn category_color(category: WasteCategory) -> Color {
    match category {
        WasteCategory::Organic => Color::Green,
        WasteCategory::OtherHousehold => Color::Gray,
        WasteCategory::Glass => Color::Cyan,
        WasteCategory::Recyclables => Color::Blue,
        WasteCategory::Bulky => Color::Magenta,
    }
}

fn offset_label(minutes: i64) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let total = minutes.unsigned_abs();
    let hours = total / 60;
    let remainder = total % 60;
    if hours == 0 {
        format!("{sign}{remainder}m")
    } else if remainder == 0 {
        format!("{sign}{hours}h")
    } else {
        format!("{sign}{hours}h{remainder}m")
    }
}
