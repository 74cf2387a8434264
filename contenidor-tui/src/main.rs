//! Terminal UI that tells a Xàbia resident which waste categories may go to
//! the communal street bins at a chosen point in time.

mod app;
mod input;
mod ui;

use std::{io, time::Duration as StdDuration};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, STEP_MINUTES};
use crate::input::Action;

fn main() -> Result<()> {
    // App state
    let app = App::new();

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        let now = Local::now().naive_local();

        // Draw current UI; the short poll timeout below keeps the clock ticking
        terminal.draw(|frame| ui::draw(frame, &app, now))?;

        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::SubmitCommand => app.submit_command(now),
                Action::StepForward => app.step(STEP_MINUTES),
                Action::StepBack => app.step(-STEP_MINUTES),
                Action::ResetToNow => app.reset_to_now(),
                Action::CycleLanguage => app.language = app.language.cycle(),
            }
        }
    }

    Ok(())
}
