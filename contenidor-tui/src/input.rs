use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Parse and apply the command buffer
    SubmitCommand,
    /// Shift the time selector one step forward
    StepForward,
    /// Shift the time selector one step back
    StepBack,
    /// Return to the live clock
    ResetToNow,
    /// Switch to the next interface language
    CycleLanguage,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Enter, Esc, Left, Right, Tab};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    match key.code {
        Char(character) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                app.command_input.push(character);
            }
            Action::None
        }
        Backspace => {
            app.command_input.pop();
            Action::None
        }
        Enter => Action::SubmitCommand,
        Left => Action::StepBack,
        Right => Action::StepForward,
        Tab => Action::CycleLanguage,
        Esc => {
            if app.command_input.is_empty() {
                Action::ResetToNow
            } else {
                app.command_input.clear();
                Action::None
            }
        }
        _ => Action::None,
    }
}
