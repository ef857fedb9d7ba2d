//! Key bindings

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    PrevSection,
    NextSection,
    /// Jump to a section by index (0-based)
    GotoSection(usize),
    PageUp,
    PageDown,

    // Selection
    Select,
    Back,

    // Panels
    ToggleBadges,
    ToggleTheme,

    // Progress
    FinishSection,

    // Modes
    EnterCommand,
    Help,
    Quit,
}

/// Map a key without modifiers to an action.
///
/// With `vim_mode` off only the arrow keys move around.
pub fn key_to_action(key: KeyCode, vim_mode: bool) -> Option<Action> {
    if vim_mode {
        match key {
            KeyCode::Char('j') => return Some(Action::Down),
            KeyCode::Char('k') => return Some(Action::Up),
            KeyCode::Char('h') => return Some(Action::PrevSection),
            KeyCode::Char('l') => return Some(Action::NextSection),
            _ => {}
        }
    }

    match key {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Left => Some(Action::PrevSection),
        KeyCode::Right | KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Char(c @ '1'..='6') => Some(Action::GotoSection(c as usize - '1' as usize)),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('m') => Some(Action::FinishSection),
        KeyCode::Char('b') => Some(Action::ToggleBadges),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char(':') => Some(Action::EnterCommand),
        KeyCode::Char('?') => Some(Action::Help),
        // 'q' is not mapped: quit with :q
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(
    key: KeyCode,
    modifiers: KeyModifiers,
    vim_mode: bool,
) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        }
    } else {
        key_to_action(key, vim_mode)
    }
}
