//! UI rendering components

pub mod badges;
pub mod command_line;
pub mod curriculum;
pub mod header;
pub mod help;
pub mod layout;
pub mod lesson;
pub mod main_screen;
pub mod quiz_panel;

use std::time::Instant;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::session::Session;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, session: &Session, now: Instant) {
    let area = frame.area();
    main_screen::draw(frame, state, session);

    if let Some(game) = &session.lessons().detective {
        quiz_panel::draw(frame, area, game, now, &state.theme);
    } else if state.screen == Screen::Help {
        help::draw(frame, area, &state.theme);
    }
}
