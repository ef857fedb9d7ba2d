//! Main screen: header, navigation, lesson and badge panels, command line

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{badges, command_line, curriculum, header, lesson};
use crate::app::state::AppState;
use crate::session::Session;

/// Minimum width for the navigation panel
const CURRICULUM_MIN_WIDTH: u16 = 24;

/// Minimum width for the badge panel
const BADGES_MIN_WIDTH: u16 = 28;

/// Draw the main screen
pub fn draw(frame: &mut Frame, state: &AppState, session: &Session) {
    let theme = &state.theme;
    let area = frame.area();

    let [header_area, main_area, command_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header::draw(frame, header_area, session.game(), theme);

    let chunks = create_layout(main_area, state.show_badges);
    curriculum::draw(frame, chunks[0], state.current_section, session.progress(), theme);
    lesson::draw(frame, chunks[1], state.section(), session, state.scroll_offset, theme);
    if let Some(badge_area) = chunks.get(2) {
        badges::draw(frame, *badge_area, session.game().badges(), theme);
    }

    command_line::draw(frame, command_area, &state.command_line, &state.toasts, theme);
}

/// Split the main area into navigation, lesson and (optionally) badges
fn create_layout(area: Rect, show_badges: bool) -> Vec<Rect> {
    let mut constraints = Vec::with_capacity(3);

    // Navigation (left): 20% width
    constraints.push(Constraint::Length((area.width / 5).max(CURRICULUM_MIN_WIDTH)));

    // Lesson (center): flexible
    constraints.push(Constraint::Min(30));

    // Badges (right): 25% width
    if show_badges {
        constraints.push(Constraint::Length((area.width / 4).max(BADGES_MIN_WIDTH)));
    }

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn layout_with_badges() {
        let chunks = create_layout(Rect::new(0, 0, 120, 40), true);
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn layout_without_badges() {
        let chunks = create_layout(Rect::new(0, 0, 120, 40), false);
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn renders_level_and_sections() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let state = AppState::default();
        let session = Session::new();

        terminal.draw(|frame| draw(frame, &state, &session)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Level 1"));
        assert!(screen.contains("Introduction"));
        assert!(screen.contains("Badges 0/6"));
    }
}
