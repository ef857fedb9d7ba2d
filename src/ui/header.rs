//! Header bar: title, level, points and badge count

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use crate::game::{GameStore, stats::POINTS_PER_LEVEL};
use crate::theme::Theme;

/// Height of the header in lines
pub const HEADER_HEIGHT: u16 = 1;

/// Width of the level gauge
const GAUGE_WIDTH: u16 = 20;

/// Draw the header
pub fn draw(frame: &mut Frame, area: Rect, game: &GameStore, theme: &Theme) {
    let [info_area, gauge_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(GAUGE_WIDTH)]).areas(area);

    frame.render_widget(
        Paragraph::new(summary_line(game, theme)).style(Style::default().bg(theme.bg_secondary)),
        info_area,
    );

    let into_level = game.stats().points_into_level();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.level).bg(theme.bg_tertiary))
        .ratio(f64::from(into_level) / f64::from(POINTS_PER_LEVEL))
        .label(format!("{}/{}", into_level, POINTS_PER_LEVEL));
    frame.render_widget(gauge, gauge_area);
}

fn summary_line(game: &GameStore, theme: &Theme) -> Line<'static> {
    let stats = game.stats();
    let sep = Span::styled("  │  ", Style::default().fg(theme.fg_muted));

    Line::from(vec![
        Span::styled(
            " AlgoQuest ",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(
            format!("Level {}", stats.level()),
            Style::default().fg(theme.level).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(format!("{} pts", stats.points), Style::default().fg(theme.points)),
        sep.clone(),
        Span::styled(
            format!("{}/{} badges", game.earned_count(), game.badges().len()),
            Style::default().fg(theme.badge_earned),
        ),
        sep,
        Span::styled(
            format!("{:.0}% accuracy", stats.accuracy()),
            Style::default().fg(theme.fg_secondary),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn summary_shows_level_and_points() {
        let mut game = GameStore::new();
        game.add_points(130);

        let line = summary_line(&game, &Theme::default());
        let text = text(&line);
        assert!(text.contains("Level 2"));
        assert!(text.contains("130 pts"));
        assert!(text.contains("0/6 badges"));
    }
}
