//! Badge panel

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::panel;
use crate::game::Badge;
use crate::theme::Theme;

/// Icon shown for badges not yet earned
const LOCKED_ICON: &str = "🔒";

/// Draw the badge list
pub fn draw(frame: &mut Frame, area: Rect, badges: &[Badge], theme: &Theme) {
    let earned = badges.iter().filter(|b| b.earned()).count();
    let title = format!(" Badges {}/{} ", earned, badges.len());
    let block = panel(&title, false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(badge_lines(badges, theme)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn badge_lines(badges: &[Badge], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(badges.len() * 3);
    for badge in badges {
        let (icon, name_style) = if badge.earned() {
            (badge.icon, Style::default().fg(theme.badge_earned).add_modifier(Modifier::BOLD))
        } else {
            (LOCKED_ICON, Style::default().fg(theme.badge_locked))
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::styled(badge.name, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", badge.description),
            Style::default().fg(theme.fg_muted),
        )));
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStore, badge};

    #[test]
    fn earned_badges_show_their_icon() {
        let mut game = GameStore::new();
        game.earn_badge(badge::DETECTIVE).unwrap();

        let lines = badge_lines(game.badges(), &Theme::default());
        let icons: Vec<String> =
            lines.iter().step_by(3).map(|l| l.spans[0].content.trim().to_string()).collect();

        assert_eq!(icons.iter().filter(|i| *i == LOCKED_ICON).count(), 5);
        assert!(icons.contains(&"🔍".to_string()));
    }
}
