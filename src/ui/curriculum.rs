//! Section navigation with completion marks and the course progress gauge

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use super::layout::panel;
use crate::progress::{ProgressStore, SECTIONS};
use crate::theme::Theme;

/// Status indicators for sections
const STATUS_NOT_STARTED: &str = "○";
const STATUS_CURRENT: &str = "●";
const STATUS_COMPLETED: &str = "✓";

/// Draw the section list
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    current: usize,
    progress: &ProgressStore,
    theme: &Theme,
) {
    let block = panel(" Course ", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, gauge_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    frame.render_widget(Paragraph::new(section_lines(current, progress, theme)), list_area);

    let percent = progress.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.gauge).bg(theme.bg_tertiary))
        .ratio(percent / 100.0)
        .label(format!("{:.0}%", percent));
    frame.render_widget(gauge, gauge_area);
}

fn section_lines(current: usize, progress: &ProgressStore, theme: &Theme) -> Vec<Line<'static>> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let completed = progress.is_completed(section.id);
            let status = section_status(completed, index == current);

            let style = if index == current {
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD)
            } else if completed {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_secondary)
            };

            Line::from(Span::styled(format!(" {} {}. {}", status, index + 1, section.title), style))
        })
        .collect()
}

/// Completion wins over the current-section marker
fn section_status(completed: bool, is_current: bool) -> &'static str {
    if completed {
        STATUS_COMPLETED
    } else if is_current {
        STATUS_CURRENT
    } else {
        STATUS_NOT_STARTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::curriculum;

    #[test]
    fn completed_sections_get_a_check() {
        let mut progress = ProgressStore::new();
        progress.complete_section(curriculum::TYPES);

        let lines = section_lines(0, &progress, &Theme::default());
        assert_eq!(lines.len(), SECTIONS.len());
        assert!(lines[1].spans[0].content.contains(STATUS_COMPLETED));
        assert!(lines[0].spans[0].content.contains(STATUS_CURRENT));
        assert!(lines[2].spans[0].content.contains(STATUS_NOT_STARTED));
    }

    #[test]
    fn status_prefers_completion() {
        assert_eq!(section_status(true, true), STATUS_COMPLETED);
        assert_eq!(section_status(false, false), STATUS_NOT_STARTED);
    }
}
