//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode, Toasts};
use crate::theme::Theme;

/// Shown when there is nothing else to say
const KEY_HINT: &str = "Press : for commands, ? for help, m to finish a section";

/// Draw the command line at the bottom of the screen
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &CommandLineState,
    toasts: &Toasts,
    theme: &Theme,
) {
    let line = match state.mode {
        CommandMode::Normal => toast_line(toasts, theme),
        CommandMode::Command => {
            let text = format!(":{}", state.input);
            let style = Style::default().fg(theme.accent_primary);
            build_line_with_cursor(&text, state.cursor + 1, style, theme) // +1 for prefix
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(paragraph, area);
}

/// Newest toast, or the key hint
fn toast_line(toasts: &Toasts, theme: &Theme) -> Line<'static> {
    match toasts.latest() {
        Some(toast) => {
            let style = if toast.is_error {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.success)
            };
            Line::from(Span::styled(toast.text.clone(), style))
        }
        None => Line::from(Span::styled(KEY_HINT, Style::default().fg(theme.fg_muted))),
    }
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn build_cursor_at_start() {
        let theme = Theme::default();
        let line = build_line_with_cursor(":save", 0, Style::default(), &theme);
        assert_eq!(line.spans.len(), 2); // cursor + rest
    }

    #[test]
    fn build_cursor_at_end() {
        let theme = Theme::default();
        let line = build_line_with_cursor(":save", 5, Style::default(), &theme);
        assert_eq!(line.spans.len(), 2); // before + cursor (space)
    }

    #[test]
    fn build_cursor_in_middle() {
        let theme = Theme::default();
        let line = build_line_with_cursor(":save", 2, Style::default(), &theme);
        assert_eq!(line.spans.len(), 3); // before + cursor + after
    }

    #[test]
    fn latest_toast_replaces_hint() {
        let theme = Theme::default();
        let mut toasts = Toasts::default();
        assert_eq!(toast_line(&toasts, &theme).spans[0].content, KEY_HINT);

        toasts.push("Badge earned", false, Instant::now(), Duration::from_secs(5));
        assert_eq!(toast_line(&toasts, &theme).spans[0].content, "Badge earned");
    }
}
