//! Help overlay listing keys and commands

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("h/l ←/→", "previous / next section"),
    ("1-6", "jump to a section"),
    ("j/k ↑/↓", "scroll the lesson"),
    ("Enter", "start the quiz (Simple Types)"),
    ("m", "finish the current section"),
    ("b", "show / hide badges"),
    ("t", "switch dark / light theme"),
    (":", "command line"),
    ("Esc", "back / close"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":goto <section>", "open a section by number or name"),
    (":complete", "finish the current section"),
    (":quiz", "start the type detective"),
    (":save <person|house|car>", "save a structure"),
    (":push <temps|grades> <n>", "append to a vector"),
    (":find <temps|grades> <n>", "search a vector"),
    (":train <1|2|3>", "build a train"),
    (":answer <total|heaviest|average> <n>", "answer a train question"),
    (":run <add|area|greet|age|bmi> <args..>", "call a function"),
    (":exercise <id>", "complete a practice exercise"),
    (":finish", "finish the course"),
    (":badges  :theme  :help  :q", ""),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(80, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    frame.render_widget(Paragraph::new(help_lines(theme)), inner);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Keys", heading))];
    lines.extend(KEYS.iter().map(|(key, what)| entry(key, what, 10, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Commands", heading)));
    lines.extend(COMMANDS.iter().map(|(cmd, what)| entry(cmd, what, 40, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(theme.fg_muted),
    )));
    lines
}

fn entry(key: &str, what: &str, width: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<width$}", key, width = width), Style::default().fg(theme.info)),
        Span::styled(what.to_string(), Style::default().fg(theme.fg_primary)),
    ])
}
