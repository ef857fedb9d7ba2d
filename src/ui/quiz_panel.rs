//! Type detective overlay

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::lessons::detective::{DetectiveGame, Outcome, QUESTIONS, ValueType};
use crate::theme::Theme;

/// Draw the quiz panel as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, game: &DetectiveGame, now: Instant, theme: &Theme) {
    let overlay_area = centered_rect(60, 70, area);

    // Clear the background area
    frame.render_widget(Clear, overlay_area);

    let title = if game.is_finished() { " Type Detective: Results " } else { " Type Detective " };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = match game.outcome {
        Some(outcome) => result_lines(&outcome, &game.results, theme),
        None => question_lines(game, now, theme),
    };
    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// Current question with the timer and answer options
fn question_lines(game: &DetectiveGame, now: Instant, theme: &Theme) -> Vec<Line<'static>> {
    let Some(question) = game.current() else {
        return Vec::new();
    };

    let seconds_left = game.time_left(now).as_secs();
    let timer_style = if seconds_left <= 5 {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.warning)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} of {}", game.current_index() + 1, QUESTIONS.len()),
                Style::default().fg(theme.fg_muted),
            ),
            Span::raw("    "),
            Span::styled(format!("⏱ {}s", seconds_left), timer_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "What is the type of this value?",
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.value,
            Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Options
    for (i, option) in ValueType::ALL.iter().enumerate() {
        let is_selected = i == game.selected_option;
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = if is_selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        lines.push(Line::from(Span::styled(
            format!("{} {}) {}", prefix, i + 1, option.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[j/k] Select    [1-4/Enter] Answer    [Esc] Give up",
        Style::default().fg(theme.fg_muted),
    )));
    lines
}

/// Score, per-question marks and earned rewards
fn result_lines(outcome: &Outcome, results: &[bool], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    if outcome.timed_out {
        lines.push(Line::from(Span::styled("Time's up!", Style::default().fg(theme.warning))));
    }

    let score_style = if outcome.earns_detective() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        format!("{}/{} correct ({:.0}%)", outcome.correct, outcome.total, outcome.accuracy()),
        score_style,
    )));
    lines.push(Line::from(""));

    // Question results
    let mut marks = Vec::with_capacity(QUESTIONS.len());
    for i in 0..QUESTIONS.len() {
        let (marker, style) = match results.get(i).copied() {
            Some(true) => ("\u{2713}", Style::default().fg(theme.success)), // ✓
            Some(false) => ("\u{2717}", Style::default().fg(theme.error)),  // ✗
            None => ("·", Style::default().fg(theme.fg_muted)),
        };
        marks.push(Span::styled(format!(" {} ", marker), style));
    }
    lines.push(Line::from(marks));
    lines.push(Line::from(""));

    if outcome.is_perfect() {
        lines.push(Line::from(Span::styled(
            "Perfect! 🏆 Master Organizer unlocked",
            Style::default().fg(theme.badge_earned),
        )));
    } else if outcome.earns_detective() {
        lines.push(Line::from(Span::styled(
            "🔍 Type Detective unlocked",
            Style::default().fg(theme.badge_earned),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Score 80% or more to earn the detective badge",
            Style::default().fg(theme.fg_secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Close    :quiz to play again",
        Style::default().fg(theme.fg_muted),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn question_shows_value_and_timer() {
        let start = Instant::now();
        let game = DetectiveGame::start_at(start, Duration::from_secs(30));

        let text = text(&question_lines(&game, start + Duration::from_secs(10), &Theme::default()));
        assert!(text.contains("Question 1 of 10"));
        assert!(text.contains(QUESTIONS[0].value));
        assert!(text.contains("20s"));
        assert!(text.contains("● 1) integer"));
    }

    #[test]
    fn timed_out_results_mark_unanswered_questions() {
        let start = Instant::now();
        let mut game = DetectiveGame::start_at(start, Duration::from_secs(1));
        game.answer(QUESTIONS[0].answer, start);
        game.check_timeout(start + Duration::from_secs(2));

        let outcome = game.outcome.unwrap();
        let text = text(&result_lines(&outcome, &game.results, &Theme::default()));
        assert!(text.contains("Time's up!"));
        assert!(text.contains("1/10 correct"));
        assert_eq!(text.matches('·').count(), 9);
    }

    #[test]
    fn overlay_renders_on_small_terminal() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let game = DetectiveGame::start(Duration::from_secs(30));

        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, &game, Instant::now(), &Theme::default());
            })
            .unwrap();
    }
}
