//! Lesson panel: the activity of the current section

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use textwrap::{Options, wrap};

use super::layout::panel;
use crate::lessons::detective::{DETECTIVE_THRESHOLD, ValueType};
use crate::lessons::exercises::EXERCISES;
use crate::lessons::functions::{RUNS_FOR_BADGE, RUN_REWARD};
use crate::lessons::structures::{SAVE_REWARD, SAVES_TO_COMPLETE, StructureKind};
use crate::lessons::vectors::{self, DAYS, Train};
use crate::progress::{Section, curriculum};
use crate::session::Session;
use crate::theme::Theme;

/// Call log entries shown in the function machine
const LOG_LINES: usize = 6;

/// Draw the lesson of a section
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    section: &Section,
    session: &Session,
    scroll: u16,
    theme: &Theme,
) {
    let title = format!(" {} ", section.title);
    let block = panel(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width.saturating_sub(1)).max(10);
    let lines = lesson_lines(section, session, theme, width);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Lines for a section, prose wrapped to `width`
pub fn lesson_lines(
    section: &Section,
    session: &Session,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut out = Lines { lines: Vec::new(), width, theme };
    out.heading(section.summary);
    out.blank();

    match section.id {
        curriculum::INTRODUCTION => introduction(&mut out),
        curriculum::TYPES => types(&mut out, session),
        curriculum::STRUCTURES => structures(&mut out, session),
        curriculum::VECTORS => vector_lab(&mut out, session),
        curriculum::FUNCTIONS => functions(&mut out, session),
        curriculum::EXERCISES => exercises(&mut out, session),
        _ => {}
    }

    out.blank();
    if session.progress().is_completed(section.id) {
        out.styled("✓ Section completed", Style::default().fg(theme.success));
    } else {
        out.hint("Press m to finish this section");
    }
    out.lines
}

/// Line builder with the panel's width and theme
struct Lines<'t> {
    lines: Vec<Line<'static>>,
    width: usize,
    theme: &'t Theme,
}

impl Lines<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn heading(&mut self, text: &str) {
        let style = Style::default().fg(self.theme.accent_secondary).add_modifier(Modifier::BOLD);
        self.styled(text, style);
    }

    fn hint(&mut self, text: &str) {
        let style = Style::default().fg(self.theme.fg_muted);
        self.styled(text, style);
    }

    fn prose(&mut self, text: &str) {
        let style = Style::default().fg(self.theme.fg_primary);
        self.styled(text, style);
    }

    fn styled(&mut self, text: &str, style: Style) {
        for row in wrap(text, Options::new(self.width)) {
            self.lines.push(Line::from(Span::styled(row.into_owned(), style)));
        }
    }

    fn code(&mut self, text: &str) {
        let style = Style::default().fg(self.theme.info);
        for row in text.lines() {
            self.lines.push(Line::from(Span::styled(format!("  {}", row), style)));
        }
    }

    fn pair(&mut self, label: &str, value: String) {
        self.lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(self.theme.fg_muted)),
            Span::styled(value, Style::default().fg(self.theme.fg_secondary)),
        ]));
    }
}

fn introduction(out: &mut Lines) {
    out.prose(
        "A data structure is a way of organising information so a program can find and \
         change it easily. You already do this at home: clothes are sorted by kind, books \
         by genre, food by category.",
    );
    out.blank();
    out.prose(
        "Programs work the same way. Simple values such as numbers and text have types, \
         and those values can be grouped into structures, lined up in vectors, and \
         transformed by functions.",
    );
    out.blank();
    out.heading("In this course you will");
    for goal in [
        "• tell the simple types apart",
        "• design structures with named fields",
        "• work with vectors and arrays",
        "• write small functions",
    ] {
        out.prose(goal);
    }
    out.blank();
    out.hint("Every activity earns points; every 100 points is a new level.");
}

fn types(out: &mut Lines, session: &Session) {
    let examples = [
        (ValueType::Integer, "Whole numbers", "age ← 19"),
        (ValueType::Real, "Numbers with a decimal part", "average ← 14.5"),
        (ValueType::Text, "A sequence of characters", "message ← \"Hello!\""),
        (ValueType::Boolean, "True or false only", "present ← true"),
    ];
    for (value_type, description, example) in examples {
        out.pair(value_type.label(), description.to_string());
        out.code(example);
    }
    out.blank();

    out.heading("Type Detective");
    match &session.lessons().detective {
        Some(game) if !game.is_finished() => {
            out.prose(&format!("Quiz in progress: question {}", game.current_index() + 1));
        }
        _ => {
            out.prose(&format!(
                "Name the type of ten values before time runs out. Score at least {:.0}% for \
                 the detective badge, all ten for the organizer badge.",
                DETECTIVE_THRESHOLD
            ));
            out.hint("Press Enter or type :quiz to start");
        }
    }

    let stats = session.game().stats();
    if stats.total_exercises > 0 {
        out.blank();
        out.pair(
            "Answers",
            format!("{}/{} correct", stats.correct_answers, stats.total_exercises),
        );
    }
}

fn structures(out: &mut Lines, session: &Session) {
    out.prose(
        "A structure groups related values under one name. Each field has its own name \
         and type.",
    );
    out.blank();
    for kind in StructureKind::ALL {
        out.code(&kind.declaration());
        out.blank();
    }

    let saves = session.lessons().structures.saves();
    out.pair("Saved", format!("{}/{}", saves.min(SAVES_TO_COMPLETE), SAVES_TO_COMPLETE));
    out.hint(&format!("Save one with :save <person|house|car> (+{} points)", SAVE_REWARD));
}

fn vector_lab(out: &mut Lines, session: &Session) {
    let lab = &session.lessons().vectors;

    out.prose("A vector stores values of one type side by side. Each value has an index.");
    out.blank();

    out.heading("Temperatures");
    for (index, value) in lab.temperatures.iter().enumerate() {
        let day = DAYS.get(index).copied().unwrap_or("extra");
        out.pair(&format!("[{}] {}", index, day), format!("{}°C", value));
    }
    summary(out, &lab.temperatures);
    out.blank();

    out.heading("Grades");
    let grades: Vec<String> = lab.grades.iter().map(|g| g.to_string()).collect();
    out.code(&format!("[{}]", grades.join(", ")));
    summary(out, &lab.grades);

    if let Some((needle, found)) = lab.last_search {
        let result = match found {
            Some(index) => format!("{} found at index {}", needle, index),
            None => format!("{} not found", needle),
        };
        out.pair("Last search", result);
    }
    out.hint("Try :push temps 24 or :find grades 18");
    out.blank();

    out.heading("Train Station");
    match &session.lessons().train {
        Some(train) => train_lines(out, train),
        None => out.hint("Build a train with :train <1|2|3>"),
    }
}

fn summary(out: &mut Lines, values: &[i64]) {
    let (Some(avg), Some(min), Some(max)) =
        (vectors::average(values), vectors::minimum(values), vectors::maximum(values))
    else {
        return;
    };
    out.pair("Stats", format!("avg {:.1}  min {}  max {}", avg, min, max));
}

fn train_lines(out: &mut Lines, train: &Train) {
    out.pair("Level", format!("{} ({} wagons)", train.level, train.wagons.len()));
    let wagons: Vec<String> = train.wagons.iter().map(|w| format!("[{}]", w)).collect();
    out.code(&format!("🚂{}", wagons.join("-")));
    out.hint("Answer with :answer <total|heaviest|average> <n>");
}

fn functions(out: &mut Lines, session: &Session) {
    out.prose(
        "A function takes inputs, does one job, and returns a result. Feed the machine and \
         watch what comes out.",
    );
    out.blank();
    out.code(
        "add(a, b)              a + b\n\
         area(length, width)    length × width\n\
         greet(name, title)     \"Hello title name!\"\n\
         age(birth_year)        years since birth\n\
         bmi(weight, height)    weight / height²",
    );
    out.blank();

    let machine = &session.lessons().functions;
    out.pair("Runs", format!("{}/{}", machine.runs().min(RUNS_FOR_BADGE), RUNS_FOR_BADGE));
    for record in machine.log.iter().rev().take(LOG_LINES) {
        out.code(&format!("{}({}) → {}", record.name, record.input, record.output));
    }
    out.hint(&format!("Call one with :run add 2 3 (+{} points)", RUN_REWARD));
}

fn exercises(out: &mut Lines, session: &Session) {
    let tracker = &session.lessons().exercises;
    let theme = out.theme;

    for exercise in EXERCISES.iter() {
        let (status, style) = if tracker.is_completed(exercise.id) {
            ("✓", Style::default().fg(theme.success))
        } else if tracker.is_unlocked(exercise) {
            ("○", Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD))
        } else {
            ("🔒", Style::default().fg(theme.fg_muted))
        };

        out.styled(
            &format!(
                "{} {} {} {} ({} pts)",
                status,
                exercise.id,
                exercise.stars(),
                exercise.title,
                exercise.points
            ),
            style,
        );
        if tracker.is_unlocked(exercise) && !tracker.is_completed(exercise.id) {
            out.prose(exercise.description);
            out.hint(&format!("Goal: {}", exercise.objective));
            if let Some(hint) = exercise.hints.first() {
                out.hint(&format!("Hint: {}", hint));
            }
        }
        out.blank();
    }
    out.pair("Completed", format!("{}/{}", tracker.completed_count(), EXERCISES.len()));
    out.hint("Mark one done with :exercise <id>, finish the course with :finish");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::vectors::VectorName;
    use crate::progress::SECTIONS;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(section_id: &str, session: &Session) -> String {
        let section = curriculum::find(section_id).unwrap();
        text(&lesson_lines(section, session, &Theme::default(), 1000))
    }

    #[test]
    fn every_section_renders() {
        let session = Session::new();
        for section in SECTIONS.iter() {
            assert!(!render(section.id, &session).is_empty());
        }
    }

    #[test]
    fn prose_is_wrapped_to_width() {
        let session = Session::new();
        let section = curriculum::find(curriculum::INTRODUCTION).unwrap();
        let lines = lesson_lines(section, &session, &Theme::default(), 30);
        for line in &lines {
            let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            assert!(width <= 30, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn vector_lab_shows_pushed_values_and_searches() {
        let mut session = Session::new();
        session.push_value(VectorName::Grades, 19);
        session.search_value(VectorName::Grades, 19);

        let text = render(curriculum::VECTORS, &session);
        assert!(text.contains("[15, 12, 18, 14, 16, 19]"));
        assert!(text.contains("19 found at index 5"));
    }

    #[test]
    fn completed_section_is_marked() {
        let mut session = Session::new();
        session.finish_section(curriculum::STRUCTURES);
        assert!(render(curriculum::STRUCTURES, &session).contains("Section completed"));
    }

    #[test]
    fn locked_exercises_hide_their_description() {
        let session = Session::new();
        let text = render(curriculum::EXERCISES, &session);
        let hard = EXERCISES.iter().find(|e| e.difficulty == 3).unwrap();
        let easy = EXERCISES.iter().find(|e| e.difficulty == 1).unwrap();
        assert!(text.contains(&format!("🔒 {}", hard.id)));
        assert!(!text.contains(hard.description));
        assert!(text.contains(easy.description));
    }
}
