//! Type detective: a timed quiz on the type of literal values

use std::time::{Duration, Instant};

/// Accuracy (percent) needed for the detective badge
pub const DETECTIVE_THRESHOLD: f64 = 80.0;

/// Bonus for a perfect run, on top of the organizer badge reward
pub const PERFECT_BONUS: u32 = 50;

/// Default time limit for one run
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// The four simple types taught in the course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Real,
    Text,
    Boolean,
}

impl ValueType {
    /// Answer options, in display order
    pub const ALL: [ValueType; 4] =
        [ValueType::Integer, ValueType::Real, ValueType::Text, ValueType::Boolean];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Real => "real",
            ValueType::Text => "string",
            ValueType::Boolean => "boolean",
        }
    }
}

/// Infer the type of a literal as written in pseudo-code
pub fn classify(literal: &str) -> Option<ValueType> {
    let literal = literal.trim();

    if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
        Some(ValueType::Text)
    } else if literal == "true" || literal == "false" {
        Some(ValueType::Boolean)
    } else if literal.parse::<i64>().is_ok() {
        Some(ValueType::Integer)
    } else if literal.contains('.') && literal.parse::<f64>().is_ok() {
        Some(ValueType::Real)
    } else {
        None
    }
}

/// A literal and its expected type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub value: &'static str,
    pub answer: ValueType,
}

/// The literals asked in every run
pub const QUESTIONS: [Question; 10] = [
    Question { value: "123", answer: ValueType::Integer },
    Question { value: "\"Hello\"", answer: ValueType::Text },
    Question { value: "45.6", answer: ValueType::Real },
    Question { value: "true", answer: ValueType::Boolean },
    Question { value: "0", answer: ValueType::Integer },
    Question { value: "\"2024\"", answer: ValueType::Text },
    Question { value: "false", answer: ValueType::Boolean },
    Question { value: "-3.14", answer: ValueType::Real },
    Question { value: "\"Test\"", answer: ValueType::Text },
    Question { value: "999", answer: ValueType::Integer },
];

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub correct: usize,
    pub total: usize,
    /// Whether the run ended because time ran out
    pub timed_out: bool,
}

impl Outcome {
    /// Percentage of all questions answered correctly (unanswered count as wrong)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.correct as f64 * 100.0 / self.total as f64 }
    }

    /// Whether the detective badge is earned
    pub fn earns_detective(&self) -> bool {
        self.accuracy() >= DETECTIVE_THRESHOLD
    }

    /// Whether every question was answered correctly
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// State of one quiz run
#[derive(Debug, Clone)]
pub struct DetectiveGame {
    started_at: Instant,
    time_limit: Duration,
    /// Whether the answer to each asked question was correct
    pub results: Vec<bool>,
    /// Highlighted answer option
    pub selected_option: usize,
    /// Set once the run is over
    pub outcome: Option<Outcome>,
}

impl DetectiveGame {
    /// Start a run now
    pub fn start(time_limit: Duration) -> Self {
        Self::start_at(Instant::now(), time_limit)
    }

    /// Start a run at a given instant
    pub fn start_at(started_at: Instant, time_limit: Duration) -> Self {
        Self { started_at, time_limit, results: Vec::new(), selected_option: 0, outcome: None }
    }

    /// Question currently asked, if the run is still going
    pub fn current(&self) -> Option<&'static Question> {
        if self.outcome.is_some() {
            return None;
        }
        QUESTIONS.get(self.results.len())
    }

    /// 0-based number of the current question
    pub fn current_index(&self) -> usize {
        self.results.len()
    }

    /// Whether the run is over
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Time left at `now`
    pub fn time_left(&self, now: Instant) -> Duration {
        self.time_limit.saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Answer the current question at `now`; returns whether it was correct.
    ///
    /// Returns `None` when the run is already over, including when the time limit
    /// passed before `now`.
    pub fn answer(&mut self, value_type: ValueType, now: Instant) -> Option<bool> {
        self.check_timeout(now);
        let question = self.current()?;
        let correct = question.answer == value_type;
        self.results.push(correct);
        self.selected_option = 0;

        if self.results.len() == QUESTIONS.len() {
            self.finish(false);
        }
        Some(correct)
    }

    /// Answer with the highlighted option
    pub fn answer_selected(&mut self, now: Instant) -> Option<bool> {
        let value_type = ValueType::ALL.get(self.selected_option).copied()?;
        self.answer(value_type, now)
    }

    /// End the run if the time limit passed; returns true if this call ended it
    pub fn check_timeout(&mut self, now: Instant) -> bool {
        if self.outcome.is_none() && self.time_left(now).is_zero() {
            self.finish(true);
            return true;
        }
        false
    }

    /// Move the highlighted option down
    pub fn select_next(&mut self) {
        self.selected_option = (self.selected_option + 1) % ValueType::ALL.len();
    }

    /// Move the highlighted option up
    pub fn select_previous(&mut self) {
        self.selected_option =
            (self.selected_option + ValueType::ALL.len() - 1) % ValueType::ALL.len();
    }

    fn finish(&mut self, timed_out: bool) {
        let correct = self.results.iter().filter(|r| **r).count();
        self.outcome = Some(Outcome { correct, total: QUESTIONS.len(), timed_out });
    }
}
