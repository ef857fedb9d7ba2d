//! One play session: the game and progress stores plus lesson state
//!
//! The UI owns a single [`Session`] and funnels every interaction through it.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::{GameError, LessonError};
use crate::game::{GameStore, Notification, badge};
use crate::lessons::Lessons;
use crate::lessons::detective::{self, DetectiveGame, Outcome, ValueType};
use crate::lessons::functions::{self, FunctionCall};
use crate::lessons::structures::{self, StructureKind};
use crate::lessons::vectors::{self, Challenge, Train, VectorName};
use crate::progress::{ProgressStore, curriculum};

/// Discrete events the presentation layer sends into the stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SectionCompleted(String),
    BadgeEarned(String),
    PointsAwarded(u32),
    ExerciseCompleted { correct: bool },
}

/// All state for one launch of the application
#[derive(Debug, Clone)]
pub struct Session {
    game: GameStore,
    progress: ProgressStore,
    lessons: Lessons,
    quiz_time_limit: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session with the default quiz time limit
    pub fn new() -> Self {
        Self::with_quiz_time_limit(detective::DEFAULT_TIME_LIMIT)
    }

    /// Fresh session with a custom quiz time limit
    pub fn with_quiz_time_limit(quiz_time_limit: Duration) -> Self {
        Self {
            game: GameStore::new(),
            progress: ProgressStore::new(),
            lessons: Lessons::default(),
            quiz_time_limit,
        }
    }

    /// Apply one event to the stores.
    ///
    /// Unknown badge ids are logged by the store and reported back; nothing else
    /// can fail.
    pub fn dispatch(&mut self, event: Event) -> Result<(), GameError> {
        tracing::debug!(?event, "dispatch");
        match event {
            Event::SectionCompleted(id) => {
                self.progress.complete_section(&id);
            }
            Event::BadgeEarned(id) => {
                self.game.earn_badge(&id)?;
            }
            Event::PointsAwarded(amount) => self.game.add_points(amount),
            Event::ExerciseCompleted { correct } => self.game.complete_exercise(correct),
        }
        Ok(())
    }

    /// Dispatch an event that cannot fail for known ids
    fn apply(&mut self, event: Event) {
        if let Err(e) = self.dispatch(event) {
            tracing::error!("Event rejected: {}", e);
        }
    }

    /// Award points and tell the player why
    fn reward(&mut self, amount: u32, reason: impl Into<String>) {
        self.apply(Event::PointsAwarded(amount));
        self.game.notify(Notification::PointsAwarded { amount, reason: reason.into() });
    }

    /// Finish a section from the navigation: mark it complete and earn its badge
    pub fn finish_section(&mut self, section_id: &str) {
        self.apply(Event::SectionCompleted(section_id.to_string()));
        if let Some(badge_id) = curriculum::find(section_id).and_then(|s| s.completion_badge) {
            self.apply(Event::BadgeEarned(badge_id.to_string()));
        }
    }

    /// Start a new type detective run, replacing any previous one
    pub fn start_quiz(&mut self, now: Instant) {
        tracing::info!("type detective started");
        self.lessons.detective = Some(DetectiveGame::start_at(now, self.quiz_time_limit));
    }

    /// Answer the current quiz question at `now`
    pub fn answer_quiz(
        &mut self,
        value_type: ValueType,
        now: Instant,
    ) -> Result<bool, LessonError> {
        self.answer_quiz_with(now, |game| game.answer(value_type, now))
    }

    /// Answer with the highlighted option
    pub fn answer_quiz_selected(&mut self, now: Instant) -> Result<bool, LessonError> {
        self.answer_quiz_with(now, |game| game.answer_selected(now))
    }

    fn answer_quiz_with(
        &mut self,
        now: Instant,
        answer: impl FnOnce(&mut DetectiveGame) -> Option<bool>,
    ) -> Result<bool, LessonError> {
        // A run whose time ran out since the last tick is settled, not answered
        self.tick(now);

        let game = self.lessons.detective.as_mut().ok_or(LessonError::QuizNotRunning)?;
        let correct = answer(game).ok_or(LessonError::QuizNotRunning)?;
        let outcome = game.outcome;

        self.apply(Event::ExerciseCompleted { correct });
        if let Some(outcome) = outcome {
            self.settle_quiz(outcome);
        }
        Ok(correct)
    }

    /// End the quiz if its time ran out
    pub fn tick(&mut self, now: Instant) {
        let Some(game) = self.lessons.detective.as_mut() else { return };
        if game.check_timeout(now) {
            if let Some(outcome) = game.outcome {
                tracing::info!("type detective timed out");
                self.settle_quiz(outcome);
            }
        }
    }

    /// Close the quiz; an unfinished run is abandoned without rewards
    pub fn close_quiz(&mut self) {
        self.lessons.detective = None;
    }

    fn settle_quiz(&mut self, outcome: Outcome) {
        tracing::info!(correct = outcome.correct, total = outcome.total, "type detective finished");

        if outcome.earns_detective() {
            self.apply(Event::BadgeEarned(badge::DETECTIVE.to_string()));
        }
        if outcome.is_perfect() {
            self.apply(Event::BadgeEarned(badge::ORGANIZER.to_string()));
            self.reward(detective::PERFECT_BONUS, "Perfect run!");
        }
        self.apply(Event::SectionCompleted(curriculum::TYPES.to_string()));
    }

    /// Save a structure in the structure builder
    pub fn save_structure(&mut self, kind: StructureKind) {
        let result = self.lessons.structures.save(kind);
        self.reward(structures::SAVE_REWARD, format!("Structure {} saved!", kind.type_name()));

        if result.first {
            self.apply(Event::BadgeEarned(badge::ARCHITECT.to_string()));
        }
        if result.completes_section {
            self.apply(Event::SectionCompleted(curriculum::STRUCTURES.to_string()));
        }
    }

    /// Append a value to one of the lab vectors
    pub fn push_value(&mut self, name: VectorName, value: i64) {
        self.lessons.vectors.push(name, value);
        self.reward(vectors::PUSH_REWARD, "Element added!");
    }

    /// Search one of the lab vectors
    pub fn search_value(&mut self, name: VectorName, needle: i64) -> Option<usize> {
        let index = self.lessons.vectors.search(name, needle);
        let message = match index {
            Some(i) => format!("Value found at index {}!", i),
            None => "Value not found".to_string(),
        };
        self.game.notify(Notification::Info(message));
        index
    }

    /// Build a new random train
    pub fn build_train(&mut self, level: u8, rng: &mut impl Rng) -> Result<(), LessonError> {
        let train = Train::random(level, rng)?;
        tracing::debug!(level, wagons = train.wagons.len(), "train built");
        self.lessons.train = Some(train);
        Ok(())
    }

    /// Answer a question about the current train
    pub fn answer_challenge(
        &mut self,
        challenge: Challenge,
        answer: u64,
    ) -> Result<bool, LessonError> {
        let train = self.lessons.train.as_ref().ok_or(LessonError::NoTrain)?;
        let correct = train.check(challenge, answer);
        let level = train.level;

        if correct {
            self.reward(vectors::CHALLENGE_REWARD, "Challenge solved!");
            if level == 1 {
                self.apply(Event::BadgeEarned(badge::TRAIN_MASTER.to_string()));
            }
        } else {
            self.game.notify(Notification::Info("Not quite, count again".to_string()));
        }
        Ok(correct)
    }

    /// Run a function in the function machine
    pub fn run_function(&mut self, call: &FunctionCall) -> Result<String, LessonError> {
        let (output, result) = self.lessons.functions.run(call)?;
        self.reward(functions::RUN_REWARD, format!("Function {} ran!", call.name()));

        if result.earns_badge {
            self.apply(Event::BadgeEarned(badge::FUNCTION_ENGINEER.to_string()));
            self.apply(Event::SectionCompleted(curriculum::FUNCTIONS.to_string()));
        }
        Ok(output)
    }

    /// Complete a practice exercise; returns false if it was already done
    pub fn complete_practice(&mut self, exercise_id: &str) -> Result<bool, LessonError> {
        let Some(exercise) = self.lessons.exercises.complete(exercise_id)? else {
            return Ok(false);
        };
        self.reward(exercise.points, format!("{} done!", exercise.title));
        self.apply(Event::BadgeEarned(exercise.badge.to_string()));
        Ok(true)
    }

    /// Finish the whole course
    pub fn finish_course(&mut self) {
        self.apply(Event::SectionCompleted(curriculum::EXERCISES.to_string()));
    }

    /// The game store
    pub fn game(&self) -> &GameStore {
        &self.game
    }

    /// The progress store
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// Lesson state
    pub fn lessons(&self) -> &Lessons {
        &self.lessons
    }

    /// Mutable lesson state, for UI-only changes such as option highlighting
    pub fn lessons_mut(&mut self) -> &mut Lessons {
        &mut self.lessons
    }

    /// Take all pending notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.game.drain_notifications()
    }
}
