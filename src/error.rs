//! Error types for the game core and lesson activities

use thiserror::Error;

/// Errors raised by the game store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No badge with this id exists in the catalog
    #[error("Unknown badge: {0}")]
    UnknownBadge(String),
}

/// Errors raised by lesson activities
///
/// None of these are fatal: the activity is rejected and no state changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LessonError {
    /// An argument could not be parsed as a number
    #[error("Not a number: {0}")]
    InvalidNumber(String),

    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Height must be strictly positive to compute a BMI
    #[error("Height must be greater than zero")]
    ZeroHeight,

    /// The function machine has no function with this name
    #[error("Unknown function: {0}. Options: add, area, greet, age, bmi")]
    UnknownFunction(String),

    /// No structure kind with this name
    #[error("Unknown structure: {0}. Options: person, house, car")]
    UnknownStructure(String),

    /// No vector with this name in the vector lab
    #[error("Unknown vector: {0}. Options: temps, grades")]
    UnknownVector(String),

    /// No practice exercise with this id
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// The exercise's difficulty tier has not been unlocked yet
    #[error("Exercise {0} is locked. Finish an easier exercise first")]
    LockedExercise(String),

    /// A train challenge was answered before a train was built
    #[error("No train yet. Start one with :train <1|2|3>")]
    NoTrain,

    /// Train level outside 1..=3
    #[error("Train level must be 1, 2 or 3 (got {0})")]
    InvalidTrainLevel(u8),

    /// Unknown train challenge kind
    #[error("Unknown challenge: {0}. Options: total, heaviest, average")]
    UnknownChallenge(String),

    /// The quiz is not running
    #[error("No quiz in progress")]
    QuizNotRunning,
}

impl LessonError {
    /// Whether the user can fix this by retyping the command
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LessonError::InvalidNumber(_)
                | LessonError::MissingArgument(_)
                | LessonError::ZeroHeight
                | LessonError::UnknownFunction(_)
                | LessonError::UnknownStructure(_)
                | LessonError::UnknownVector(_)
                | LessonError::UnknownChallenge(_)
                | LessonError::InvalidTrainLevel(_)
        )
    }
}
