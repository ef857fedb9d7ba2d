//! Lesson activities behind each course section
//!
//! These modules hold pure lesson logic. They never touch the game or progress
//! stores directly; [`crate::session::Session`] turns their results into events.

pub mod detective;
pub mod exercises;
pub mod functions;
pub mod structures;
pub mod vectors;

use detective::DetectiveGame;
use exercises::ExerciseTracker;
use functions::FunctionMachine;
use structures::StructureBuilder;
use vectors::{Train, VectorLab};

/// Per-session state of every lesson
#[derive(Debug, Clone, Default)]
pub struct Lessons {
    /// Running or just-finished type detective quiz
    pub detective: Option<DetectiveGame>,
    pub structures: StructureBuilder,
    pub vectors: VectorLab,
    pub train: Option<Train>,
    pub functions: FunctionMachine,
    pub exercises: ExerciseTracker,
}
