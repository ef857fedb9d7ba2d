//! Player statistics and level derivation

/// Points needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 100;

/// Level reached with the given number of points
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// Counters for the current player
///
/// The level is never stored; it is derived from `points` on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Accumulated points (never decreases)
    pub points: u32,
    /// Number of answered exercises
    pub total_exercises: u32,
    /// Number of exercises answered correctly (at most `total_exercises`)
    pub correct_answers: u32,
}

impl PlayerStats {
    /// Current level
    pub fn level(&self) -> u32 {
        level_for_points(self.points)
    }

    /// Points already earned inside the current level
    pub fn points_into_level(&self) -> u32 {
        self.points % POINTS_PER_LEVEL
    }

    /// Percentage of exercises answered correctly (0 when nothing was answered)
    pub fn accuracy(&self) -> f64 {
        if self.total_exercises == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) * 100.0 / f64::from(self.total_exercises)
        }
    }
}
