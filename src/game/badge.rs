//! Badge catalog

use std::time::SystemTime;

/// Badge ids, as used by sections and lessons
pub const FIRST_STEPS: &str = "first-steps";
pub const ORGANIZER: &str = "organizer";
pub const DETECTIVE: &str = "detective";
pub const ARCHITECT: &str = "architect";
pub const TRAIN_MASTER: &str = "train-master";
pub const FUNCTION_ENGINEER: &str = "function-engineer";

/// Points granted the first time any badge is earned
pub const BADGE_REWARD: u32 = 50;

/// An achievement that can be earned once per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// What the player has to do
    pub description: &'static str,
    /// Emoji shown next to the name
    pub icon: &'static str,
    earned: bool,
    earned_at: Option<i64>,
}

impl Badge {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
    ) -> Self {
        Self { id, name, description, icon, earned: false, earned_at: None }
    }

    /// Whether the badge has been earned
    pub fn earned(&self) -> bool {
        self.earned
    }

    /// Unix timestamp (seconds) of the moment the badge was earned
    pub fn earned_at(&self) -> Option<i64> {
        self.earned_at
    }

    /// Mark the badge as earned if it is not already.
    ///
    /// Check and set happen on the same value; returns true only for the call that
    /// performed the transition.
    pub(crate) fn try_earn(&mut self, now: i64) -> bool {
        if self.earned {
            return false;
        }
        self.earned = true;
        self.earned_at = Some(now);
        true
    }
}

/// The six badges every session starts with, all unearned
pub fn catalog() -> Vec<Badge> {
    vec![
        Badge::new(FIRST_STEPS, "First Steps", "Finish the introduction section", "🚀"),
        Badge::new(ORGANIZER, "Master Organizer", "Sort 10 data types correctly", "🏆"),
        Badge::new(
            DETECTIVE,
            "Type Detective",
            "Identify data types with at least 80% accuracy",
            "🔍",
        ),
        Badge::new(ARCHITECT, "Data Architect", "Build your first data structure", "🏗️"),
        Badge::new(TRAIN_MASTER, "Station Master", "Master vectors and arrays", "🚂"),
        Badge::new(FUNCTION_ENGINEER, "Function Engineer", "Run 5 functions", "⚙️"),
    ]
}

/// Current time as Unix seconds
pub(crate) fn now_unix() -> i64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).map_or(0, |d| d.as_secs() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_six_unearned_badges() {
        let badges = catalog();
        assert_eq!(badges.len(), 6);
        assert!(badges.iter().all(|b| !b.earned() && b.earned_at().is_none()));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn try_earn_transitions_once() {
        let mut badge = catalog().remove(0);
        assert!(badge.try_earn(10));
        assert!(!badge.try_earn(20));
        assert_eq!(badge.earned_at(), Some(10));
    }
}
