//! Points, level and badge state for one session

use super::badge::{self, BADGE_REWARD, Badge};
use super::notify::{Notification, Notifications};
use super::stats::PlayerStats;
use crate::error::GameError;

/// Points granted for a correctly answered exercise
pub const CORRECT_ANSWER_REWARD: u32 = 10;

/// Owner of the player's stats, the badge catalog and the toast queue
#[derive(Debug, Clone)]
pub struct GameStore {
    stats: PlayerStats,
    badges: Vec<Badge>,
    notifications: Notifications,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// Fresh store: level 1, no points, every badge unearned
    pub fn new() -> Self {
        Self {
            stats: PlayerStats::default(),
            badges: badge::catalog(),
            notifications: Notifications::default(),
        }
    }

    /// Add points and announce a level-up if one happened.
    ///
    /// Adding zero points is a no-op.
    pub fn add_points(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }

        let previous_level = self.stats.level();
        self.stats.points = self.stats.points.saturating_add(amount);
        let level = self.stats.level();

        tracing::debug!(amount, points = self.stats.points, "points added");

        if level > previous_level {
            tracing::info!(level, "level up");
            self.notifications.push(Notification::LevelUp { level });
        }
    }

    /// Earn a badge by id.
    ///
    /// Returns `Ok(true)` when the badge was newly earned, `Ok(false)` when it was
    /// already earned. Only the first call notifies and grants the reward.
    pub fn earn_badge(&mut self, badge_id: &str) -> Result<bool, GameError> {
        let Some(badge) = self.badges.iter_mut().find(|b| b.id == badge_id) else {
            tracing::warn!(badge_id, "tried to earn unknown badge");
            return Err(GameError::UnknownBadge(badge_id.to_string()));
        };

        if !badge.try_earn(badge::now_unix()) {
            return Ok(false);
        }

        let (id, name, icon) = (badge.id, badge.name, badge.icon);
        tracing::info!(badge = id, "badge earned");
        self.notifications.push(Notification::BadgeEarned { id, name, icon });
        self.add_points(BADGE_REWARD);
        Ok(true)
    }

    /// Record an answered exercise
    pub fn complete_exercise(&mut self, correct: bool) {
        self.stats.total_exercises += 1;

        if correct {
            self.stats.correct_answers += 1;
            self.notifications.push(Notification::AnswerCorrect);
            self.add_points(CORRECT_ANSWER_REWARD);
        } else {
            self.notifications.push(Notification::AnswerIncorrect);
        }
    }

    /// Queue a lesson message for the UI
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Take all pending notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Current counters
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Current points
    pub fn points(&self) -> u32 {
        self.stats.points
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.stats.level()
    }

    /// The full badge catalog in display order
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Look up a badge by id
    pub fn badge(&self, badge_id: &str) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == badge_id)
    }

    /// How many badges have been earned
    pub fn earned_count(&self) -> usize {
        self.badges.iter().filter(|b| b.earned()).count()
    }
}
