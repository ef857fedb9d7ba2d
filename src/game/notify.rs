//! Transient notifications shown as toasts

use std::collections::VecDeque;

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The player reached a new level
    LevelUp { level: u32 },
    /// A badge was earned for the first time
    BadgeEarned { id: &'static str, name: &'static str, icon: &'static str },
    /// Points were granted for a lesson activity
    PointsAwarded { amount: u32, reason: String },
    /// An exercise was answered correctly
    AnswerCorrect,
    /// An exercise was answered incorrectly
    AnswerIncorrect,
    /// Free-form lesson feedback
    Info(String),
}

impl Notification {
    /// Toast text for this notification
    pub fn message(&self) -> String {
        match self {
            Notification::LevelUp { level } => {
                format!("🎉 Level {} reached! Congratulations!", level)
            }
            Notification::BadgeEarned { name, icon, .. } => {
                format!("🏆 Badge unlocked: {} {}", name, icon)
            }
            Notification::PointsAwarded { amount, reason } => {
                format!("{} +{} points", reason, amount)
            }
            Notification::AnswerCorrect => "Correct! +10 points".to_string(),
            Notification::AnswerIncorrect => "Incorrect!".to_string(),
            Notification::Info(text) => text.clone(),
        }
    }

    /// Whether the toast reports a failure
    pub fn is_negative(&self) -> bool {
        matches!(self, Notification::AnswerIncorrect)
    }
}

/// Bounded fire-and-forget queue; the oldest entry is dropped when full
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    /// Maximum number of undrained notifications
    const CAPACITY: usize = 64;

    /// Queue a notification
    pub fn push(&mut self, notification: Notification) {
        if self.queue.len() >= Self::CAPACITY {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
    }

    /// Take all pending notifications, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Number of pending notifications
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
