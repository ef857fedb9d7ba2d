//! Gamification core: points, levels, badges and notifications

pub mod badge;
pub mod notify;
pub mod stats;
pub mod store;

pub use badge::Badge;
pub use notify::Notification;
pub use stats::PlayerStats;
pub use store::GameStore;
