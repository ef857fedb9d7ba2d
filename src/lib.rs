//! AlgoQuest - a terminal game for learning data types and data structures
//!
//! A session tracks points, levels, badges and finished sections while the
//! player works through short lessons: a timed type quiz, a structure builder,
//! a vector lab with train challenges, a function machine and practice
//! exercises. Nothing is saved between launches.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod lessons;
pub mod progress;
pub mod session;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{GameError, LessonError};
pub use game::{Badge, GameStore, Notification, PlayerStats};
pub use progress::ProgressStore;
pub use session::{Event, Session};
pub use theme::Theme;
