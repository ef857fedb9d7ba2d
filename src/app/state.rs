//! Application state definitions

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::game::Notification;
use crate::progress::{SECTIONS, Section};
use crate::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Showing toasts or the key hint
    #[default]
    Normal,
    /// Accepting a : command
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    pub input: String,
    /// Cursor position, in characters
    pub cursor: usize,
    pub history: Vec<String>,
    history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 200;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Leave command mode, discarding the input
    pub fn exit_command_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    /// Take the typed command, recording it in history
    pub fn submit(&mut self) -> String {
        let cmd = std::mem::take(&mut self.input);
        self.exit_command_mode();
        if !cmd.trim().is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd.clone());
        }
        cmd
    }

    /// Whether a command is being typed
    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.input.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.input.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    /// Recall the previous command
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
        self.cursor = self.input.chars().count();
    }

    /// Recall the next command, or clear the input past the newest
    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else { return };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input = self.history[i + 1].clone();
        } else {
            self.history_index = None;
            self.input.clear();
        }
        self.cursor = self.input.chars().count();
    }
}

/// A transient message in the command line area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

/// Toasts waiting to be shown, oldest first
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    /// Most toasts shown at once
    const MAX_VISIBLE: usize = 3;

    /// Show a notification from the session
    pub fn push_notification(&mut self, notification: &Notification, now: Instant, ttl: Duration) {
        self.push(notification.message(), notification.is_negative(), now, ttl);
    }

    /// Show a message
    pub fn push(&mut self, text: impl Into<String>, is_error: bool, now: Instant, ttl: Duration) {
        if self.queue.len() >= Self::MAX_VISIBLE {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast { text: text.into(), is_error, expires_at: now + ttl });
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: Instant) {
        self.queue.retain(|t| t.expires_at > now);
    }

    /// Toasts currently visible, newest last
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Newest toast
    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Full application state (everything except the game session)
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    /// Index into the section list
    pub current_section: usize,
    /// Show the badge panel on the right
    pub show_badges: bool,
    /// Scroll offset of the lesson panel
    pub scroll_offset: u16,
    pub command_line: CommandLineState,
    pub toasts: Toasts,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            current_section: 0,
            show_badges: true,
            scroll_offset: 0,
            command_line: CommandLineState::default(),
            toasts: Toasts::default(),
            theme: Theme::default(),
        }
    }
}

impl AppState {
    /// The section being displayed
    pub fn section(&self) -> &'static Section {
        &SECTIONS[self.current_section.min(SECTIONS.len() - 1)]
    }

    /// Jump to a section by index (ignored when out of range)
    pub fn select_section(&mut self, index: usize) {
        if index < SECTIONS.len() && index != self.current_section {
            self.current_section = index;
            self.scroll_offset = 0;
        }
    }

    pub fn next_section(&mut self) {
        self.select_section((self.current_section + 1) % SECTIONS.len());
    }

    pub fn previous_section(&mut self) {
        self.select_section((self.current_section + SECTIONS.len() - 1) % SECTIONS.len());
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
