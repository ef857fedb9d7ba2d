//! Application state and event handling

pub mod command;
pub mod handler;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::session::Session;
use crate::ui;
use handler::{Flow, InputSettings};
use state::AppState;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current UI state
    state: AppState,

    /// Game, progress and lesson state for this launch
    session: Session,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal().context("Failed to set up terminal")?;
        let state = AppState { theme: config.active_theme(), ..Default::default() };
        let session = Session::with_quiz_time_limit(config.quiz_time_limit());

        Ok(Self { config, state, session, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let settings = InputSettings {
            vim_mode: self.config.vim_mode,
            toast_ttl: self.config.toast_duration(),
        };
        tracing::info!("session started");

        loop {
            let now = Instant::now();
            self.session.tick(now);
            for notification in self.session.drain_notifications() {
                self.state.toasts.push_notification(&notification, now, settings.toast_ttl);
            }
            self.state.toasts.prune(now);

            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.session, now);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let flow = handler::handle_key(
                            &mut self.state,
                            &mut self.session,
                            settings,
                            key,
                            Instant::now(),
                        );
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                }
            }
        }

        let stats = self.session.game().stats();
        let completed: Vec<&str> = self.session.progress().completed_sections().collect();
        tracing::info!(
            points = stats.points,
            level = stats.level(),
            badges = self.session.game().earned_count(),
            ?completed,
            "session ended"
        );

        if self.config.remember_theme(&self.state.theme) {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save theme choice: {:#}", e);
            }
        }

        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
