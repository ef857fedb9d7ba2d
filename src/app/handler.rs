//! Key and command handling
//!
//! Everything here works on plain state so it can run without a terminal.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, key_with_modifier_to_action};
use super::state::{AppState, Screen};
use crate::error::LessonError;
use crate::lessons::detective::ValueType;
use crate::progress::curriculum;
use crate::session::Session;

/// Lines moved by a page scroll
const PAGE_LINES: u16 = 10;

/// What the main loop should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Input handling settings taken from the config
#[derive(Debug, Clone, Copy)]
pub struct InputSettings {
    pub vim_mode: bool,
    pub toast_ttl: Duration,
}

/// Route one key press
pub fn handle_key(
    state: &mut AppState,
    session: &mut Session,
    settings: InputSettings,
    key: KeyEvent,
    now: Instant,
) -> Flow {
    if state.command_line.is_input_mode() {
        return handle_command_key(state, session, settings, key.code, now);
    }

    if session.lessons().detective.is_some() {
        return handle_quiz_key(state, session, settings, key, now);
    }

    let Some(action) = key_with_modifier_to_action(key.code, key.modifiers, settings.vim_mode)
    else {
        return Flow::Continue;
    };

    if state.screen == Screen::Help {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Back | Action::Help | Action::Select => state.screen = Screen::Main,
            _ => {}
        }
        return Flow::Continue;
    }

    match action {
        Action::Quit => return Flow::Quit,
        Action::Up => state.scroll_up(),
        Action::Down => state.scroll_down(),
        Action::PageUp => state.scroll_offset = state.scroll_offset.saturating_sub(PAGE_LINES),
        Action::PageDown => state.scroll_offset = state.scroll_offset.saturating_add(PAGE_LINES),
        Action::PrevSection => state.previous_section(),
        Action::NextSection => state.next_section(),
        Action::GotoSection(index) => state.select_section(index),
        Action::FinishSection => session.finish_section(state.section().id),
        Action::ToggleBadges => state.show_badges = !state.show_badges,
        Action::ToggleTheme => state.theme = state.theme.toggled(),
        Action::EnterCommand => state.command_line.enter_command_mode(),
        Action::Help => state.screen = Screen::Help,
        Action::Back => state.toasts.clear(),
        Action::Select => {
            if state.section().id == curriculum::TYPES {
                session.start_quiz(now);
            }
        }
    }
    Flow::Continue
}

fn handle_command_key(
    state: &mut AppState,
    session: &mut Session,
    settings: InputSettings,
    code: KeyCode,
    now: Instant,
) -> Flow {
    let cl = &mut state.command_line;
    match code {
        KeyCode::Esc => cl.exit_command_mode(),
        KeyCode::Enter => {
            let input = cl.submit();
            return execute_input(state, session, settings, &input, now);
        }
        KeyCode::Backspace => {
            if cl.input.is_empty() {
                cl.exit_command_mode();
            } else {
                cl.delete_char();
            }
        }
        KeyCode::Left => cl.move_left(),
        KeyCode::Right => cl.move_right(),
        KeyCode::Up => cl.history_up(),
        KeyCode::Down => cl.history_down(),
        KeyCode::Char(c) => cl.insert_char(c),
        _ => {}
    }
    Flow::Continue
}

fn handle_quiz_key(
    state: &mut AppState,
    session: &mut Session,
    settings: InputSettings,
    key: KeyEvent,
    now: Instant,
) -> Flow {
    let action = key_with_modifier_to_action(key.code, key.modifiers, settings.vim_mode);
    if key.modifiers.contains(KeyModifiers::CONTROL) && action == Some(Action::Quit) {
        return Flow::Quit;
    }

    let finished = session.lessons().detective.as_ref().is_some_and(|g| g.is_finished());
    if finished {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            session.close_quiz();
        }
        return Flow::Continue;
    }

    if let KeyCode::Char(c @ '1'..='4') = key.code {
        let value_type = ValueType::ALL[c as usize - '1' as usize];
        report(state, session.answer_quiz(value_type, now).map(|_| ()), settings, now);
        return Flow::Continue;
    }

    match action {
        Some(Action::Up) => {
            if let Some(game) = session.lessons_mut().detective.as_mut() {
                game.select_previous();
            }
        }
        Some(Action::Down) => {
            if let Some(game) = session.lessons_mut().detective.as_mut() {
                game.select_next();
            }
        }
        Some(Action::Select) => {
            report(state, session.answer_quiz_selected(now).map(|_| ()), settings, now);
        }
        Some(Action::Back) => {
            tracing::info!("type detective abandoned");
            session.close_quiz();
        }
        _ => {}
    }
    Flow::Continue
}

/// Parse and run a typed command line
pub fn execute_input(
    state: &mut AppState,
    session: &mut Session,
    settings: InputSettings,
    input: &str,
    now: Instant,
) -> Flow {
    match parse_command(input) {
        ParseResult::Ok(command) => execute_command(state, session, settings, command, now),
        ParseResult::UnknownCommand(cmd) => {
            tracing::warn!("Unknown command: {}", cmd);
            error(state, settings, format!("Unknown command: {}. Try :help", cmd), now);
            Flow::Continue
        }
        ParseResult::MissingArgument(name) => {
            error(state, settings, format!("Missing argument: {}", name), now);
            Flow::Continue
        }
        ParseResult::Invalid(e) => {
            tracing::warn!("Rejected command {:?}: {}", input, e);
            error(state, settings, e.to_string(), now);
            Flow::Continue
        }
    }
}

/// Run a parsed command
pub fn execute_command(
    state: &mut AppState,
    session: &mut Session,
    settings: InputSettings,
    command: Command,
    now: Instant,
) -> Flow {
    let result = match command {
        Command::Quit => return Flow::Quit,
        Command::Nop => {
            state.toasts.clear();
            Ok(())
        }
        Command::Help => {
            state.screen = Screen::Help;
            Ok(())
        }
        Command::Goto(target) => match curriculum::resolve(&target) {
            Some(index) => {
                state.select_section(index);
                Ok(())
            }
            None => {
                tracing::warn!("Unknown section: {}", target);
                error(state, settings, format!("Unknown section: {}", target), now);
                Ok(())
            }
        },
        Command::Complete => {
            session.finish_section(state.section().id);
            Ok(())
        }
        Command::Badges => {
            state.show_badges = !state.show_badges;
            Ok(())
        }
        Command::Theme => {
            state.theme = state.theme.toggled();
            Ok(())
        }
        Command::Quiz => {
            show_section(state, curriculum::TYPES);
            session.start_quiz(now);
            Ok(())
        }
        Command::Save(kind) => {
            show_section(state, curriculum::STRUCTURES);
            session.save_structure(kind);
            Ok(())
        }
        Command::Push(name, value) => {
            show_section(state, curriculum::VECTORS);
            session.push_value(name, value);
            Ok(())
        }
        Command::Find(name, value) => {
            show_section(state, curriculum::VECTORS);
            session.search_value(name, value);
            Ok(())
        }
        Command::Train(level) => {
            show_section(state, curriculum::VECTORS);
            session.build_train(level, &mut rand::thread_rng())
        }
        Command::Answer(challenge, value) => {
            session.answer_challenge(challenge, value).map(|_| ())
        }
        Command::Run(call) => {
            show_section(state, curriculum::FUNCTIONS);
            session.run_function(&call).map(|output| {
                let text = format!("{}({}) = {}", call.name(), call.arguments(), output);
                state.toasts.push(text, false, now, settings.toast_ttl);
            })
        }
        Command::Exercise(id) => {
            show_section(state, curriculum::EXERCISES);
            session.complete_practice(&id).map(|fresh| {
                if !fresh {
                    state.toasts.push("Already completed", false, now, settings.toast_ttl);
                }
            })
        }
        Command::Finish => {
            session.finish_course();
            Ok(())
        }
    };
    report(state, result, settings, now);
    Flow::Continue
}

fn show_section(state: &mut AppState, section_id: &str) {
    if let Some(index) = curriculum::resolve(section_id) {
        state.select_section(index);
    }
}

fn report(
    state: &mut AppState,
    result: Result<(), LessonError>,
    settings: InputSettings,
    now: Instant,
) {
    if let Err(e) = result {
        if !e.is_input_error() {
            tracing::warn!("{}", e);
        }
        error(state, settings, e.to_string(), now);
    }
}

fn error(state: &mut AppState, settings: InputSettings, text: String, now: Instant) {
    state.toasts.push(text, true, now, settings.toast_ttl);
}

/// Key event without modifiers, for tests and synthetic input
pub fn plain_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::badge;
    use crate::lessons::detective::QUESTIONS;

    fn settings() -> InputSettings {
        InputSettings { vim_mode: true, toast_ttl: Duration::from_secs(5) }
    }

    fn run(state: &mut AppState, session: &mut Session, input: &str) -> Flow {
        execute_input(state, session, settings(), input, Instant::now())
    }

    fn press(state: &mut AppState, session: &mut Session, code: KeyCode) -> Flow {
        handle_key(state, session, settings(), plain_key(code), Instant::now())
    }

    #[test]
    fn typing_a_command_and_pressing_enter_runs_it() {
        let mut state = AppState::default();
        let mut session = Session::new();

        press(&mut state, &mut session, KeyCode::Char(':'));
        for c in "goto vectors".chars() {
            press(&mut state, &mut session, KeyCode::Char(c));
        }
        press(&mut state, &mut session, KeyCode::Enter);

        assert_eq!(state.section().id, curriculum::VECTORS);
        assert!(!state.command_line.is_input_mode());
    }

    #[test]
    fn quit_command_ends_the_loop() {
        let mut state = AppState::default();
        let mut session = Session::new();
        assert_eq!(run(&mut state, &mut session, "q"), Flow::Quit);
    }

    #[test]
    fn finish_key_completes_current_section() {
        let mut state = AppState::default();
        let mut session = Session::new();

        press(&mut state, &mut session, KeyCode::Char('m'));

        assert!(session.progress().is_completed(curriculum::INTRODUCTION));
        assert!(session.game().badge(badge::FIRST_STEPS).is_some_and(|b| b.earned()));
    }

    #[test]
    fn unknown_section_shows_error_toast() {
        let mut state = AppState::default();
        let mut session = Session::new();

        run(&mut state, &mut session, "goto nowhere");

        assert_eq!(state.current_section, 0);
        assert!(state.toasts.latest().is_some_and(|t| t.is_error));
    }

    #[test]
    fn invalid_number_changes_nothing() {
        let mut state = AppState::default();
        let mut session = Session::new();

        run(&mut state, &mut session, "push temps hot");

        assert_eq!(session.lessons().vectors.temperatures.len(), 7);
        assert_eq!(session.game().points(), 0);
        assert!(state.toasts.latest().is_some_and(|t| t.is_error));
    }

    #[test]
    fn save_command_switches_to_structures() {
        let mut state = AppState::default();
        let mut session = Session::new();

        run(&mut state, &mut session, "save car");

        assert_eq!(state.section().id, curriculum::STRUCTURES);
        assert_eq!(session.lessons().structures.saves(), 1);
    }

    #[test]
    fn answer_without_train_is_an_error() {
        let mut state = AppState::default();
        let mut session = Session::new();

        run(&mut state, &mut session, "answer total 100");

        assert!(state.toasts.latest().is_some_and(|t| t.is_error));
    }

    #[test]
    fn run_command_toasts_the_result() {
        let mut state = AppState::default();
        let mut session = Session::new();

        run(&mut state, &mut session, "run add 2 3");

        assert_eq!(state.toasts.latest().map(|t| t.text.as_str()), Some("add(2, 3) = 5"));
        assert_eq!(session.lessons().functions.runs(), 1);
    }

    #[test]
    fn quiz_keys_answer_questions() {
        let mut state = AppState::default();
        let mut session = Session::new();
        run(&mut state, &mut session, "quiz");
        assert_eq!(state.section().id, curriculum::TYPES);

        for question in QUESTIONS.iter() {
            let index = ValueType::ALL.iter().position(|t| *t == question.answer).unwrap_or(0);
            let key = char::from_digit(index as u32 + 1, 10).unwrap_or('1');
            press(&mut state, &mut session, KeyCode::Char(key));
        }

        assert!(session.lessons().detective.as_ref().is_some_and(|g| g.is_finished()));
        assert!(session.game().badge(badge::DETECTIVE).is_some_and(|b| b.earned()));

        press(&mut state, &mut session, KeyCode::Enter);
        assert!(session.lessons().detective.is_none());
    }

    #[test]
    fn digits_do_not_switch_sections_during_quiz() {
        let mut state = AppState::default();
        let mut session = Session::new();
        run(&mut state, &mut session, "quiz");

        press(&mut state, &mut session, KeyCode::Char('5'));
        press(&mut state, &mut session, KeyCode::Esc);

        assert_eq!(state.section().id, curriculum::TYPES);
        assert!(session.lessons().detective.is_none());
        assert_eq!(session.game().points(), 0);
    }

    #[test]
    fn ctrl_c_quits_during_quiz() {
        let mut state = AppState::default();
        let mut session = Session::new();
        run(&mut state, &mut session, "quiz");

        assert_eq!(press(&mut state, &mut session, KeyCode::Char('q')), Flow::Continue);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let flow = handle_key(&mut state, &mut session, settings(), ctrl_c, Instant::now());
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn help_screen_closes_on_escape() {
        let mut state = AppState::default();
        let mut session = Session::new();

        press(&mut state, &mut session, KeyCode::Char('?'));
        assert_eq!(state.screen, Screen::Help);
        press(&mut state, &mut session, KeyCode::Esc);
        assert_eq!(state.screen, Screen::Main);
    }

    #[test]
    fn backspace_on_empty_input_leaves_command_mode() {
        let mut state = AppState::default();
        let mut session = Session::new();

        press(&mut state, &mut session, KeyCode::Char(':'));
        press(&mut state, &mut session, KeyCode::Backspace);

        assert!(!state.command_line.is_input_mode());
    }
}
