//! Command parsing for the command line

use crate::error::LessonError;
use crate::lessons::functions::FunctionCall;
use crate::lessons::structures::StructureKind;
use crate::lessons::vectors::{Challenge, VectorName};

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Go to a section by number, id or title: :goto <section>
    Goto(String),
    /// Finish the current section: :complete
    Complete,
    /// Toggle the badge panel: :badges
    Badges,
    /// Toggle dark/light theme: :theme
    Theme,
    /// Start the type detective: :quiz
    Quiz,
    /// Save a structure: :save <person|house|car>
    Save(StructureKind),
    /// Append to a lab vector: :push <temps|grades> <n>
    Push(VectorName, i64),
    /// Search a lab vector: :find <temps|grades> <n>
    Find(VectorName, i64),
    /// Build a train: :train <1|2|3>
    Train(u8),
    /// Answer a train challenge: :answer <total|heaviest|average> <n>
    Answer(Challenge, u64),
    /// Call a function in the function machine: :run <name> <args..>
    Run(FunctionCall),
    /// Complete a practice exercise: :exercise <id>
    Exercise(String),
    /// Finish the course: :finish
    Finish,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// An argument was rejected
    Invalid(LessonError),
}

impl From<Result<Command, LessonError>> for ParseResult {
    fn from(result: Result<Command, LessonError>) -> Self {
        match result {
            Ok(cmd) => ParseResult::Ok(cmd),
            Err(LessonError::MissingArgument(name)) => {
                ParseResult::MissingArgument(name.to_string())
            }
            Err(e) => ParseResult::Invalid(e),
        }
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut words = input.split_whitespace();
    let cmd = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "goto" | "g" => {
            if args.is_empty() {
                ParseResult::MissingArgument("goto".to_string())
            } else {
                ParseResult::Ok(Command::Goto(args.join(" ")))
            }
        }
        "complete" | "done" => ParseResult::Ok(Command::Complete),
        "badges" | "b" => ParseResult::Ok(Command::Badges),
        "theme" => ParseResult::Ok(Command::Theme),
        "quiz" => ParseResult::Ok(Command::Quiz),
        "save" => required(&args, 0, "save")
            .and_then(|kind| kind.parse())
            .map(Command::Save)
            .into(),
        "push" => vector_and_number(&args, "push").map(|(v, n)| Command::Push(v, n)).into(),
        "find" | "search" => {
            vector_and_number(&args, "find").map(|(v, n)| Command::Find(v, n)).into()
        }
        "train" => required(&args, 0, "train")
            .and_then(|raw| raw.parse().map_err(|_| LessonError::InvalidNumber(raw.to_string())))
            .map(Command::Train)
            .into(),
        "answer" => answer(&args).into(),
        "run" | "call" => required(&args, 0, "run")
            .and_then(|name| FunctionCall::parse(name, &args[1..]))
            .map(Command::Run)
            .into(),
        "exercise" | "ex" => {
            required(&args, 0, "exercise").map(|id| Command::Exercise(id.to_string())).into()
        }
        "finish" => ParseResult::Ok(Command::Finish),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

fn required<'a>(
    args: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, LessonError> {
    args.get(index).copied().ok_or(LessonError::MissingArgument(name))
}

fn vector_and_number(args: &[&str], name: &'static str) -> Result<(VectorName, i64), LessonError> {
    let vector = required(args, 0, name)?.parse()?;
    let raw = required(args, 1, "value")?;
    let value = raw.parse().map_err(|_| LessonError::InvalidNumber(raw.to_string()))?;
    Ok((vector, value))
}

fn answer(args: &[&str]) -> Result<Command, LessonError> {
    let challenge = required(args, 0, "answer")?.parse()?;
    let raw = required(args, 1, "value")?;
    let value = raw.parse().map_err(|_| LessonError::InvalidNumber(raw.to_string()))?;
    Ok(Command::Answer(challenge, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("quit"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("Q"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_help_command() {
        assert!(matches!(parse_command("help"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("h"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("?"), ParseResult::Ok(Command::Help)));
    }

    #[test]
    fn parse_goto_command() {
        match parse_command("goto Type Detective") {
            ParseResult::Ok(Command::Goto(target)) => assert_eq!(target, "Type Detective"),
            other => panic!("Expected Goto command, got {:?}", other),
        }
        assert!(matches!(parse_command("goto"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_save_command() {
        assert!(matches!(
            parse_command("save house"),
            ParseResult::Ok(Command::Save(StructureKind::House))
        ));
        assert!(matches!(
            parse_command("save boat"),
            ParseResult::Invalid(LessonError::UnknownStructure(_))
        ));
        assert!(matches!(parse_command("save"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_push_and_find() {
        assert!(matches!(
            parse_command("push temps 24"),
            ParseResult::Ok(Command::Push(VectorName::Temperatures, 24))
        ));
        assert!(matches!(
            parse_command("find grades -3"),
            ParseResult::Ok(Command::Find(VectorName::Grades, -3))
        ));
        assert!(matches!(
            parse_command("push temps warm"),
            ParseResult::Invalid(LessonError::InvalidNumber(_))
        ));
        assert!(matches!(parse_command("push temps"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_train_and_answer() {
        assert!(matches!(parse_command("train 2"), ParseResult::Ok(Command::Train(2))));
        assert!(matches!(parse_command("train two"), ParseResult::Invalid(_)));
        assert!(matches!(
            parse_command("answer total 120"),
            ParseResult::Ok(Command::Answer(Challenge::TotalWeight, 120))
        ));
        assert!(matches!(
            parse_command("answer colour 3"),
            ParseResult::Invalid(LessonError::UnknownChallenge(_))
        ));
    }

    #[test]
    fn parse_run_command() {
        match parse_command("run add 2 3.5") {
            ParseResult::Ok(Command::Run(call)) => assert_eq!(call, FunctionCall::Add(2.0, 3.5)),
            other => panic!("Expected Run command, got {:?}", other),
        }
        assert!(matches!(parse_command("run bmi 70"), ParseResult::MissingArgument(_)));
        assert!(matches!(
            parse_command("run fly"),
            ParseResult::Invalid(LessonError::UnknownFunction(_))
        ));
    }

    #[test]
    fn parse_exercise_command() {
        match parse_command("exercise ex1-2") {
            ParseResult::Ok(Command::Exercise(id)) => assert_eq!(id, "ex1-2"),
            other => panic!("Expected Exercise command, got {:?}", other),
        }
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("unknown"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }
}
