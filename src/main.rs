use algoquest::game::badge;
use algoquest::lessons::exercises::EXERCISES;
use algoquest::progress::SECTIONS;
use algoquest::{App, Badge, Config};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
const LOG_FILE: &str = "algoquest.log";

#[derive(Parser)]
#[command(name = "algoquest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the badges you can earn
    Badges,
    /// List the course sections
    Sections,
    /// List the practice exercises
    Exercises {
        /// Show descriptions and hints
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file
    let _log_guard = init_logging(cli.command.is_none())?;

    match cli.command {
        Some(Commands::Badges) => {
            for badge in badge::catalog() {
                let Badge { icon, id, name, description, .. } = &badge;
                println!("{} {:<18} {:<20} {}", icon, id, name, description);
            }
        }
        Some(Commands::Sections) => {
            for (index, section) in SECTIONS.iter().enumerate() {
                let reward = section.completion_badge.unwrap_or("-");
                println!("{}. {:<14} {:<40} {}", index + 1, section.title, section.summary, reward);
            }
        }
        Some(Commands::Exercises { verbose }) => {
            for exercise in EXERCISES.iter() {
                println!(
                    "{} {} {} ({} pts, {})",
                    exercise.id,
                    exercise.stars(),
                    exercise.title,
                    exercise.points,
                    exercise.badge
                );
                if verbose {
                    println!("    {}", exercise.description);
                    println!("    Goal: {}", exercise.objective);
                    for hint in exercise.hints {
                        println!("    - {}", hint);
                    }
                }
            }
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// Initialize logging to stdout, or to the log file when `to_file` is set
fn init_logging(to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("algoquest=info"));

    if !to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
        return Ok(None);
    }

    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();
    Ok(Some(guard))
}
