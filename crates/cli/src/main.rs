//! Lifeboard CLI - terminal front end for the goal-progress engine.

mod render;
mod shell;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lifeboard_progress::{FocusConfig, DEFAULT_FOCUS_LIMIT};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::{Command, Session, SessionConfig};

#[derive(Parser)]
#[command(name = "lifeboard")]
#[command(about = "Track goals across your life domains", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Number of goals in the focus list
    #[arg(long, global = true, default_value_t = DEFAULT_FOCUS_LIMIT)]
    focus_limit: usize,

    /// Render views as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show board totals
    Overview,
    /// Show per-domain progress
    Domains,
    /// Show today's focus list
    Focus,
    /// Show goals grouped by cadence
    Timeline,
    /// Show achievements
    Achievements,
    /// Start an interactive session on stdin
    Shell,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries rendered views
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session = Session::new(SessionConfig {
        today: cli.today,
        focus: FocusConfig::new().with_limit(cli.focus_limit),
        json: cli.json,
    });

    let view = match cli.command {
        Commands::Overview => Command::Overview,
        Commands::Domains => Command::Domains,
        Commands::Focus => Command::Focus,
        Commands::Timeline => Command::Timeline,
        Commands::Achievements => Command::Achievements,
        Commands::Shell => {
            info!("Starting session for {}", session.today());
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout())?;
            info!(
                "Session ended at state version {} with {} achievements unlocked",
                session.state().version,
                session.achievements().unlocked_count()
            );
            return Ok(());
        }
    };

    println!("{}", session.view(&view)?);
    Ok(())
}
