mod commands;
mod menu;
mod message;
mod prompt;
mod render;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use agenda_core::{AgendaConfig, EventStore};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prompt::{LinePrompter, TermPrompter};

/// Environment variable holding a tracing filter; wins over the config file.
const LOG_ENV: &str = "AGENDA_LOG";
const FALLBACK_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Schedule events, manage participants and fire reminders")]
struct Cli {
    /// Use the numbered text menu even when attached to a terminal
    #[arg(long)]
    plain: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Config file to read instead of ~/.config/agenda/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AgendaConfig::load(cli.config.as_deref()).context("Could not load config")?;
    init_logging(&config.log_filter);

    let color = config.color && !cli.no_color && io::stdout().is_terminal();
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut store = EventStore::new();

    if cli.plain || !io::stdin().is_terminal() {
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        menu::run(&mut store, &mut prompter, color, &today)
    } else {
        let mut prompter = TermPrompter::new();
        menu::run(&mut store, &mut prompter, color, &today)
    }
}

/// Log to stderr so the menu on stdout stays clean.
fn init_logging(default_filter: &str) {
    let env = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env.as_deref(), default_filter))
        .with_writer(io::stderr)
        .init();
}

/// Pick the first usable filter: `env` (the AGENDA_LOG value), then the
/// configured `default`, then `warn`.
fn log_filter(env: Option<&str>, default: &str) -> EnvFilter {
    env.filter(|e| !e.trim().is_empty())
        .and_then(|e| EnvFilter::try_new(e).ok())
        .or_else(|| EnvFilter::try_new(default).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LOG_FILTER))
}
