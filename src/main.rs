//! Impulse - a desktop Pomodoro widget
//!
//! Runs the widget shell against the headless frontend loop:
//! - Countdown through a work shift, then a short or long break
//! - Pause/resume through the widget buttons
//! - Settings loaded from and saved to a JSON file

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use impulse::app::ImpulseApp;
use impulse::frontend;
use impulse::settings::SettingsStore;

/// A desktop Pomodoro widget.
#[derive(Parser, Debug)]
#[command(name = "impulse", version, about)]
struct Cli {
    /// Path to the settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Exit after this many seconds instead of running until closed
    #[arg(long, value_name = "SECS")]
    run_for: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point
fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads settings, runs the widget loop, and saves settings on exit.
fn execute(cli: Cli) -> Result<()> {
    let store = match cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::default_location()?,
    };
    let settings = store.load()?;
    tracing::info!(task = %settings.task_name, "settings loaded");

    let mut app = ImpulseApp::new(settings);
    frontend::run(&mut app, cli.run_for.map(Duration::from_secs));

    store.save(app.settings())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
