//! # Musictrack - Music Listening Tracker
//!
//! Asks about your listening habits, derives yearly hours, playlist averages
//! and a skill level, and keeps an append-only text report of every session.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu
//! musictrack
//!
//! # Print the saved report
//! musictrack report
//!
//! # One-shot evaluation, appended to the report
//! musictrack evaluate --genre Rock --artist Rush --hours 12 --songs 25,40 --save
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use musictrack::config::{Overrides, RuntimeConfig};
use musictrack::evaluator::evaluate;
use musictrack::input::Console;
use musictrack::session::SessionInput;
use musictrack::tracker::{self, Tracker};
use musictrack::{cli, completion, style};
use std::io;

/// Main entry point for the Musictrack application.
///
/// Initializes logging, parses command-line arguments, resolves the runtime
/// configuration and routes to the requested command.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug musictrack` - Enable debug logging
/// - `RUST_LOG=musictrack::evaluator=trace musictrack` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let overrides = Overrides {
        config_path: args.config,
        report_path: args.report,
        no_color: args.no_color,
    };

    match args.command.unwrap_or(cli::Command::Track) {
        cli::Command::Track => {
            let config = RuntimeConfig::resolve(&overrides)?;
            info!("Starting interactive tracker, reporting to {}", config.report_path.display());
            Tracker::new(stdio_console(&config), config.report_path).run()?;
        }
        cli::Command::Report => {
            let config = RuntimeConfig::resolve(&overrides)?;
            tracker::show_report(&mut stdio_console(&config), &config.report_path)?;
        }
        cli::Command::Evaluate {
            genre,
            artist,
            hours,
            songs,
            save,
        } => {
            let config = RuntimeConfig::resolve(&overrides)?;
            let mut console = stdio_console(&config);
            let session = evaluate(SessionInput::new(genre, artist, hours, songs));
            debug!("Evaluated one-shot session: {session:?}");

            tracker::show_session(&mut console, &session)?;
            if save {
                tracker::save_session(&mut console, &config.report_path, &session)?;
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(&shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}

/// Console on the process's standard streams, colored per configuration.
fn stdio_console(config: &RuntimeConfig) -> Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    Console::with_palette(
        io::stdin().lock(),
        io::stdout().lock(),
        style::palette(config.color),
    )
}
