//! # Command-Line Interface Module
//!
//! Clap derive definitions for `musictrack`.
//!
//! ## Commands
//!
//! - `track` (default): interactive menu for entering listening sessions
//! - `report`: print the saved report file
//! - `evaluate`: evaluate a single session given on the command line
//! - `completion`: generate shell completion scripts
//!
//! ## Examples
//!
//! ```bash
//! musictrack
//! musictrack --report ~/listening.txt track
//! musictrack evaluate --genre Jazz --artist "Miles Davis" --hours 6 --songs 20,10,30 --save
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
///
/// Global options apply to every subcommand. Running without a subcommand
/// starts the interactive tracker.
#[derive(Parser, Debug)]
#[command(name = "musictrack")]
#[command(about = "Musictrack: discover your weekly and yearly music habits")]
#[command(version)]
pub struct Args {
    /// Report file that session summaries are appended to
    #[arg(long, global = true, env = "MUSICTRACK_REPORT", value_hint = clap::ValueHint::FilePath)]
    pub report: Option<PathBuf>,

    /// JSON config file (defaults to the platform config directory)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the interactive listening tracker
    ///
    /// Presents a menu to enter up to 10 listening sessions, view an overall
    /// summary, get a skill level recommendation, and view the saved report.
    Track,

    /// Print the saved report
    Report,

    /// Evaluate one listening session without prompts
    ///
    /// Prints the summary and quick tips. Inputs are sanitized the same way
    /// as in the interactive tracker: blank labels become "Unknown",
    /// more than 5 playlists are cut to 5 and empty playlists count as 10 songs.
    Evaluate {
        /// Favorite genre
        #[arg(long, default_value = "")]
        genre: String,

        /// Favorite band or artist
        #[arg(long, default_value = "")]
        artist: String,

        /// Hours of music per week
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hours: f64,

        /// Song counts per playlist, comma separated
        #[arg(long, value_delimiter = ',')]
        songs: Vec<u32>,

        /// Append the summary to the report file
        #[arg(long)]
        save: bool,
    },

    /// Generate shell completions
    ///
    /// Usage: musictrack completion bash > ~/.local/share/bash-completion/completions/musictrack
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
