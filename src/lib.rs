//! Console tracker for music listening habits.
//!
//! Core modules:
//! - [`evaluator`] - Skill levels, playlist averages and recommendations
//! - [`session`] - Session records and the bounded session list
//! - [`input`] - Sanitizing console prompts
//! - [`report`] - Summary rendering and the append-only report file
//! - [`tracker`] - Menu-driven interactive loop
//!
//! ### Supporting Modules
//!
//! - [`config`] - Runtime configuration and config file loading
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`style`] - Console colors behind a no-op capable interface
//!
//! ## Quick Start Example
//!
//! ```
//! use musictrack::evaluator::{evaluate, SkillLevel};
//! use musictrack::report::render_report_block;
//! use musictrack::session::{SessionInput, SessionTracker};
//!
//! let input = SessionInput::new("Jazz", "Miles Davis", 12.0, [20, 10, 30]);
//! let session = evaluate(input);
//! assert_eq!(session.level(), SkillLevel::Dedicated);
//! assert_eq!(session.hours_per_year(), 624.0);
//!
//! let mut tracker = SessionTracker::new();
//! tracker.add(session.clone())?;
//! println!("{}", render_report_block(&session));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Evaluation Rules
//!
//! - **Skill level**: ≥15 hours/week is Pro Curator, ≥10 Dedicated Fan,
//!   ≥3 Casual Listener, anything less Just Starting Out
//! - **Average songs**: mean song count over the session's playlists, 0 without any
//! - **Recommendation**: short playlists (≥5 hours/week and fewer than 15 songs
//!   on average) beat an impressive library (more than 50 on average), otherwise
//!   the collection is balanced
//!
//! ## Error Handling
//!
//! Bad console input never fails: it is replaced by a safe default and the
//! user is warned. Filesystem functions return `Result<T, anyhow::Error>` with
//! the offending path in the context.

pub mod cli;
pub mod completion;
pub mod config;
pub mod evaluator;
pub mod input;
pub mod report;
pub mod session;
pub mod style;
pub mod tracker;
