//! # Report Module
//!
//! Renders session summaries and keeps the append-only report file.
//!
//! The file is plain text meant for humans. One block is appended per
//! session and nothing is ever parsed back; viewing the report echoes it
//! verbatim.

use crate::evaluator::quick_tips;
use crate::session::{OverallSummary, Session};
use anyhow::{Context, Result};
use log::info;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Default report file name, relative to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Separator framing each summary block.
pub const SEPARATOR: &str = "=====================================";

const LABEL_WIDTH: usize = 20;

/// Summary block as printed to the console after a session is entered.
pub fn render_summary(session: &Session) -> String {
    let mut out = String::new();
    write_header_and_fields(&mut out, session);
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Block appended to the report file, including per-playlist details.
///
/// Ends with the separator line followed by a blank line.
pub fn render_report_block(session: &Session) -> String {
    let mut out = String::new();
    write_header_and_fields(&mut out, session);
    out.push_str("Playlist Details:\n");
    for (i, songs) in session.playlist_songs().iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, " Playlist {}: {songs} songs", i + 1);
    }
    out.push_str(SEPARATOR);
    out.push_str("\n\n");
    out
}

fn write_header_and_fields(out: &mut String, session: &Session) {
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, " Music Listening Summary");
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Genre:", session.genre());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Artist:", session.artist());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{:.1}", "Hours/Week:", session.hours_per_week());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{:.1}", "Hours/Year:", session.hours_per_year());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Playlists:", session.num_playlists());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Skill Level:", session.level());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Tip:", session.recommendation());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{:.0}", "Avg Songs/Playlist:", session.average_songs());
}

/// Quick tips section printed after a session summary.
pub fn render_quick_tips(session: &Session) -> String {
    let mut out = String::from("\nQuick Tips (Top 3 for your level):\n");
    for (i, tip) in quick_tips(session).iter().enumerate() {
        let _ = writeln!(out, "Tip {}: {tip}", i + 1);
    }
    out
}

/// Aggregate statistics across all sessions.
pub fn render_overall_summary(summary: &OverallSummary) -> String {
    let (artist, hours) = summary
        .top_listener
        .as_ref()
        .map_or(("", 0.0), |top| (top.artist.as_str(), top.hours_per_week));

    let mut out = String::new();
    let _ = writeln!(out, "\n--- Overall Summary Across {} Sessions ---", summary.sessions);
    let _ = writeln!(out, "Average hours per week: {:.1} hours", summary.average_hours_per_week);
    let _ = writeln!(
        out,
        "Average number of playlists per session: {:.1}",
        summary.average_playlists
    );
    let _ = writeln!(out, "Artist with most listening time: {artist} ({hours:.1} hrs/week)");
    let _ = writeln!(out, "Maximum playlists in any session: {}", summary.max_playlists);
    let _ = writeln!(out, "Average hours per year: {:.1} hours", summary.average_hours_per_year);
    let _ = writeln!(out, "{SEPARATOR}");
    out
}

/// Append a session's block to the report at `path`, creating the file if needed.
///
/// Existing content is never rewritten; the block goes after it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for appending (for example a
/// missing parent directory or no write permission) or the write fails.
pub fn append_report(path: &Path, session: &Session) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open report file {} for appending", path.display()))?;

    file.write_all(render_report_block(session).as_bytes())
        .with_context(|| format!("Failed to write session to report file {}", path.display()))?;

    info!("Appended session for `{}' to {}", session.artist(), path.display());
    Ok(())
}

/// Read the whole report back as text.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read or is not
/// valid UTF-8.
pub fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::session::{SessionInput, SessionTracker};
    use tempfile::TempDir;

    fn sample() -> Session {
        evaluate(SessionInput::new("Jazz", "Miles Davis", 6.5, [20, 10, 30]))
    }

    #[test]
    fn test_report_block_layout() {
        let expected = "\
=====================================
 Music Listening Summary
=====================================
Genre:              Jazz
Artist:             Miles Davis
Hours/Week:         6.5
Hours/Year:         338.0
Playlists:          3
Skill Level:        Casual Listener
Tip:                Balanced collection - keep discovering.
Avg Songs/Playlist: 20
Playlist Details:
 Playlist 1: 20 songs
 Playlist 2: 10 songs
 Playlist 3: 30 songs
=====================================

";
        assert_eq!(render_report_block(&sample()), expected);
    }

    #[test]
    fn test_summary_omits_details() {
        let summary = render_summary(&sample());
        assert!(summary.starts_with(SEPARATOR));
        assert!(summary.contains("Avg Songs/Playlist: 20\n"));
        assert!(!summary.contains("Playlist Details:"));
        assert!(summary.ends_with(&format!("{SEPARATOR}\n")));
    }

    #[test]
    fn test_report_block_without_playlists() {
        let session = evaluate(SessionInput::new("", "", 0.0, []));
        let block = render_report_block(&session);
        assert!(block.contains("Genre:              Unknown\n"));
        assert!(block.contains("Avg Songs/Playlist: 0\n"));
        assert!(block.contains(&format!("Playlist Details:\n{SEPARATOR}\n\n")));
    }

    #[test]
    fn test_quick_tips_section() {
        let tips = render_quick_tips(&sample());
        assert_eq!(
            tips,
            "\nQuick Tips (Top 3 for your level):\n\
             Tip 1: Dedicate 7.5 hours this week.\n\
             Tip 2: Explore similar artists.\n\
             Tip 3: Share a playlist with friends.\n"
        );
    }

    #[test]
    fn test_overall_summary_text() {
        let mut tracker = SessionTracker::new();
        tracker.add(sample()).unwrap();
        tracker
            .add(evaluate(SessionInput::new("Rock", "Rush", 12.5, [5])))
            .unwrap();

        let text = render_overall_summary(&tracker.overall_summary().unwrap());
        assert!(text.contains("--- Overall Summary Across 2 Sessions ---"));
        assert!(text.contains("Average hours per week: 9.5 hours"));
        assert!(text.contains("Average number of playlists per session: 2.0"));
        assert!(text.contains("Artist with most listening time: Rush (12.5 hrs/week)"));
        assert!(text.contains("Maximum playlists in any session: 3"));
        assert!(text.contains("Average hours per year: 494.0 hours"));
    }

    #[test]
    fn test_append_then_read_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("report.txt");
        let session = sample();

        append_report(&path, &session)?;
        assert_eq!(read_report(&path)?, render_report_block(&session));
        Ok(())
    }

    #[test]
    fn test_append_accumulates_blocks() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("report.txt");
        let first = sample();
        let second = evaluate(SessionInput::new("Rock", "Rush", 20.0, [5]));

        append_report(&path, &first)?;
        append_report(&path, &second)?;

        let expected = render_report_block(&first) + &render_report_block(&second);
        assert_eq!(read_report(&path)?, expected);
        Ok(())
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = append_report(&path, &sample()).unwrap_err();
        assert!(err.to_string().contains("Failed to open report file"));
    }

    #[test]
    fn test_read_missing_report_fails() {
        let dir = TempDir::new().unwrap();
        assert!(read_report(&dir.path().join("nope.txt")).is_err());
    }
}
