//! Console input collection.
//!
//! This is the sanitizing boundary of the tracker: every prompt degrades bad
//! input to a safe default and tells the user, it never fails on content.
//! Only I/O errors on the underlying streams are returned.

use crate::session::{SessionInput, EMPTY_PLAYLIST_SONGS, MAX_PLAYLISTS, UNKNOWN_LABEL};
use crate::style::{Palette, Plain, Role};
use anyhow::{Context, Result};
use log::warn;
use std::io::{BufRead, Write};

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    palette: Box<dyn Palette>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console without colors.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_palette(reader, writer, Box::new(Plain))
    }

    pub fn with_palette(reader: R, writer: W, palette: Box<dyn Palette>) -> Self {
        Self {
            reader,
            writer,
            palette,
        }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print text as is.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .context("Failed to write to console")
    }

    /// Print text painted for `role`.
    pub fn print_styled(&mut self, role: Role, text: &str) -> Result<()> {
        let painted = self.palette.paint(role, text);
        self.print(&painted)
    }

    /// Print a warning line and log it.
    pub fn warn(&mut self, message: &str) -> Result<()> {
        warn!("{message}");
        let painted = self.palette.paint(Role::Warning, message);
        self.print(&format!("{painted}\n"))
    }

    /// Show `prompt` and read one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.print(prompt)?;
        self.writer.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Free text, `"Unknown"` when nothing is entered.
    ///
    /// Returns `None` at end of input.
    pub fn collect_string(&mut self, prompt: &str) -> Result<Option<String>> {
        let Some(text) = self.read_line(prompt)? else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            self.warn(&format!("Nothing entered - using '{UNKNOWN_LABEL}'."))?;
            return Ok(Some(UNKNOWN_LABEL.to_string()));
        }
        Ok(Some(text))
    }

    /// Non-negative real number, `0.0` on anything else.
    ///
    /// Returns `None` at end of input.
    pub fn collect_real(&mut self, prompt: &str) -> Result<Option<f64>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match parse_real(&line) {
            Some(value) => Ok(Some(value)),
            None => {
                self.warn("Invalid - using 0.0")?;
                Ok(Some(0.0))
            }
        }
    }

    /// Non-negative integer, `0` on anything else.
    ///
    /// Returns `None` at end of input.
    pub fn collect_count(&mut self, prompt: &str) -> Result<Option<u32>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match parse_count(&line) {
            Some(value) => Ok(Some(value)),
            None => {
                self.warn("Invalid - using 0")?;
                Ok(Some(0))
            }
        }
    }

    /// First non-blank character of the answer, `None` at end of input.
    pub fn collect_choice(&mut self, prompt: &str) -> Result<Option<char>> {
        Ok(self
            .read_line(prompt)?
            .map(|line| line.trim().chars().next().unwrap_or(' ')))
    }

    /// Cap a playlist count at [`MAX_PLAYLISTS`], warning when it is exceeded.
    pub fn clamp_playlists(&mut self, requested: u32) -> Result<usize> {
        let requested = requested as usize;
        if requested > MAX_PLAYLISTS {
            self.warn(&format!("Maximum {MAX_PLAYLISTS} playlists supported."))?;
            return Ok(MAX_PLAYLISTS);
        }
        Ok(requested)
    }

    /// Replace an empty playlist with [`EMPTY_PLAYLIST_SONGS`], warning when it does.
    pub fn song_count_or_default(&mut self, songs: u32) -> Result<u32> {
        if songs == 0 {
            self.warn(&format!(
                "Assuming {EMPTY_PLAYLIST_SONGS} songs for empty playlist."
            ))?;
            return Ok(EMPTY_PLAYLIST_SONGS);
        }
        Ok(songs)
    }

    /// Run the full prompt sequence for one listening session.
    ///
    /// Returns `None` when input ends before the last answer, so a half
    /// entered session is never evaluated.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn collect_session(&mut self) -> Result<Option<SessionInput>> {
        let Some(genre) =
            self.collect_string("What's your favorite music genre? (e.g., Rock, Pop, Jazz): ")?
        else {
            return Ok(None);
        };
        let Some(artist) = self.collect_string("Who's your favorite band or artist? ")? else {
            return Ok(None);
        };
        let Some(hours_per_week) =
            self.collect_real("How many hours do you listen to music each week? (e.g., 5.5): ")?
        else {
            return Ok(None);
        };
        let Some(requested) =
            self.collect_count("How many playlists do you have for this genre? ")?
        else {
            return Ok(None);
        };
        let num_playlists = self.clamp_playlists(requested)?;

        let mut playlist_songs = Vec::with_capacity(num_playlists);
        for i in 1..=num_playlists {
            let Some(songs) =
                self.collect_count(&format!("How many songs in playlist {i}? (e.g., 20): "))?
            else {
                return Ok(None);
            };
            playlist_songs.push(self.song_count_or_default(songs)?);
        }

        Ok(Some(SessionInput::new(
            genre,
            artist,
            hours_per_week,
            playlist_songs,
        )))
    }
}

/// Parse the first token of a line as a non-negative finite real.
pub fn parse_real(line: &str) -> Option<f64> {
    line.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Parse the first token of a line as a non-negative integer.
pub fn parse_count(line: &str) -> Option<u32> {
    let value = line.split_whitespace().next()?.parse::<i64>().ok()?;
    u32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real("5.5"), Some(5.5));
        assert_eq!(parse_real("  7 hours"), Some(7.0));
        assert_eq!(parse_real("0"), Some(0.0));
        assert_eq!(parse_real("-1"), None);
        assert_eq!(parse_real("abc"), None);
        assert_eq!(parse_real(""), None);
        assert_eq!(parse_real("inf"), None);
        assert_eq!(parse_real("NaN"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("12 songs"), Some(12));
        assert_eq!(parse_count("-2"), None);
        assert_eq!(parse_count("2.5"), None);
        assert_eq!(parse_count("99999999999"), None);
        assert_eq!(parse_count("   "), None);
    }

    #[test]
    fn test_collect_string_defaults_to_unknown() {
        let mut c = console("\nJazz\n");
        assert_eq!(c.collect_string("Genre? ").unwrap().as_deref(), Some("Unknown"));
        assert_eq!(c.collect_string("Genre? ").unwrap().as_deref(), Some("Jazz"));
        let out = output(c);
        assert!(out.contains("Nothing entered - using 'Unknown'."));
    }

    #[test]
    fn test_collect_string_keeps_crlf_free_text() {
        let mut c = console("Drum and Bass\r\n");
        assert_eq!(c.collect_string("Genre? ").unwrap().as_deref(), Some("Drum and Bass"));
    }

    #[test]
    fn test_collect_real_invalid_and_negative() {
        let mut c = console("abc\n-3\n4.25\n");
        assert_eq!(c.collect_real("Hours? ").unwrap(), Some(0.0));
        assert_eq!(c.collect_real("Hours? ").unwrap(), Some(0.0));
        assert_eq!(c.collect_real("Hours? ").unwrap(), Some(4.25));
        let out = output(c);
        assert_eq!(out.matches("Invalid - using 0.0").count(), 2);
    }

    #[test]
    fn test_collect_at_end_of_input() {
        let mut c = console("");
        assert_eq!(c.collect_real("Hours? ").unwrap(), None);
        assert_eq!(c.collect_count("Playlists? ").unwrap(), None);
        assert_eq!(c.collect_string("Artist? ").unwrap(), None);
        assert_eq!(c.collect_choice("Choice? ").unwrap(), None);
        assert!(!output(c).contains("Invalid"));
    }

    #[test]
    fn test_collect_session_cut_short() {
        // Input ends at the second song prompt
        let mut c = console("Rock
Rush
12
2
30
");
        assert_eq!(c.collect_session().unwrap(), None);

        let mut c = console("");
        assert_eq!(c.collect_session().unwrap(), None);
        assert!(!output(c).contains("Unknown"));
    }

    #[test]
    fn test_collect_choice_takes_first_char() {
        let mut c = console("  yes please\n\n");
        assert_eq!(c.collect_choice("Again? ").unwrap(), Some('y'));
        assert_eq!(c.collect_choice("Again? ").unwrap(), Some(' '));
    }

    #[test]
    fn test_playlists_clamped_before_song_prompts() {
        // 7 playlists requested, only five song prompts follow
        let mut c = console("Rock\nRush\n12\n7\n10\n20\n0\n40\n50\n");
        let input = c.collect_session().unwrap().expect("all answers given");
        assert_eq!(input.num_playlists(), 5);
        assert_eq!(input.playlist_songs(), &[10, 20, 10, 40, 50]);

        let out = output(c);
        let clamp_at = out.find("Maximum 5 playlists supported.").unwrap();
        let first_song_prompt = out.find("How many songs in playlist 1?").unwrap();
        assert!(clamp_at < first_song_prompt);
        assert!(!out.contains("playlist 6"));
        assert!(out.contains("Assuming 10 songs for empty playlist."));
    }

    #[test]
    fn test_collect_session_with_bad_hours() {
        let mut c = console("Pop\n\nlots\n0\n");
        let input = c.collect_session().unwrap().expect("all answers given");
        assert_eq!(input.genre(), "Pop");
        assert_eq!(input.artist(), "Unknown");
        assert_eq!(input.hours_per_week(), 0.0);
        assert!(input.playlist_songs().is_empty());
    }
}
