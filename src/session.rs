//! Listening session records and the bounded in-memory session list.
//!
//! A [`SessionInput`] is the sanitized raw record collected from the user.
//! It becomes a [`Session`] only through [`crate::evaluator::evaluate`], which
//! fills in the derived fields. Sessions are never edited after that.

use crate::evaluator::{Recommendation, SkillLevel};
use log::{debug, warn};
use std::fmt;

/// Maximum number of sessions kept by a [`SessionTracker`].
pub const MAX_SESSIONS: usize = 10;

/// Maximum number of playlists per session.
pub const MAX_PLAYLISTS: usize = 5;

/// Song count assumed for a playlist entered as empty.
pub const EMPTY_PLAYLIST_SONGS: u32 = 10;

/// Label used when the user leaves genre or artist blank.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Raw listening record, already sanitized.
///
/// The number of playlists is the length of `playlist_songs`. Fields are
/// private, so [`SessionInput::new`] is the only way to build one:
///
/// ```compile_fail
/// use musictrack::session::SessionInput;
///
/// let input = SessionInput {
///     genre: String::new(),
///     artist: String::new(),
///     hours_per_week: -8.0,
///     playlist_songs: vec![0; 9],
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInput {
    genre: String,
    artist: String,
    hours_per_week: f64,
    playlist_songs: Vec<u32>,
}

impl SessionInput {
    /// Build a record, applying the same coercions as the console prompts.
    ///
    /// - blank labels become `"Unknown"`
    /// - negative or non-finite hours become `0.0`
    /// - playlists beyond [`MAX_PLAYLISTS`] are dropped
    /// - zero song counts become [`EMPTY_PLAYLIST_SONGS`]
    pub fn new(
        genre: impl Into<String>,
        artist: impl Into<String>,
        hours_per_week: f64,
        playlist_songs: impl IntoIterator<Item = u32>,
    ) -> Self {
        let hours_per_week = if hours_per_week.is_finite() && hours_per_week >= 0.0 {
            hours_per_week
        } else {
            warn!("Coercing invalid hours/week `{hours_per_week}' to 0.0");
            0.0
        };

        let mut playlist_songs: Vec<u32> = playlist_songs
            .into_iter()
            .map(|songs| if songs == 0 { EMPTY_PLAYLIST_SONGS } else { songs })
            .collect();
        if playlist_songs.len() > MAX_PLAYLISTS {
            warn!(
                "Dropping {} playlists beyond the limit of {MAX_PLAYLISTS}",
                playlist_songs.len() - MAX_PLAYLISTS
            );
            playlist_songs.truncate(MAX_PLAYLISTS);
        }

        Self {
            genre: label_or_unknown(genre.into()),
            artist: label_or_unknown(artist.into()),
            hours_per_week,
            playlist_songs,
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn hours_per_week(&self) -> f64 {
        self.hours_per_week
    }

    pub fn playlist_songs(&self) -> &[u32] {
        &self.playlist_songs
    }

    /// Number of playlists in this record.
    pub fn num_playlists(&self) -> usize {
        self.playlist_songs.len()
    }
}

fn label_or_unknown(label: String) -> String {
    if label.trim().is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        label
    }
}

/// An evaluated listening session.
///
/// Derived fields are computed once by the evaluator; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    input: SessionInput,
    hours_per_year: f64,
    average_songs: f64,
    level: SkillLevel,
    recommendation: Recommendation,
}

impl Session {
    pub(crate) fn from_parts(
        input: SessionInput,
        hours_per_year: f64,
        average_songs: f64,
        level: SkillLevel,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            input,
            hours_per_year,
            average_songs,
            level,
            recommendation,
        }
    }

    pub fn genre(&self) -> &str {
        &self.input.genre
    }

    pub fn artist(&self) -> &str {
        &self.input.artist
    }

    pub fn hours_per_week(&self) -> f64 {
        self.input.hours_per_week
    }

    pub fn hours_per_year(&self) -> f64 {
        self.hours_per_year
    }

    pub fn num_playlists(&self) -> usize {
        self.input.num_playlists()
    }

    pub fn playlist_songs(&self) -> &[u32] {
        &self.input.playlist_songs
    }

    /// Mean song count over the session's playlists.
    pub fn average_songs(&self) -> f64 {
        self.average_songs
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }
}

/// Returned when adding to a tracker that already holds [`MAX_SESSIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReached {
    pub capacity: usize,
}

impl fmt::Display for CapacityReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Maximum {} sessions supported. Cannot add more.", self.capacity)
    }
}

impl std::error::Error for CapacityReached {}

/// Append-only list of evaluated sessions with a fixed capacity.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    sessions: Vec<Session>,
    capacity: usize,
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTracker {
    /// Create an empty tracker holding up to [`MAX_SESSIONS`] sessions.
    pub fn new() -> Self {
        Self {
            sessions: Vec::with_capacity(MAX_SESSIONS),
            capacity: MAX_SESSIONS,
        }
    }

    /// Append a session, refusing once the tracker is full.
    pub fn add(&mut self, session: Session) -> Result<&Session, CapacityReached> {
        if self.is_full() {
            return Err(CapacityReached {
                capacity: self.capacity,
            });
        }
        self.sessions.push(session);
        debug!("Tracker now holds {}/{} sessions", self.sessions.len(), self.capacity);
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently added session.
    pub fn latest(&self) -> Option<&Session> {
        self.sessions.last()
    }

    /// All sessions in insertion order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Aggregate statistics across every session, `None` when empty.
    pub fn overall_summary(&self) -> Option<OverallSummary> {
        if self.sessions.is_empty() {
            return None;
        }

        let count = self.sessions.len() as f64;
        let total_hours_week: f64 = self.sessions.iter().map(Session::hours_per_week).sum();
        let total_hours_year: f64 = self.sessions.iter().map(Session::hours_per_year).sum();
        let total_playlists: usize = self.sessions.iter().map(Session::num_playlists).sum();
        let max_playlists = self
            .sessions
            .iter()
            .map(Session::num_playlists)
            .max()
            .unwrap_or(0);

        // Strictly greater, so the earliest session wins a tie and zero hours never qualify.
        let top_listener = self
            .sessions
            .iter()
            .fold(None::<&Session>, |best, session| match best {
                Some(b) if session.hours_per_week() <= b.hours_per_week() => Some(b),
                _ if session.hours_per_week() > 0.0 => Some(session),
                other => other,
            })
            .map(|s| TopListener {
                artist: s.artist().to_string(),
                hours_per_week: s.hours_per_week(),
            });

        Some(OverallSummary {
            sessions: self.sessions.len(),
            average_hours_per_week: total_hours_week / count,
            average_playlists: total_playlists as f64 / count,
            top_listener,
            max_playlists,
            average_hours_per_year: total_hours_year / count,
        })
    }
}

/// Artist of the session with the most weekly listening time.
#[derive(Debug, Clone, PartialEq)]
pub struct TopListener {
    pub artist: String,
    pub hours_per_week: f64,
}

/// Aggregates over all tracked sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallSummary {
    pub sessions: usize,
    pub average_hours_per_week: f64,
    pub average_playlists: f64,
    pub top_listener: Option<TopListener>,
    pub max_playlists: usize,
    pub average_hours_per_year: f64,
}
