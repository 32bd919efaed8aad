//! Session evaluation: skill tiers, playlist averages and recommendations.
//!
//! Everything here is a pure function of the session input. Thresholds are
//! grouped in an [`EvaluatorContext`] whose default holds the tracker's rules.

use crate::session::{Session, SessionInput};
use log::{debug, trace};
use std::fmt;

/// Weeks used to project weekly listening onto a year.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Listening tier derived from hours per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Casual,
    Dedicated,
    Pro,
}

impl SkillLevel {
    /// Human readable label used in summaries and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Just Starting Out",
            Self::Casual => "Casual Listener",
            Self::Dedicated => "Dedicated Fan",
            Self::Pro => "Pro Curator",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory attached to every evaluated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    ShortPlaylists,
    ImpressiveLibrary,
    BalancedCollection,
}

impl Recommendation {
    pub const fn text(self) -> &'static str {
        match self {
            Self::ShortPlaylists => "Your playlists are short - add more songs!",
            Self::ImpressiveLibrary => "Impressive library size! Consider sharing.",
            Self::BalancedCollection => "Balanced collection - keep discovering.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Thresholds for classification and recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorContext {
    pub pro_hours: f64,
    pub dedicated_hours: f64,
    pub casual_hours: f64,
    /// Hours/week from which short playlists are worth flagging.
    pub short_playlist_hours: f64,
    /// Average below which playlists count as short.
    pub short_playlist_songs: f64,
    /// Average above which the library counts as large.
    pub large_library_songs: f64,
}

impl Default for EvaluatorContext {
    fn default() -> Self {
        Self {
            pro_hours: 15.0,
            dedicated_hours: 10.0,
            casual_hours: 3.0,
            short_playlist_hours: 5.0,
            short_playlist_songs: 15.0,
            large_library_songs: 50.0,
        }
    }
}

/// Classify weekly listening hours into a [`SkillLevel`].
///
/// ```
/// use musictrack::evaluator::{classify, SkillLevel};
///
/// assert_eq!(classify(15.0), SkillLevel::Pro);
/// assert_eq!(classify(14.9), SkillLevel::Dedicated);
/// assert_eq!(classify(2.5), SkillLevel::Beginner);
/// ```
#[must_use]
pub fn classify(hours_per_week: f64) -> SkillLevel {
    classify_with(hours_per_week, &EvaluatorContext::default())
}

/// [`classify`] against explicit thresholds. Tests run top-down, bounds inclusive.
#[must_use]
pub fn classify_with(hours_per_week: f64, context: &EvaluatorContext) -> SkillLevel {
    let level = match hours_per_week {
        h if h >= context.pro_hours => SkillLevel::Pro,
        h if h >= context.dedicated_hours => SkillLevel::Dedicated,
        h if h >= context.casual_hours => SkillLevel::Casual,
        _ => SkillLevel::Beginner,
    };
    trace!("Classified {hours_per_week} hours/week as {level:?}");
    level
}

/// Mean of the first `num_playlists` song counts, `0.0` when there are none.
///
/// ```
/// use musictrack::evaluator::average_songs;
///
/// assert_eq!(average_songs(&[20, 10, 30], 3), 20.0);
/// assert_eq!(average_songs(&[], 0), 0.0);
/// ```
#[must_use]
pub fn average_songs(playlist_songs: &[u32], num_playlists: usize) -> f64 {
    let counted = &playlist_songs[..num_playlists.min(playlist_songs.len())];
    match counted.len() {
        0 => 0.0,
        n => counted.iter().copied().map(f64::from).sum::<f64>() / n as f64,
    }
}

/// Pick the advisory for a listening profile.
#[must_use]
pub fn recommend(hours_per_week: f64, average_songs: f64) -> Recommendation {
    recommend_with(hours_per_week, average_songs, &EvaluatorContext::default())
}

/// [`recommend`] against explicit thresholds. Short playlists take precedence.
#[must_use]
pub fn recommend_with(
    hours_per_week: f64,
    average_songs: f64,
    context: &EvaluatorContext,
) -> Recommendation {
    if hours_per_week >= context.short_playlist_hours
        && average_songs < context.short_playlist_songs
    {
        Recommendation::ShortPlaylists
    } else if average_songs > context.large_library_songs {
        Recommendation::ImpressiveLibrary
    } else {
        Recommendation::BalancedCollection
    }
}

/// Compute the derived fields of a session.
///
/// ```
/// use musictrack::evaluator::{evaluate, Recommendation, SkillLevel};
/// use musictrack::session::SessionInput;
///
/// let session = evaluate(SessionInput::new("Jazz", "Miles Davis", 6.0, [10, 8]));
/// assert_eq!(session.hours_per_year(), 312.0);
/// assert_eq!(session.level(), SkillLevel::Casual);
/// assert_eq!(session.recommendation(), Recommendation::ShortPlaylists);
/// ```
#[must_use]
pub fn evaluate(input: SessionInput) -> Session {
    evaluate_with(input, &EvaluatorContext::default())
}

/// [`evaluate`] against explicit thresholds.
#[must_use]
pub fn evaluate_with(input: SessionInput, context: &EvaluatorContext) -> Session {
    let hours_per_week = input.hours_per_week();
    let hours_per_year = hours_per_week * WEEKS_PER_YEAR;
    let average = average_songs(input.playlist_songs(), input.num_playlists());
    let level = classify_with(hours_per_week, context);
    let recommendation = recommend_with(hours_per_week, average, context);

    debug!(
        "Evaluated session for `{}': {hours_per_year:.1} hours/year, avg {average:.1} songs, {level:?}, {recommendation:?}",
        input.artist()
    );
    Session::from_parts(input, hours_per_year, average, level, recommendation)
}

/// Three tips tailored to the session's level.
#[must_use]
pub fn quick_tips(session: &Session) -> [String; 3] {
    match session.level() {
        SkillLevel::Beginner => [
            format!("Start with 30-minute sessions of {}.", session.artist()),
            "Create your first playlist.".to_string(),
            "Listen actively to lyrics.".to_string(),
        ],
        SkillLevel::Casual => [
            format!("Dedicate {:.1} hours this week.", session.hours_per_week() + 1.0),
            "Explore similar artists.".to_string(),
            "Share a playlist with friends.".to_string(),
        ],
        SkillLevel::Dedicated => [
            format!("Analyze {}'s discography.", session.artist()),
            "Attend a live show.".to_string(),
            "Mix in new genres.".to_string(),
        ],
        SkillLevel::Pro => [
            "Produce a fan remix.".to_string(),
            "Write a review blog.".to_string(),
            "Curate for others.".to_string(),
        ],
    }
}

/// Next-step advice based on how far a session is from the dedicated tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelAdvice {
    Advanced,
    Grower {
        level: SkillLevel,
        hours_to_dedicated: f64,
    },
}

impl fmt::Display for LevelAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advanced => f.write_str("Advanced Level: You're a music curator! Try producing a mix."),
            Self::Grower {
                level,
                hours_to_dedicated,
            } => write!(
                f,
                "Grower Level: {level}. Aim for {hours_to_dedicated:.1} more hours/week to reach {}.",
                SkillLevel::Dedicated
            ),
        }
    }
}

/// Advice for the given session.
#[must_use]
pub fn level_advice(session: &Session) -> LevelAdvice {
    level_advice_with(session, &EvaluatorContext::default())
}

#[must_use]
pub fn level_advice_with(session: &Session, context: &EvaluatorContext) -> LevelAdvice {
    match session.level() {
        level if level >= SkillLevel::Dedicated => LevelAdvice::Advanced,
        level => LevelAdvice::Grower {
            level,
            hours_to_dedicated: context.dedicated_hours - session.hours_per_week(),
        },
    }
}
