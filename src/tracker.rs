//! Interactive, menu-driven listening tracker.
//!
//! [`Tracker`] owns the session list and threads it through every menu
//! action. Recoverable problems (bad input, a full tracker, an unreadable
//! report file) are reported to the user and the loop carries on.

use crate::evaluator::{evaluate, level_advice};
use crate::input::Console;
use crate::report::{self, SEPARATOR};
use crate::session::{Session, SessionTracker};
use crate::style::Role;
use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const BANNER: &str = "\
***************************************************
*     Welcome to Your Music Listening Tracker!    *
*   Discover your weekly and yearly music habits  *
***************************************************

";

const MENU: &str = "\
Please choose an option:
 1 = Enter new listening session
 2 = View overall summary
 3 = Get skill level recommendation
 4 = View saved report
 5 = Quit program
";

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewSession,
    OverallSummary,
    SkillRecommendation,
    ViewReport,
    Quit,
}

impl MenuChoice {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::NewSession),
            '2' => Some(Self::OverallSummary),
            '3' => Some(Self::SkillRecommendation),
            '4' => Some(Self::ViewReport),
            '5' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Session tracker state plus the console it talks through.
pub struct Tracker<R, W> {
    console: Console<R, W>,
    sessions: SessionTracker,
    report_path: PathBuf,
}

impl<R: BufRead, W: Write> Tracker<R, W> {
    pub fn new(console: Console<R, W>, report_path: PathBuf) -> Self {
        Self {
            console,
            sessions: SessionTracker::new(),
            report_path,
        }
    }

    pub fn sessions(&self) -> &SessionTracker {
        &self.sessions
    }

    /// Give back the console, e.g. to inspect captured output.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.console.print_styled(Role::Banner, BANNER)?;

        loop {
            self.console.print(MENU)?;
            let Some(choice) = self.console.collect_choice("Enter your choice (1-5): ")? else {
                debug!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::from_char(choice) {
                Some(MenuChoice::NewSession) => self.enter_sessions()?,
                Some(MenuChoice::OverallSummary) => self.show_overall_summary()?,
                Some(MenuChoice::SkillRecommendation) => self.show_skill_recommendation()?,
                Some(MenuChoice::ViewReport) => show_report(&mut self.console, &self.report_path)?,
                Some(MenuChoice::Quit) => break,
                None => self.console.warn("\nInvalid choice. Please enter 1-5.")?,
            }
        }

        self.console
            .print_styled(Role::Heading, "\nThank you for using the Music Listening Tracker!\n")?;
        Ok(())
    }

    /// Keep adding sessions while the user answers yes and there is room.
    pub fn enter_sessions(&mut self) -> Result<()> {
        loop {
            self.add_session()?;
            if self.sessions.is_full() {
                break;
            }
            match self.console.collect_choice("\nEnter another session? (y/n): ")? {
                Some('y' | 'Y') => continue,
                _ => break,
            }
        }
        Ok(())
    }

    /// Collect, evaluate, show and save one session.
    pub fn add_session(&mut self) -> Result<()> {
        if self.sessions.is_full() {
            let message = format!(
                "Maximum {} sessions supported. Cannot add more.",
                self.sessions.capacity()
            );
            return self.console.warn(&message);
        }

        self.console
            .print_styled(Role::Heading, "\n--- Entering New Listening Session ---\n")?;
        let Some(input) = self.console.collect_session()? else {
            debug!("Input closed mid-session, nothing evaluated or saved");
            return self.console.warn("\nInput ended - session discarded.");
        };
        let session = evaluate(input);

        show_session(&mut self.console, &session)?;
        save_session(&mut self.console, &self.report_path, &session)?;

        if let Err(full) = self.sessions.add(session) {
            self.console.warn(&full.to_string())?;
        }
        Ok(())
    }

    pub fn show_overall_summary(&mut self) -> Result<()> {
        match self.sessions.overall_summary() {
            Some(summary) => self.console.print(&report::render_overall_summary(&summary)),
            None => self.console.print(&format!(
                "\n--- Overall Summary ---\nNo sessions entered yet.\n{SEPARATOR}\n"
            )),
        }
    }

    /// Advice for the most recent session.
    pub fn show_skill_recommendation(&mut self) -> Result<()> {
        self.console
            .print_styled(Role::Heading, "\n--- Skill Level Recommendation ---\n")?;
        let Some(latest) = self.sessions.latest() else {
            return self.console.warn("Enter data in option 1 first!");
        };

        let text = format!(
            "Based on {:.1} hours/week and {} playlists:\n{}\n",
            latest.hours_per_week(),
            latest.num_playlists(),
            level_advice(latest)
        );
        self.console.print(&text)
    }
}

/// Print a session's summary and quick tips.
pub fn show_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<()> {
    console.print(&format!("\n{}", report::render_summary(session)))?;
    console.print(&report::render_quick_tips(session))
}

/// Append a session to the report, warning instead of failing when the file is unwritable.
pub fn save_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    session: &Session,
) -> Result<()> {
    match report::append_report(path, session) {
        Ok(()) => console.print_styled(
            Role::Success,
            &format!("Report saved to {}\n", path.display()),
        ),
        Err(e) => console.warn(&format!("Error saving file! ({e:#})")),
    }
}

/// Echo the report file line by line, warning when it cannot be read.
pub fn show_report<R: BufRead, W: Write>(console: &mut Console<R, W>, path: &Path) -> Result<()> {
    match report::read_report(path) {
        Ok(text) => {
            info!("Showing report {}", path.display());
            console.print(&format!("\n--- Saved Report ({}) ---\n", path.display()))?;
            for line in text.lines() {
                console.print(&format!("{line}\n"))?;
            }
            Ok(())
        }
        Err(e) => console.warn(&format!("Could not open report file! ({e:#})")),
    }
}
