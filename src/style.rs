//! Console styling.
//!
//! Output code asks a [`Palette`] to paint text by role. [`Plain`] leaves
//! text untouched, so tests and redirected output stay free of escape codes.

use colored::Colorize;

/// What a piece of console text is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Banner,
    Heading,
    Warning,
    Success,
}

/// Styling interface for console output.
pub trait Palette {
    fn paint(&self, role: Role, text: &str) -> String;
}

/// Leaves text as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Palette for Plain {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI colors via `colored`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Palette for Ansi {
    fn paint(&self, role: Role, text: &str) -> String {
        match role {
            Role::Banner => text.bright_cyan().to_string(),
            Role::Heading => text.bold().to_string(),
            Role::Warning => text.yellow().to_string(),
            Role::Success => text.green().to_string(),
        }
    }
}

/// Pick a palette for the given color preference.
pub fn palette(color: bool) -> Box<dyn Palette> {
    if color {
        Box::new(Ansi)
    } else {
        Box::new(Plain)
    }
}
