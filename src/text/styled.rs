use regex::{Captures, Regex};
use std::fmt;

use super::component::to_legacy_text;
use crate::utils::remove_minecraft_colors;

/// Text carrying legacy `§` formatting codes, as rendered by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyledText(String);

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from a raw client string, flattening JSON chat components
    pub fn from_component(raw: &str) -> Self {
        Self(to_legacy_text(raw))
    }

    /// Join lines into one text, separated by newlines
    pub fn join(lines: &[StyledText]) -> Self {
        Self(
            lines
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text with every formatting code stripped
    pub fn unformatted(&self) -> String {
        remove_minecraft_colors(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `pattern` matches the formatted text.
    ///
    /// Patterns in `market::patterns` are anchored, so this is a whole-line match.
    pub fn matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.0)
    }

    /// Same as [`matches`](Self::matches), against the unformatted text
    pub fn matches_unformatted(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.unformatted())
    }

    pub fn captures<'a>(&'a self, pattern: &Regex) -> Option<Captures<'a>> {
        pattern.captures(&self.0)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self(text)
    }
}
