use serde::Deserialize;

use super::Config;

pub const DEFAULT_PROMPT: &str = "Enter the number of rows: ";
pub const DEFAULT_GLYPH: &str = "*";

/// Presentation of the triangle printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Written before the row count is read. No trailing newline is added.
    pub prompt: String,
    /// Repeated `row` times on each pattern line.
    pub glyph: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            glyph: DEFAULT_GLYPH.to_owned(),
        }
    }
}

impl Config for PatternConfig {
    const PREFIX: &'static str = "PATTERN";
}
