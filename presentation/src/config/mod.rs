//! Presentation-level configuration
//!
//! Configuration for how rounds are displayed in the terminal.

use undercover_domain::OutputFormat;

/// Display configuration for the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Format of the final reveal summary
    pub format: OutputFormat,
    /// Clear the terminal before every screen so the next player cannot
    /// scroll back to someone else's word
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            clear_screen: true,
        }
    }
}

impl DisplayConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
