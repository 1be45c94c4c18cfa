//! Word pool settings.

use undercover_domain::DEFAULT_SEPARATOR;

/// Controls how pool lines are split and how consumed pairs are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Field separator used both for parsing and for canonical lines.
    pub separator: char,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PoolSettings {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}
