//! Word pool configuration from TOML (`[words]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use undercover_domain::DEFAULT_SEPARATOR;

/// Raw word pool configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWordsConfig {
    /// Pool of pairs still in play
    pub active: PathBuf,
    /// Append-only record of consumed pairs
    pub used: PathBuf,
    /// Field separator; must be a single character
    pub separator: String,
}

impl Default for FileWordsConfig {
    fn default() -> Self {
        Self {
            active: PathBuf::from("words.txt"),
            used: PathBuf::from("words_used.txt"),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl FileWordsConfig {
    /// The separator as a `char`, if it is exactly one character.
    pub fn separator_char(&self) -> Option<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}
