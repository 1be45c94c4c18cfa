//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod output;
mod words;

pub use game::{FALLBACK_PLAYERS, FileGameConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use words::FileWordsConfig;

use serde::{Deserialize, Serialize};
use undercover_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_SEPARATOR, PlayerCount, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Word pool files
    pub words: FileWordsConfig,
    /// Game settings
    pub game: FileGameConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// 1. `words.separator` must be exactly one character (error)
    /// 2. `game.default_players` must be at least 2 (warning, falls back)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.words.separator_char().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidSeparator {
                    value: self.words.separator.clone(),
                },
                message: format!(
                    "words.separator: '{}' is not a single character",
                    self.words.separator
                ),
            });
        }

        if self.game.default_players < PlayerCount::MIN {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidDefaultPlayers {
                    value: self.game.default_players,
                },
                message: format!(
                    "game.default_players: {} is below {}, falling back to {}",
                    self.game.default_players,
                    PlayerCount::MIN,
                    FALLBACK_PLAYERS
                ),
            });
        }

        issues
    }

    /// Separator to use, falling back to the default when invalid.
    pub fn separator(&self) -> char {
        self.words.separator_char().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Default player count, falling back when invalid.
    pub fn default_players(&self) -> PlayerCount {
        PlayerCount::new(self.game.default_players).unwrap_or(PlayerCount::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_bad_separator_is_error() {
        let mut config = FileConfig::default();
        config.words.separator = "::".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(config.separator(), ',');
    }

    #[test]
    fn test_low_default_players_is_warning() {
        let mut config = FileConfig::default();
        config.game.default_players = 1;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::InvalidDefaultPlayers { value: 1 }
        );
        assert_eq!(config.default_players().get(), FALLBACK_PLAYERS);
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
[words]
active = "a.txt"
used = "b.txt"

[game]
default_players = 5

[output]
format = "text"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());
        assert_eq!(config.default_players().get(), 5);
        assert!(!config.output.color);
    }
}
