//! Game configuration from TOML (`[game]` section)

use serde::{Deserialize, Serialize};
use undercover_domain::PlayerCount;

/// Player count pre-filled in the prompt when nothing is configured.
pub const FALLBACK_PLAYERS: usize = PlayerCount::DEFAULT.get();

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Player count offered by default in the prompt
    pub default_players: usize,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            default_players: FALLBACK_PLAYERS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserialize() {
        let toml_str = r#"
[game]
default_players = 6
seed = 42
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.default_players, 6);
        assert_eq!(config.game.seed, Some(42));
    }

    #[test]
    fn test_game_defaults() {
        let config: super::super::FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.game, FileGameConfig::default());
    }
}
