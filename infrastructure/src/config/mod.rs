//! Configuration file loading for word-undercover
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `UNDERCOVER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./undercover.toml` or `./.undercover.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/word-undercover/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FALLBACK_PLAYERS, FileConfig, FileGameConfig, FileOutputConfig, FileOutputFormat,
    FileWordsConfig,
};
pub use loader::ConfigLoader;
