//! Infrastructure layer for word-undercover
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod random;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FALLBACK_PLAYERS, FileConfig, FileGameConfig, FileOutputConfig,
    FileOutputFormat, FileWordsConfig,
};
pub use random::ChaChaRandom;
pub use store::FileWordStore;
