//! Application layer for word-undercover
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PoolSettings;
pub use error::GameError;
pub use ports::word_store::{InMemoryWordStore, WordStore, WordStoreError};
pub use use_cases::game_session::GameSession;
pub use use_cases::start_round::{StartRoundInput, StartRoundUseCase};
pub use use_cases::word_pool::{ConsumeOutcome, StoredWordPool};
