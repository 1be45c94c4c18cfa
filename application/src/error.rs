//! Application error types

use crate::ports::word_store::WordStoreError;
use thiserror::Error;
use undercover_domain::DomainError;

/// Errors surfaced by the game use cases.
///
/// Load-time errors ([`GameError::is_fatal`]) stop the application, since it
/// cannot run without a word list. Everything else is reported and the
/// current game state is kept.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word pool file not found: {0}")]
    MissingSource(String),

    #[error("Word store error: {0}")]
    Store(#[source] WordStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Player count has not been set")]
    NoPlayerCount,

    #[error("No round in progress")]
    NoActiveRound,
}

impl GameError {
    /// Whether this error must abort start-up
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::MissingSource(_) | GameError::Domain(DomainError::EmptyPool)
        )
    }

    /// Whether the pool ran out of pairs
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GameError::Domain(e) if e.is_exhausted())
    }
}

impl From<WordStoreError> for GameError {
    fn from(err: WordStoreError) -> Self {
        match err {
            WordStoreError::Missing(location) => GameError::MissingSource(location),
            other => GameError::Store(other),
        }
    }
}
