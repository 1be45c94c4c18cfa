//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Word pool contains no valid word pairs")]
    EmptyPool,

    #[error("Word pool is exhausted")]
    PoolExhausted,

    #[error("Invalid player count: {0} (must be an integer >= 2)")]
    InvalidPlayerCount(String),

    #[error("Reveal summary is not available until every player has seen their word")]
    RevealNotReady,
}

impl DomainError {
    /// Check if this error means the pool has run out of pairs
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DomainError::PoolExhausted)
    }
}
