//! Player count value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of players in a round (Value Object)
///
/// Always at least [`PlayerCount::MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlayerCount(usize);

impl PlayerCount {
    /// A round needs at least one majority player besides the undercover.
    pub const MIN: usize = 2;

    /// Count offered when the user just presses Enter.
    pub const DEFAULT: PlayerCount = PlayerCount(4);

    pub fn new(count: usize) -> Result<Self, DomainError> {
        if count < Self::MIN {
            return Err(DomainError::InvalidPlayerCount(count.to_string()));
        }
        Ok(Self(count))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl FromStr for PlayerCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count: usize = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidPlayerCount(trimmed.to_string()))?;
        Self::new(count)
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
