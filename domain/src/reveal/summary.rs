//! Reveal summary value object

use crate::round::session::{AssignedPair, RoundSession};
use serde::{Deserialize, Serialize};

/// Everything shown once every player has seen their word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSummary {
    /// Zero-based index of the undercover player
    pub undercover_index: usize,
    pub pair: AssignedPair,
    pub player_words: Vec<String>,
}

impl RevealSummary {
    pub fn from_round(round: &RoundSession) -> Self {
        Self {
            undercover_index: round.undercover_index(),
            pair: round.pair().clone(),
            player_words: round.player_words().to_vec(),
        }
    }

    /// One-based number of the undercover, as players count themselves
    pub fn undercover_number(&self) -> usize {
        self.undercover_index + 1
    }
}
