//! Round session (Entity)
//!
//! A round is dealt once from a single word pair and never changes
//! afterwards. Random decisions are made in a fixed order so a scripted
//! [`RandomSource`] reproduces a round exactly:
//!
//! 1. coin flip: swap the pair before labelling majority/minority
//! 2. index in `0..N`: the undercover player

use super::player_count::PlayerCount;
use crate::core::random::RandomSource;
use crate::words::pair::WordPair;
use serde::{Deserialize, Serialize};

/// A word pair after the per-round majority/minority decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedPair {
    /// Word given to every player except the undercover
    pub majority: String,
    /// Word given only to the undercover
    pub minority: String,
}

/// The dealt words of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSession {
    player_count: PlayerCount,
    pair: AssignedPair,
    undercover_index: usize,
    player_words: Vec<String>,
}

impl RoundSession {
    /// Deal a round from `pair` for `player_count` players.
    pub fn deal<R: RandomSource + ?Sized>(
        pair: WordPair,
        player_count: PlayerCount,
        rng: &mut R,
    ) -> Self {
        let (majority, minority) = pair.into_ordered(rng.coin_flip());
        let undercover_index = rng.index(player_count.get());

        let player_words = (0..player_count.get())
            .map(|index| {
                if index == undercover_index {
                    minority.clone()
                } else {
                    majority.clone()
                }
            })
            .collect();

        Self {
            player_count,
            pair: AssignedPair { majority, minority },
            undercover_index,
            player_words,
        }
    }

    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    pub fn pair(&self) -> &AssignedPair {
        &self.pair
    }

    /// Zero-based index of the undercover player
    pub fn undercover_index(&self) -> usize {
        self.undercover_index
    }

    pub fn player_words(&self) -> &[String] {
        &self.player_words
    }

    /// Word dealt to the zero-based player `index`
    pub fn word_for(&self, index: usize) -> Option<&str> {
        self.player_words.get(index).map(String::as_str)
    }
}
