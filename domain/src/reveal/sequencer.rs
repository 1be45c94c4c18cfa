//! Reveal sequencer (state machine)
//!
//! Walks every player through two screens, strictly forward:
//!
//! ```text
//! (0, Intro) -> (0, Word) -> (1, Intro) -> ... -> (N-1, Word) -> Reveal
//! ```
//!
//! Exactly `2 * N` calls to [`RevealSequencer::proceed`] reach `Reveal`.
//! Once there, `proceed` is a no-op; leaving `Reveal` means dealing a new
//! round (fresh sequencer) or discarding the session.

use super::summary::RevealSummary;
use crate::core::error::DomainError;
use crate::round::session::RoundSession;
use serde::{Deserialize, Serialize};

/// Screen shown to the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubPhase {
    /// Player is named, word still hidden
    Intro,
    /// Player's word is shown
    Word,
}

impl SubPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SubPhase::Intro => "intro",
            SubPhase::Word => "word",
        }
    }
}

impl std::fmt::Display for SubPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Player { index: usize, phase: SubPhase },
    Reveal,
}

/// What the presentation layer may show right now.
///
/// The word is only present in [`SubPhase::Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealView {
    Player {
        /// One-based player number
        player_number: usize,
        sub_phase: SubPhase,
        word: Option<String>,
        /// Whether this is the final player before the reveal
        is_last_player: bool,
    },
    Reveal,
}

/// Drives the players of one round through their screens.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    round: RoundSession,
    state: RevealState,
}

impl RevealSequencer {
    /// Start at `(0, Intro)` for a freshly dealt round.
    pub fn new(round: RoundSession) -> Self {
        Self {
            round,
            state: RevealState::Player {
                index: 0,
                phase: SubPhase::Intro,
            },
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn round(&self) -> &RoundSession {
        &self.round
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Reveal
    }

    /// Advance one screen and return the new state.
    pub fn proceed(&mut self) -> RevealState {
        let player_count = self.round.player_count().get();
        self.state = match self.state {
            RevealState::Player {
                index,
                phase: SubPhase::Intro,
            } => RevealState::Player {
                index,
                phase: SubPhase::Word,
            },
            RevealState::Player {
                index,
                phase: SubPhase::Word,
            } if index + 1 < player_count => RevealState::Player {
                index: index + 1,
                phase: SubPhase::Intro,
            },
            RevealState::Player { .. } | RevealState::Reveal => RevealState::Reveal,
        };
        self.state
    }

    pub fn current_view(&self) -> RevealView {
        match self.state {
            RevealState::Player { index, phase } => RevealView::Player {
                player_number: index + 1,
                sub_phase: phase,
                word: match phase {
                    SubPhase::Intro => None,
                    SubPhase::Word => self.round.word_for(index).map(str::to_string),
                },
                is_last_player: index + 1 == self.round.player_count().get(),
            },
            RevealState::Reveal => RevealView::Reveal,
        }
    }

    /// The full assignment, available only in `Reveal`.
    pub fn final_summary(&self) -> Result<RevealSummary, DomainError> {
        if !self.is_revealed() {
            return Err(DomainError::RevealNotReady);
        }
        Ok(RevealSummary::from_round(&self.round))
    }
}
