//! Game session use case
//!
//! [`GameSession`] is the single handle a front end holds for the lifetime of
//! the process. It owns the stored word pool, the random source, the chosen
//! player count and the current round's [`RevealSequencer`].
//!
//! # Flow
//!
//! ```text
//! load ─► start_round(N) ─► proceed × 2N ─► final_summary
//!              ▲                                  │
//!              ├────────── next_round ◄───────────┤
//!              └──── reset_player_count ◄─────────┘
//! ```
//!
//! A failed `start_round` / `next_round` (for example an exhausted pool)
//! leaves the previous round in place, so its summary stays readable.

use super::start_round::{StartRoundInput, StartRoundUseCase};
use super::word_pool::StoredWordPool;
use crate::config::PoolSettings;
use crate::error::GameError;
use crate::ports::word_store::WordStore;
use tracing::debug;
use undercover_domain::{
    PlayerCount, RandomSource, RevealSequencer, RevealState, RevealSummary, RevealView,
};

/// Process-wide game state.
pub struct GameSession<S: WordStore, R: RandomSource> {
    pool: StoredWordPool<S>,
    rng: R,
    player_count: Option<PlayerCount>,
    sequencer: Option<RevealSequencer>,
}

impl<S: WordStore, R: RandomSource> GameSession<S, R> {
    /// Load the word pool and create an idle session.
    ///
    /// Errors from here are load-time errors; see [`GameError::is_fatal`].
    pub fn load(store: S, rng: R, settings: PoolSettings) -> Result<Self, GameError> {
        let pool = StoredWordPool::load(store, settings)?;
        Ok(Self::with_pool(pool, rng))
    }

    pub fn with_pool(pool: StoredWordPool<S>, rng: R) -> Self {
        Self {
            pool,
            rng,
            player_count: None,
            sequencer: None,
        }
    }

    /// Set the player count and deal a round.
    ///
    /// The count is remembered even if dealing fails, so a later
    /// [`GameSession::next_round`] can retry with it.
    pub fn start_round(&mut self, player_count: PlayerCount) -> Result<RevealView, GameError> {
        self.player_count = Some(player_count);
        self.deal(player_count)
    }

    /// Deal a new round with the current player count.
    pub fn next_round(&mut self) -> Result<RevealView, GameError> {
        let player_count = self.player_count.ok_or(GameError::NoPlayerCount)?;
        self.deal(player_count)
    }

    fn deal(&mut self, player_count: PlayerCount) -> Result<RevealView, GameError> {
        let round = StartRoundUseCase::new(&mut self.pool, &mut self.rng)
            .execute(StartRoundInput::new(player_count))?;
        let sequencer = RevealSequencer::new(round);
        let view = sequencer.current_view();
        self.sequencer = Some(sequencer);
        Ok(view)
    }

    /// Advance the current round by one screen.
    pub fn proceed(&mut self) -> Result<RevealView, GameError> {
        let sequencer = self.sequencer.as_mut().ok_or(GameError::NoActiveRound)?;
        let state = sequencer.proceed();
        match state {
            RevealState::Player { index, phase } => {
                debug!("Reveal moved to player {} ({})", index + 1, phase)
            }
            RevealState::Reveal => debug!("All players have seen their word"),
        }
        Ok(sequencer.current_view())
    }

    pub fn current_reveal(&self) -> Result<RevealView, GameError> {
        self.sequencer
            .as_ref()
            .map(RevealSequencer::current_view)
            .ok_or(GameError::NoActiveRound)
    }

    pub fn final_summary(&self) -> Result<RevealSummary, GameError> {
        let sequencer = self.sequencer.as_ref().ok_or(GameError::NoActiveRound)?;
        Ok(sequencer.final_summary()?)
    }

    /// Drop the current round and forget the player count.
    pub fn reset_player_count(&mut self) {
        debug!("Player count reset");
        self.player_count = None;
        self.sequencer = None;
    }

    pub fn player_count(&self) -> Option<PlayerCount> {
        self.player_count
    }

    pub fn is_revealed(&self) -> bool {
        self.sequencer
            .as_ref()
            .is_some_and(RevealSequencer::is_revealed)
    }

    pub fn remaining_pairs(&self) -> usize {
        self.pool.len()
    }

    pub fn pool(&self) -> &StoredWordPool<S> {
        &self.pool
    }
}
