//! Start round use case
//!
//! Draws one pair, consumes it right away (an abandoned round still burns
//! its pair), and deals it to the players.

use super::word_pool::StoredWordPool;
use crate::error::GameError;
use crate::ports::word_store::WordStore;
use tracing::info;
use undercover_domain::{PlayerCount, RandomSource, RoundSession};

/// Input for the StartRound use case.
#[derive(Debug, Clone, Copy)]
pub struct StartRoundInput {
    pub player_count: PlayerCount,
}

impl StartRoundInput {
    pub fn new(player_count: PlayerCount) -> Self {
        Self { player_count }
    }
}

/// Use case for dealing a new round from the pool.
pub struct StartRoundUseCase<'a, S: WordStore, R: RandomSource + ?Sized> {
    pool: &'a mut StoredWordPool<S>,
    rng: &'a mut R,
}

impl<'a, S: WordStore, R: RandomSource + ?Sized> StartRoundUseCase<'a, S, R> {
    pub fn new(pool: &'a mut StoredWordPool<S>, rng: &'a mut R) -> Self {
        Self { pool, rng }
    }

    /// Deal a round.
    ///
    /// # Errors
    ///
    /// - `PoolExhausted` when no pair is left; nothing is changed
    /// - [`GameError::Store`] when recording the consumed pair fails; the
    ///   pair is already out of the in-memory pool and no round is dealt
    pub fn execute(self, input: StartRoundInput) -> Result<RoundSession, GameError> {
        let pair = self.pool.draw(&mut *self.rng)?;
        self.pool.consume(&pair)?;

        let round = RoundSession::deal(pair, input.player_count, &mut *self.rng);
        info!(
            "Dealt a round for {} players ({} pair(s) left)",
            input.player_count,
            self.pool.len()
        );
        Ok(round)
    }
}
