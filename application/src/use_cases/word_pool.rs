//! Word pool backed by a durable store
//!
//! [`StoredWordPool`] keeps the in-memory [`WordPool`] and the two durable
//! stores in step:
//!
//! 1. **load** - parse the active store; missing or empty is fatal
//! 2. **draw** - pick a pair uniformly from memory
//! 3. **consume** - drop the pair from memory, append it to the used store,
//!    then rewrite the active store without it
//!
//! # Limitations
//!
//! `consume` is best effort and not atomic. The in-memory removal always
//! happens first so a consumed pair is never drawn again in this process.
//! The used store is written before the active store, so a failure between
//! the two writes leaves the pair in both stores, never in neither. If the
//! active store no longer holds the pair (edited externally), the active
//! store is left as is and only the used store is appended.

use crate::config::PoolSettings;
use crate::error::GameError;
use crate::ports::word_store::{WordStore, WordStoreError};
use tracing::{debug, info, warn};
use undercover_domain::{RandomSource, WordPair, WordPool, count_rejected_lines, remove_first_match};

/// What a [`StoredWordPool::consume`] call actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeOutcome {
    /// A matching line was removed from the active store
    pub removed_from_store: bool,
    /// A matching pair was removed from the in-memory pool
    pub removed_from_pool: bool,
}

/// In-memory pool plus the store it was loaded from.
#[derive(Debug)]
pub struct StoredWordPool<S: WordStore> {
    store: S,
    pool: WordPool,
    settings: PoolSettings,
}

impl<S: WordStore> StoredWordPool<S> {
    /// Load the pool from the active store.
    ///
    /// # Errors
    ///
    /// - [`GameError::MissingSource`] if the active store does not exist
    /// - [`GameError::Domain`] with `EmptyPool` if it holds no valid pair
    pub fn load(store: S, settings: PoolSettings) -> Result<Self, GameError> {
        let contents = store.read_active()?;

        let rejected = count_rejected_lines(&contents, settings.separator);
        if rejected > 0 {
            warn!(
                "Skipped {} malformed line(s) in {}",
                rejected,
                store.active_location()
            );
        }

        let pool = WordPool::parse(&contents, settings.separator)?;
        info!(
            "Loaded {} word pair(s) from {}",
            pool.len(),
            store.active_location()
        );

        Ok(Self {
            store,
            pool,
            settings,
        })
    }

    /// Pick a pair without consuming it.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<WordPair, GameError> {
        let pair = self.pool.draw(rng)?;
        debug!("Drew a pair ({} remaining before consume)", self.pool.len());
        Ok(pair)
    }

    /// Take `pair` out of play for good.
    pub fn consume(&mut self, pair: &WordPair) -> Result<ConsumeOutcome, GameError> {
        let removed_from_pool = self.pool.remove(pair);
        if !removed_from_pool {
            warn!("Consumed pair was not in the in-memory pool");
        }

        let separator = self.settings.separator;
        let rewritten = match self.store.read_active() {
            Ok(contents) => match remove_first_match(&contents, pair, separator) {
                Some(rewritten) => Some(rewritten),
                None => {
                    warn!(
                        "Pair not found in {}; leaving it unchanged",
                        self.store.active_location()
                    );
                    None
                }
            },
            Err(WordStoreError::Missing(location)) => {
                warn!("{} disappeared; leaving it absent", location);
                None
            }
            Err(e) => return Err(e.into()),
        };

        // Record the pair as used before dropping it from the active store
        self.store.append_used(&pair.canonical_line(separator))?;

        let removed_from_store = match rewritten {
            Some(contents) => {
                self.store.write_active(&contents)?;
                true
            }
            None => false,
        };

        info!(
            "Consumed a pair; {} remaining in {}",
            self.pool.len(),
            self.store.active_location()
        );

        Ok(ConsumeOutcome {
            removed_from_store,
            removed_from_pool,
        })
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> PoolSettings {
        self.settings
    }
}
