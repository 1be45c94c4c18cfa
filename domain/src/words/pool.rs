//! In-memory word pool (Entity)

use super::line_format::parse_pairs;
use super::pair::WordPair;
use crate::core::error::DomainError;
use crate::core::random::RandomSource;

/// The not-yet-used word pairs, in file order.
///
/// Duplicates are allowed. The pool only shrinks: a removed pair is never
/// offered again by [`WordPool::draw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    pairs: Vec<WordPair>,
}

impl WordPool {
    /// Build a pool from already-parsed pairs.
    ///
    /// Fails with [`DomainError::EmptyPool`] when `pairs` is empty, since a
    /// freshly loaded pool without words cannot run a single round.
    pub fn new(pairs: Vec<WordPair>) -> Result<Self, DomainError> {
        if pairs.is_empty() {
            return Err(DomainError::EmptyPool);
        }
        Ok(Self { pairs })
    }

    /// Parse pool file contents.
    pub fn parse(contents: &str, separator: char) -> Result<Self, DomainError> {
        Self::new(parse_pairs(contents, separator))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Pick one pair uniformly at random without removing it.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<WordPair, DomainError> {
        if self.pairs.is_empty() {
            return Err(DomainError::PoolExhausted);
        }
        let index = rng.index(self.pairs.len());
        Ok(self.pairs[index].clone())
    }

    /// Remove the first occurrence of `pair`. Returns whether one was found.
    pub fn remove(&mut self, pair: &WordPair) -> bool {
        match self.pairs.iter().position(|candidate| candidate == pair) {
            Some(position) => {
                self.pairs.remove(position);
                true
            }
            None => false,
        }
    }
}
