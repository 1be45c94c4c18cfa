//! Random source abstraction
//!
//! Every random decision in a round (which pair, which word is the majority,
//! who is the undercover) goes through [`RandomSource`]. Production code plugs
//! in an OS-seeded generator from the infrastructure layer; tests plug in
//! [`ScriptedRandom`] to replay an exact sequence of decisions.

/// Source of the random choices made while dealing a round.
///
/// # Invariants
///
/// - `index(upper)` returns a value in `0..upper` and is only called with
///   `upper > 0`
/// - Implementations must not share global state
pub trait RandomSource {
    /// Uniformly pick an index in `0..upper`.
    fn index(&mut self, upper: usize) -> usize;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Deterministic random source that replays scripted answers.
///
/// Indices are taken from `indices` in order (reduced modulo `upper`) and coin
/// flips from `flips`. When a script runs out it wraps around; an empty script
/// yields `0` / `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    indices: Vec<usize>,
    flips: Vec<bool>,
    next_index: usize,
    next_flip: usize,
}

impl ScriptedRandom {
    pub fn new(indices: Vec<usize>, flips: Vec<bool>) -> Self {
        Self {
            indices,
            flips,
            next_index: 0,
            next_flip: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() || upper == 0 {
            return 0;
        }
        let value = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        value % upper
    }

    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return false;
        }
        let value = self.flips[self.next_flip % self.flips.len()];
        self.next_flip += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_indices_replay_in_order() {
        let mut rng = ScriptedRandom::new(vec![2, 0, 1], vec![]);
        assert_eq!(rng.index(5), 2);
        assert_eq!(rng.index(5), 0);
        assert_eq!(rng.index(5), 1);
        // wraps around
        assert_eq!(rng.index(5), 2);
    }

    #[test]
    fn test_scripted_index_is_reduced_into_range() {
        let mut rng = ScriptedRandom::new(vec![7], vec![]);
        assert_eq!(rng.index(3), 1);
    }

    #[test]
    fn test_empty_script_defaults() {
        let mut rng = ScriptedRandom::default();
        assert_eq!(rng.index(4), 0);
        assert!(!rng.coin_flip());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = ScriptedRandom::new(vec![1], vec![true]);
        let by_ref = &mut rng;
        fn take(mut r: impl RandomSource) -> (usize, bool) {
            (r.index(2), r.coin_flip())
        }
        assert_eq!(take(by_ref), (1, true));
    }
}
