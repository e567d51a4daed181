//! Injectable randomness so starting years and song draws are reproducible
//! under test.

use rand::Rng;

/// Uniform random choice capability used by the engine and the song pool.
pub trait Randomizer: Send {
    /// Return a uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` must be non-zero; callers guard against empty choices.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Production source backed by the thread-local generator from `rand`.
#[derive(Debug, Default)]
pub struct ThreadRandomizer;

impl Randomizer for ThreadRandomizer {
    fn pick(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Test source replaying a scripted sequence of picks.
///
/// Panics when asked for more picks than scripted or when a scripted value
/// does not fit the requested bound, so tests fail loudly on drift.
#[cfg(test)]
pub(crate) struct ScriptedRandomizer {
    picks: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandomizer {
    pub(crate) fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl Randomizer for ScriptedRandomizer {
    fn pick(&mut self, bound: usize) -> usize {
        let value = self
            .picks
            .pop_front()
            .expect("scripted randomizer ran out of picks");
        assert!(
            value < bound,
            "scripted pick {value} does not fit bound {bound}"
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_randomizer_respects_bound() {
        let mut rng = ThreadRandomizer;
        for _ in 0..100 {
            assert!(rng.pick(6) < 6);
        }
    }

    #[test]
    fn scripted_randomizer_replays_in_order() {
        let mut rng = ScriptedRandomizer::new([2, 0, 5]);
        assert_eq!(rng.pick(6), 2);
        assert_eq!(rng.pick(10), 0);
        assert_eq!(rng.pick(6), 5);
    }
}
