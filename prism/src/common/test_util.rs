use std::{
    any::Any,
    collections::VecDeque,
};

use prism_prng::PseudoRandomNumberGenerator;

/// A generator that replays a fixed list of values, for unit tests that pin every roll.
///
/// Panics when it runs out, so a test fails loudly if the code under test draws more than
/// expected.
pub struct FixedRandomNumberGenerator {
    values: VecDeque<u64>,
    drawn: usize,
}

impl FixedRandomNumberGenerator {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            values: values.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl PseudoRandomNumberGenerator for FixedRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        0
    }

    fn next(&mut self) -> u64 {
        self.drawn += 1;
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("fixed generator exhausted after {} draws", self.drawn - 1),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
