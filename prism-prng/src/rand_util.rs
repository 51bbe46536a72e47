use std::mem;

use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event with probability `numerator / denominator` occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
pub fn range_inclusive(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    range(prng, min, max + 1)
}

/// Rolls a percentage in `[1, 100]` and returns whether it lands at or below `percent`.
///
/// Always draws, even for 0 or 100, so the sequence does not depend on the threshold.
pub fn percent_roll(prng: &mut dyn PseudoRandomNumberGenerator, percent: u64) -> bool {
    range_inclusive(prng, 1, 100) <= percent
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mut start = 0;
    let end = items.len() as u64;
    while start < end - 1 {
        let next = range(prng, start, end);
        if start != next {
            let (head, tail) = items.split_at_mut(next as usize);
            mem::swap(&mut head[start as usize], &mut tail[0]);
        }
        start += 1;
    }
}
