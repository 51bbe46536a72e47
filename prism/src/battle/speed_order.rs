use std::cmp::Ordering;

use prism_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::SpeedSortTieResolution;

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Priority. Highest priority goes first.
    fn priority(&self) -> i32;
    /// Sub-priority. Highest priority goes first.
    fn sub_priority(&self) -> i32;
    /// Speed. Highest speed goes first.
    fn speed(&self) -> u32;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn priority(&self) -> i32 {
        (*self).priority()
    }
    #[inline]
    fn sub_priority(&self) -> i32 {
        (*self).sub_priority()
    }
    #[inline]
    fn speed(&self) -> u32 {
        (*self).speed()
    }
}

/// Compares the priority of two objects.
///
/// [`Ordering::Less`] means `a` goes first.
pub fn compare_priority<'a, T>(a: &'a T, b: &'a T) -> Ordering
where
    &'a T: SpeedOrderable,
{
    // Higher priority first.
    b.priority().cmp(&a.priority()).then_with(|| {
        // Higher sub-priority first.
        b.sub_priority()
            .cmp(&a.sub_priority())
            // Higher speed first.
            .then_with(|| b.speed().cmp(&a.speed()))
    })
}

fn stable_move_to_position<T>(items: &mut [T], index: usize, target: usize) {
    if target == index {
        return;
    } else if index < target {
        for i in index..target {
            items.swap(i, i + 1);
        }
    } else {
        for i in ((target + 1)..=index).rev() {
            items.swap(i - 1, i);
        }
    }
}

// Selection sort that resolves runs of tied elements by the given strategy.
pub fn sort_with_random_ties<T, C>(
    items: &mut [T],
    comp: C,
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedSortTieResolution,
) where
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = 0;
    while sorted + 1 < items.len() {
        // Find all indices tied for the element that goes first.
        let mut first_indices = Vec::from([sorted]);
        for i in (sorted + 1)..items.len() {
            match comp(&items[first_indices[0]], &items[i]) {
                Ordering::Less => continue,
                Ordering::Greater => first_indices = Vec::from([i]),
                Ordering::Equal => first_indices.push(i),
            }
        }
        let ties = first_indices.len();
        for (i, item_index) in first_indices.into_iter().enumerate() {
            stable_move_to_position(items, item_index, sorted + i);
        }
        if ties > 1 {
            let tied = &mut items[sorted..(sorted + ties)];
            match tie_resolution {
                SpeedSortTieResolution::Random => rand_util::shuffle(prng, tied),
                SpeedSortTieResolution::Keep => (),
                SpeedSortTieResolution::Reverse => tied.reverse(),
            }
        }
        sorted += ties;
    }
}

/// Sorts the given items by speed, so that the first item acts first.
pub fn speed_sort<T>(
    items: &mut [T],
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedSortTieResolution,
) where
    for<'a> &'a T: SpeedOrderable,
{
    sort_with_random_ties(items, |a, b| compare_priority(a, b), prng, tie_resolution);
}
