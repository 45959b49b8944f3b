//! Incremental quicksort.
//!
//! A quicksort whose recursion is replaced by an explicit stack of pending partition ends, so the
//! work can be paused after every produced element and resumed on the next request. The partition
//! tree is traversed depth first, always descending into the leftmost unresolved partition, which
//! makes the sorted prefix grow strictly left to right.
//!
//! Consuming the first `k` elements of a slice of length `n` costs expected *O*(*n* + *k* \*
//! log(*k*)), consuming everything costs expected *O*(*n* \* log(*n*)).
//!
//! Partitioning is three-way, `[< pivot][== pivot][> pivot]`. When no element is less than the
//! pivot the equal block is already in its final position and is resolved as a whole, so runs of
//! duplicates never require resampling pivots.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::partition::partition_three_way;
use crate::{OrdCmp, Producer};

producer_impl!("incremental_quicksort", IncrementalQuicksort);

/// Partitions of at most this many elements are sorted directly instead of being split further.
pub const SORT_LIMIT: usize = 100;

// Seed of the generator used by `new` and `new_by`, fixed to keep the default deterministic.
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn take<T: Ord + Clone>(v: &mut [T], k: usize) -> Vec<T> {
    IncrementalQuicksort::new(v).take(k).cloned().collect()
}

pub fn take_by<T, F>(v: &mut [T], k: usize, compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    IncrementalQuicksort::new_by(v, compare)
        .take(k)
        .cloned()
        .collect()
}

/// Producer that sorts lazily, only resolving the partition that holds the next element.
///
/// Positions below are relative to the start of the borrowed slice:
///
/// ```text
/// [ produced | sorted, not produced | pending 0 | pending 1 | ... | pending n ]
///            ^ read_pos             ^ sort_end  ^ stack[n]  ^       ^ stack[1] ^ stack[0] == len
/// ```
///
/// Every element of a pending partition is less than or equal to every element of the pending
/// partitions to its right.
pub struct IncrementalQuicksort<'a, T, F, R = StdRng> {
    // Not yet produced elements, starting at read_pos.
    v: &'a mut [T],
    read_pos: usize,
    sort_end: usize,
    // Ends of the pending partitions, strictly decreasing from bottom to top.
    stack: Vec<usize>,
    compare: F,
    rng: R,
}

impl<'a, T: Ord> IncrementalQuicksort<'a, T, OrdCmp<T>> {
    /// Returns a producer over `v`. No work is done until the first element is requested.
    ///
    /// `v` is reordered in place while elements are produced. Pivots are drawn from a generator
    /// with a fixed seed, use [`IncrementalQuicksort::with_rng`] to supply a different one.
    pub fn new(v: &'a mut [T]) -> Self {
        Self::new_by(v, T::cmp)
    }
}

impl<'a, T, F> IncrementalQuicksort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Like [`IncrementalQuicksort::new`], ordering elements by `compare`.
    pub fn new_by(v: &'a mut [T], compare: F) -> Self {
        Self::with_rng_by(v, StdRng::seed_from_u64(DEFAULT_SEED), compare)
    }
}

impl<'a, T: Ord, R: Rng> IncrementalQuicksort<'a, T, OrdCmp<T>, R> {
    /// Like [`IncrementalQuicksort::new`], drawing pivots from `rng`.
    pub fn with_rng(v: &'a mut [T], rng: R) -> Self {
        Self::with_rng_by(v, rng, T::cmp)
    }
}

impl<'a, T, F, R> IncrementalQuicksort<'a, T, F, R>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    /// Like [`IncrementalQuicksort::new`], ordering elements by `compare` and drawing pivots from
    /// `rng`.
    pub fn with_rng_by(v: &'a mut [T], rng: R, compare: F) -> Self {
        let len = v.len();

        Self {
            v,
            read_pos: 0,
            sort_end: 0,
            stack: if len == 0 { Vec::new() } else { vec![len] },
            compare,
            rng,
        }
    }

    /// Ends of the pending partitions relative to the read position, innermost first. The last
    /// one is always the number of remaining elements.
    pub fn pending_partitions(&self) -> impl Iterator<Item = usize> + '_ {
        self.stack.iter().rev().map(move |end| end - self.read_pos)
    }

    /// Resolves pending partitions until at least one more element is in its final position.
    fn resolve_next(&mut self) {
        while self.sort_end == self.read_pos {
            let Some(&part_end) = self.stack.last() else {
                return;
            };

            let part_len = part_end - self.sort_end;
            debug_assert!(
                self.stack.len() <= self.v.len(),
                "partition stack outgrew the unresolved region"
            );

            // sort_end == read_pos, so the partition starts at the front of v.
            let part = &mut self.v[..part_len];

            if part_len <= SORT_LIMIT {
                part.sort_unstable_by(&mut self.compare);
                self.sort_end = part_end;
                self.stack.pop();
                continue;
            }

            // Position 0 is the read position, sample strictly inside the partition.
            let pivot_pos = self.rng.gen_range(1..part_len);
            let compare = &mut self.compare;
            let (lt_count, eq_count) =
                partition_three_way(part, pivot_pos, &mut |a: &T, b: &T| {
                    compare(a, b) == Ordering::Less
                });

            if lt_count == 0 {
                // The pivot is the minimum, so the equal block is final.
                self.sort_end += eq_count;
                if self.sort_end == part_end {
                    self.stack.pop();
                }
            } else {
                let gt_start = self.sort_end + lt_count + eq_count;
                if gt_start < part_end {
                    self.stack.push(gt_start);
                }
                self.stack.push(self.sort_end + lt_count);
            }
        }
    }
}

impl<'a, T, F, R> Iterator for IncrementalQuicksort<'a, T, F, R>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.v.is_empty() {
            return None;
        }

        self.resolve_next();

        let (first, rest) = mem::take(&mut self.v).split_first_mut()?;
        self.v = rest;
        self.read_pos += 1;

        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.v.len(), Some(self.v.len()))
    }
}

impl<'a, T, F, R> ExactSizeIterator for IncrementalQuicksort<'a, T, F, R>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
}

impl<'a, T, F, R> FusedIterator for IncrementalQuicksort<'a, T, F, R>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
}

impl<'a, T, F, R> Producer<'a, T> for IncrementalQuicksort<'a, T, F, R>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    fn sorted_len(&self) -> usize {
        self.sort_end - self.read_pos
    }

    fn remaining(&self) -> &[T] {
        &*self.v
    }
}
