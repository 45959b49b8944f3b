//! Exponentially growing partial sort.
//!
//! Whenever the sorted prefix runs out, the smallest `window` elements of the unsorted rest are
//! selected and sorted, then `window` doubles. Consuming the first `k` elements costs roughly
//! *O*(*n* + *k* \* log(*k*)), and consuming everything stays within *O*(*n* \* log(*n*)).

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;

use crate::{OrdCmp, Producer};

producer_impl!("partial_sort", PartialSort);

/// Size of the first sorted window.
pub const INITIAL_WINDOW: usize = 100;

pub fn take<T: Ord + Clone>(v: &mut [T], k: usize) -> Vec<T> {
    PartialSort::new(v).take(k).cloned().collect()
}

pub fn take_by<T, F>(v: &mut [T], k: usize, compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    PartialSort::new_by(v, compare).take(k).cloned().collect()
}

pub struct PartialSort<'a, T, F> {
    // Not yet produced elements, the read position is always at index 0.
    v: &'a mut [T],
    // v[..sorted_len] is sorted and no element in it is greater than any in v[sorted_len..].
    sorted_len: usize,
    window: usize,
    compare: F,
}

impl<'a, T: Ord> PartialSort<'a, T, OrdCmp<T>> {
    /// Returns a producer over `v`. No work is done until the first element is requested.
    ///
    /// `v` is reordered in place while elements are produced.
    pub fn new(v: &'a mut [T]) -> Self {
        Self::new_by(v, T::cmp)
    }
}

impl<'a, T, F> PartialSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Like [`PartialSort::new`], ordering elements by `compare`.
    pub fn new_by(v: &'a mut [T], compare: F) -> Self {
        Self {
            v,
            sorted_len: 0,
            window: INITIAL_WINDOW,
            compare,
        }
    }

    fn grow_sorted_prefix(&mut self) {
        let len = self.v.len();
        let end = self.window.min(len);

        if end < len {
            // Everything left of end - 1 is now <= v[end - 1] <= everything right of it.
            self.v.select_nth_unstable_by(end - 1, &mut self.compare);
            self.v[..end - 1].sort_unstable_by(&mut self.compare);
        } else {
            self.v.sort_unstable_by(&mut self.compare);
        }

        self.sorted_len = end;
        self.window = self.window.saturating_mul(2);
    }
}

impl<'a, T, F> Iterator for PartialSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.v.is_empty() {
            return None;
        }

        if self.sorted_len == 0 {
            self.grow_sorted_prefix();
        }

        let (first, rest) = mem::take(&mut self.v).split_first_mut()?;
        self.v = rest;
        self.sorted_len -= 1;

        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.v.len(), Some(self.v.len()))
    }
}

impl<'a, T, F> ExactSizeIterator for PartialSort<'a, T, F> where F: FnMut(&T, &T) -> Ordering {}

impl<'a, T, F> FusedIterator for PartialSort<'a, T, F> where F: FnMut(&T, &T) -> Ordering {}

impl<'a, T, F> Producer<'a, T> for PartialSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn sorted_len(&self) -> usize {
        self.sorted_len
    }

    fn remaining(&self) -> &[T] {
        &*self.v
    }
}
