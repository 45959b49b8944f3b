//! Eager baseline, sorts everything up front.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::slice;

use crate::{OrdCmp, Producer};

producer_impl!("pre_sort", PreSort);

pub fn take<T: Ord + Clone>(v: &mut [T], k: usize) -> Vec<T> {
    PreSort::new(v).take(k).cloned().collect()
}

pub fn take_by<T, F>(v: &mut [T], k: usize, compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    PreSort::new_by(v, compare).take(k).cloned().collect()
}

/// Producer that pays the full sorting cost at construction, regardless of how many elements are
/// consumed afterwards.
pub struct PreSort<'a, T> {
    iter: slice::Iter<'a, T>,
}

impl<'a, T: Ord> PreSort<'a, T> {
    /// Sorts `v` in place and returns a producer over it.
    pub fn new(v: &'a mut [T]) -> Self {
        Self::new_by(v, T::cmp as OrdCmp<T>)
    }
}

impl<'a, T> PreSort<'a, T> {
    /// Sorts `v` in place with `compare` and returns a producer over it.
    pub fn new_by<F>(v: &'a mut [T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_unstable_by(compare);

        let v: &'a [T] = v;
        Self { iter: v.iter() }
    }
}

impl<'a, T> Iterator for PreSort<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for PreSort<'a, T> {}

impl<'a, T> FusedIterator for PreSort<'a, T> {}

impl<'a, T> Producer<'a, T> for PreSort<'a, T> {
    fn sorted_len(&self) -> usize {
        self.iter.len()
    }

    fn remaining(&self) -> &[T] {
        self.iter.as_slice()
    }
}
