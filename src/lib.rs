//! Lazy incremental sorting.
//!
//! Every producer in this crate borrows a mutable slice and yields its elements in ascending
//! order, one at a time. They differ in how much work they do up front:
//!
//! - [`pre_sort::PreSort`] sorts everything at construction.
//! - [`partial_sort::PartialSort`] grows a sorted prefix in exponentially doubling windows.
//! - [`quicksort::IncrementalQuicksort`] partitions on demand and only sorts the partition that
//!   holds the next element.
//!
//! All producers mutate the borrowed slice in place. Dropping a producer before it is exhausted
//! is fine, the slice is left as a permutation of its original contents, with the elements
//! produced so far in ascending order at the front.

use std::cmp::Ordering;
use std::iter::FusedIterator;

macro_rules! producer_impl {
    ($name:expr, $producer:ident) => {
        pub struct ProducerImpl;

        impl incsort_test_tools::IncSort for ProducerImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn take<T>(v: &mut [T], k: usize) -> Vec<T>
            where
                T: Ord + Clone,
            {
                take(v, k)
            }

            #[inline]
            fn take_by<T, F>(v: &mut [T], k: usize, compare: F) -> Vec<T>
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                take_by(v, k, compare)
            }

            fn take_inspect<T, I>(v: &mut [T], k: usize, mut inspect: I) -> Vec<T>
            where
                T: Ord + Clone,
                I: FnMut(&T, &[T], usize),
            {
                use crate::Producer;

                let mut producer = $producer::new(v);
                let mut produced = Vec::with_capacity(k.min(producer.len()));

                while produced.len() < k {
                    let Some(val) = producer.next() else {
                        break;
                    };

                    inspect(val, producer.remaining(), producer.sorted_len());
                    produced.push(val.clone());
                }

                produced
            }
        }
    };
}

pub mod partial_sort;
pub mod partition;
pub mod pre_sort;
pub mod quicksort;

pub use partial_sort::PartialSort;
pub use pre_sort::PreSort;
pub use quicksort::IncrementalQuicksort;

/// The comparison used by the `new` constructors, `Ord::cmp` of the element type.
pub type OrdCmp<T> = fn(&T, &T) -> Ordering;

/// Common contract of all producers.
///
/// A producer yields the not yet produced elements of its slice in ascending order. Producing
/// `k` elements yields exactly the `k` smallest elements of the slice, for any `k` up to its
/// length. Equal elements may be produced in any order relative to each other.
pub trait Producer<'a, T: 'a>: Iterator<Item = &'a T> + ExactSizeIterator + FusedIterator {
    /// Number of elements at the front of [`Producer::remaining`] that are already in their final
    /// position, and can be produced without doing any further work.
    fn sorted_len(&self) -> usize;

    /// The elements that have not been produced yet, in their current order.
    fn remaining(&self) -> &[T];

    fn is_exhausted(&self) -> bool {
        self.remaining().is_empty()
    }
}

/// Sorts `v` completely and returns a producer over the result.
pub fn pre_sorted<T: Ord>(v: &mut [T]) -> PreSort<'_, T> {
    PreSort::new(v)
}

/// Returns a producer that sorts `v` in exponentially growing windows.
pub fn partial_sorted<T: Ord>(v: &mut [T]) -> PartialSort<'_, T, OrdCmp<T>> {
    PartialSort::new(v)
}

/// Returns a producer that sorts `v` with an incremental quicksort.
pub fn incremental_sorted<T: Ord>(v: &mut [T]) -> IncrementalQuicksort<'_, T, OrdCmp<T>> {
    IncrementalQuicksort::new(v)
}
