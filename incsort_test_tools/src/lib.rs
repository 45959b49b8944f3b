//! Shared test and benchmark tooling for incremental sort producers.

/// A producer under test.
///
/// Every method consumes the first `k` elements of `v` through a freshly constructed producer and
/// returns clones of them. `v` is left in whatever state the producer leaves it in.
pub trait IncSort {
    fn name() -> String;

    fn take<T>(v: &mut [T], k: usize) -> Vec<T>
    where
        T: Ord + Clone;

    fn take_by<T, F>(v: &mut [T], k: usize, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Like `take`, but after every produced element calls `inspect` with that element, the
    /// elements not produced yet and how many of those are already in their final position.
    fn take_inspect<T, I>(v: &mut [T], k: usize, inspect: I) -> Vec<T>
    where
        T: Ord + Clone,
        I: FnMut(&T, &[T], usize);
}

pub mod patterns;
