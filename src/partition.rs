//! Three-way partitioning.

/// Partitions `v` around the value at `pivot_pos` into three blocks, `[< pivot][== pivot][> pivot]`,
/// and returns the lengths of the first two blocks as `(lt_count, eq_count)`.
///
/// `eq_count` is at least 1 for non-empty `v`, because the pivot itself lands in the equal block.
/// Elements are only ever swapped, so even if `is_less` panics or is not a strict weak ordering,
/// `v` stays a permutation of its input.
///
/// Panics if `pivot_pos` is out of bounds for non-empty `v`.
pub fn partition_three_way<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return (0, 0);
    }

    // Park the pivot at the start, so the rest can be scanned without aliasing it.
    v.swap(0, pivot_pos);
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // rest[..lt] < pivot, rest[lt..i] == pivot, rest[i..gt] unscanned, rest[gt..] > pivot.
    let mut lt = 0;
    let mut i = 0;
    let mut gt = rest.len();

    while i < gt {
        if is_less(&rest[i], pivot) {
            rest.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(pivot, &rest[i]) {
            gt -= 1;
            rest.swap(i, gt);
        } else {
            i += 1;
        }
    }

    // Move the pivot between the less and equal blocks. v[lt] is the last element of the less
    // block, or the pivot itself if that block is empty.
    v.swap(0, lt);

    (lt, gt + 1 - lt)
}
