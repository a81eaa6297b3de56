use crate::MaterializedSet;

/// Returns the handle to insert `new_index` before, or `None` to append at the end.
///
/// Equivalent to [`MaterializedSet::insertion_anchor`].
pub fn find_insertion_anchor<H>(materialized: &MaterializedSet<H>, new_index: usize) -> Option<&H> {
    materialized.insertion_anchor(new_index)
}

/// Binary search for the smallest value in `sorted` strictly greater than `target`.
///
/// Hosts that keep their own sorted child list can use this to locate the insertion anchor
/// without going through a [`MaterializedSet`].
pub fn first_greater(sorted: &[usize], target: usize) -> Option<usize> {
    debug_assert!(
        sorted.windows(2).all(|w| w[0] < w[1]),
        "first_greater: input must be strictly ascending"
    );
    let pos = sorted.partition_point(|&i| i <= target);
    sorted.get(pos).copied()
}
