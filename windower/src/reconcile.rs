use alloc::vec::Vec;

use crate::{MaterializedSet, VisibleRange};

/// The difference between what is materialized and what a range wants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Materialized indexes outside the range, ascending.
    pub to_evict: Vec<usize>,
    /// Indexes inside the range that have no element yet, ascending.
    pub to_add: Vec<usize>,
}

impl ReconcilePlan {
    pub fn is_noop(&self) -> bool {
        self.to_evict.is_empty() && self.to_add.is_empty()
    }

    pub fn clear(&mut self) {
        self.to_evict.clear();
        self.to_add.clear();
    }

    /// Recomputes the plan in place (clears it first), reusing its buffers.
    pub fn rebuild<H>(&mut self, current: &MaterializedSet<H>, range: VisibleRange) {
        self.clear();

        if range.is_empty() {
            self.to_evict.extend(current.indexes());
            return;
        }

        self.to_evict.extend(current.indexes_before(range.start_index));
        self.to_evict.extend(current.indexes_from(range.end_index));
        self.to_add.extend(range.indexes().filter(|&i| !current.contains(i)));
    }
}

/// Computes which elements to evict and which indexes to add for `range`.
///
/// Reconciling the same set against the same range twice (after applying the first plan)
/// yields an empty plan.
pub fn reconcile<H>(current: &MaterializedSet<H>, range: VisibleRange) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();
    plan.rebuild(current, range);
    plan
}
