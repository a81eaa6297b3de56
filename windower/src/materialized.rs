use alloc::collections::BTreeMap;
use core::ops::Bound;

use crate::{ReconcilePlan, WindowError};

/// The side of a reconciliation pass that creates and detaches elements.
pub trait Materializer<H> {
    type Error: From<WindowError>;

    /// Detaches the element for `index`; its mapping entry is already gone.
    fn evict(&mut self, index: usize, handle: H);

    /// Creates the element for `index` and places it before `anchor` (or at the end when
    /// `anchor` is `None`).
    fn create(&mut self, index: usize, anchor: Option<&H>) -> Result<H, Self::Error>;
}

/// Logical index → materialized element handle.
///
/// Entries are kept in ascending index order, so the insertion anchor for a new index is an
/// `O(log n)` lookup against the live state of the set. The set is only changed through
/// [`MaterializedSet::apply`].
#[derive(Clone, Debug)]
pub struct MaterializedSet<H> {
    entries: BTreeMap<usize, H>,
}

impl<H> Default for MaterializedSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MaterializedSet<H> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.entries.get(&index)
    }

    pub fn first_index(&self) -> Option<usize> {
        self.entries.keys().next().copied()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }

    /// Materialized indexes in ascending order.
    pub fn indexes(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// `(index, handle)` pairs in ascending index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &H)> + '_ {
        self.entries.iter().map(|(&i, h)| (i, h))
    }

    pub(crate) fn indexes_before(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries.range(..index).map(|(&i, _)| i)
    }

    pub(crate) fn indexes_from(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries.range(index..).map(|(&i, _)| i)
    }

    /// Handle of the smallest materialized index strictly greater than `index`.
    ///
    /// `None` means the new element goes after every materialized element.
    pub fn insertion_anchor(&self, index: usize) -> Option<&H> {
        self.entries
            .range((Bound::Excluded(index), Bound::Unbounded))
            .next()
            .map(|(_, h)| h)
    }

    pub(crate) fn insert(&mut self, index: usize, handle: H) -> Result<(), WindowError> {
        if self.entries.contains_key(&index) {
            return Err(WindowError::DuplicateIndex(index));
        }
        self.entries.insert(index, handle);
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<H> {
        self.entries.remove(&index)
    }

    /// Applies a reconciliation plan through `target`.
    ///
    /// Every eviction is handed to [`Materializer::evict`] before the first call to
    /// [`Materializer::create`]. Additions are processed in plan order; each one receives the
    /// anchor to insert before, looked up after all earlier additions of the same pass were
    /// recorded.
    ///
    /// If `create` fails, the additions already made stay recorded and the error is returned.
    pub fn apply<M>(&mut self, plan: &ReconcilePlan, target: &mut M) -> Result<(), M::Error>
    where
        M: Materializer<H> + ?Sized,
    {
        for &index in &plan.to_evict {
            if let Some(handle) = self.remove(index) {
                target.evict(index, handle);
            }
        }

        for &index in &plan.to_add {
            if self.contains(index) {
                return Err(WindowError::DuplicateIndex(index).into());
            }
            let handle = target.create(index, self.insertion_anchor(index))?;
            self.insert(index, handle)?;
        }

        vtrace!(
            evicted = plan.to_evict.len(),
            added = plan.to_add.len(),
            materialized = self.len(),
            "MaterializedSet::apply"
        );
        Ok(())
    }
}
