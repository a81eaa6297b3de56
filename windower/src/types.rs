#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// A contiguous run of logical indexes that should be materialized.
///
/// `end_index` is exclusive; [`VisibleRange::last_index`] gives the inclusive upper bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Builds a range from inclusive bounds.
    pub fn inclusive(start_index: usize, last_index: usize) -> Self {
        Self {
            start_index,
            end_index: last_index.saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// A logical row with its derived position in the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// `index * item_height`.
    pub start: u64,
    pub size: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
