use core::fmt;

/// Errors reported by the windowing engine.
///
/// An unavailable viewport (zero size, e.g. a detached host) is not an error: passes are
/// skipped until the geometry becomes valid again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// `item_height` must be strictly positive.
    InvalidItemHeight,
    /// An element was about to be created for an index outside `[0, total_items)`, or the data
    /// source had no item for an in-range index.
    IndexOutOfRange { index: usize, total_items: usize },
    /// The index already has a materialized element.
    DuplicateIndex(usize),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemHeight => f.write_str("item height must be greater than zero"),
            Self::IndexOutOfRange { index, total_items } => {
                write!(f, "index {index} is out of range (total items: {total_items})")
            }
            Self::DuplicateIndex(index) => write!(f, "index {index} is already materialized"),
        }
    }
}

impl core::error::Error for WindowError {}
