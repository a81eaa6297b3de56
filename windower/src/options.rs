use crate::WindowError;

/// Configuration for [`crate::Windower`], fixed at initialization.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Counts are
/// unsigned, so negative values are rejected while deserializing rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Logical item count.
    pub total_items: usize,
    /// Fixed row height in the scroll axis. Must be greater than zero.
    pub item_height: u32,
    /// Extra rows materialized beyond each viewport edge to reduce flicker on fast scroll.
    pub overscan: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            total_items: 0,
            item_height: 1,
            overscan: 2,
        }
    }
}

impl WindowOptions {
    pub fn new(total_items: usize, item_height: u32) -> Self {
        Self {
            total_items,
            item_height,
            ..Self::default()
        }
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.item_height == 0 {
            vwarn!(item_height = self.item_height, "WindowOptions: invalid item height");
            return Err(WindowError::InvalidItemHeight);
        }
        Ok(())
    }
}
