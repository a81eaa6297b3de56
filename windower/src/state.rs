/// A snapshot of the host viewport, captured when a reconciliation pass runs.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    pub scroll_offset: u64,
    pub viewport_size: u32,
}

impl ViewportGeometry {
    pub fn new(scroll_offset: u64, viewport_size: u32) -> Self {
        Self {
            scroll_offset,
            viewport_size,
        }
    }

    /// A viewport with no size (e.g. detached from the display) cannot show any rows.
    pub fn is_available(&self) -> bool {
        self.viewport_size > 0
    }
}
