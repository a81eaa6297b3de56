use alloc::vec::Vec;

use crate::{
    Align, ViewportGeometry, VisibleRange, WindowError, WindowItem, WindowOptions, compute_range,
};

/// Fixed-row-height layout for a windowed list.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it viewport geometry (scroll offset + viewport size).
/// - It answers range and position queries; materializing rows is the job of
///   [`crate::MaterializedSet`] and the adapter.
#[derive(Clone, Debug)]
pub struct Windower {
    options: WindowOptions,
    geometry: ViewportGeometry,
}

impl Windower {
    /// Creates a windower from validated options.
    ///
    /// Returns [`WindowError::InvalidItemHeight`] if `options.item_height` is zero.
    pub fn new(options: WindowOptions) -> Result<Self, WindowError> {
        options.validate()?;
        vdebug!(
            total_items = options.total_items,
            item_height = options.item_height,
            overscan = options.overscan,
            "Windower::new"
        );
        Ok(Self {
            options,
            geometry: ViewportGeometry::default(),
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn total_items(&self) -> usize {
        self.options.total_items
    }

    pub fn item_height(&self) -> u32 {
        self.options.item_height
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = geometry;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.geometry.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.geometry.scroll_offset = offset;
    }

    /// Same as `set_scroll_offset`, but clamps the offset to [`Self::max_scroll_offset`].
    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        self.geometry.scroll_offset = self.clamp_scroll_offset(offset);
    }

    pub fn viewport_size(&self) -> u32 {
        self.geometry.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        self.geometry.viewport_size = size;
    }

    /// The overscanned range for the current geometry.
    pub fn range(&self) -> VisibleRange {
        self.range_for(self.geometry.scroll_offset, self.geometry.viewport_size)
    }

    pub fn range_for(&self, scroll_offset: u64, viewport_size: u32) -> VisibleRange {
        compute_range(
            scroll_offset,
            viewport_size,
            self.options.item_height,
            self.options.overscan,
            self.options.total_items,
        )
    }

    /// Full scroll extent of the list: `total_items * item_height`.
    pub fn total_size(&self) -> u64 {
        (self.options.total_items as u64).saturating_mul(self.options.item_height as u64)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.total_items)
            .then(|| (index as u64).saturating_mul(self.options.item_height as u64))
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        self.item(index).map(|it| it.end())
    }

    pub fn item(&self, index: usize) -> Option<WindowItem> {
        let start = self.item_start(index)?;
        Some(WindowItem {
            index,
            start,
            size: self.options.item_height,
        })
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.total_items;
        if count == 0 {
            return None;
        }
        let row = offset / self.options.item_height as u64;
        let index = usize::try_from(row).unwrap_or(usize::MAX);
        Some(index.min(count - 1))
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.geometry.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Computes the scroll offset that brings `index` into view with the given alignment.
    ///
    /// The index is clamped to the last item and the result to [`Self::max_scroll_offset`].
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.total_items == 0 {
            return 0;
        }
        let index = index.min(self.options.total_items - 1);
        let Some(item) = self.item(index) else {
            return 0;
        };
        let view = self.geometry.viewport_size as u64;

        let target = match align {
            Align::Start => item.start,
            Align::End => item.end().saturating_sub(view),
            Align::Center => {
                let center = item.start.saturating_add(item.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.geometry.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if item.start >= cur && item.end() <= cur_end {
                    cur
                } else if item.start < cur {
                    item.start
                } else {
                    item.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    pub fn for_each_item(&self, f: impl FnMut(WindowItem)) {
        self.for_each_item_for(self.geometry.scroll_offset, self.geometry.viewport_size, f);
    }

    pub fn for_each_item_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        mut f: impl FnMut(WindowItem),
    ) {
        let range = self.range_for(scroll_offset, viewport_size);
        for index in range.indexes() {
            if let Some(item) = self.item(index) {
                f(item);
            }
        }
    }

    /// Collects the items of the current range into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_item`]. For maximum performance,
    /// prefer `for_each_item` and reuse a scratch buffer in your adapter.
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_item(|it| out.push(it));
    }
}
