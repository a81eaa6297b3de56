use crate::VisibleRange;

/// Maps a scroll position onto the overscanned range of rows to materialize.
///
/// - `visible_count = ceil(viewport_size / item_height)`
/// - `start = max(0, floor(scroll_offset / item_height) - overscan)`
/// - `last = min(total_items - 1, start + visible_count + 2 * overscan)`
///
/// Returns [`VisibleRange::EMPTY`] when there are no items (or `item_height` is zero). An offset
/// past the end of the content clamps `start` to the last row, so the result always satisfies
/// `start <= last <= total_items - 1`.
pub fn compute_range(
    scroll_offset: u64,
    viewport_size: u32,
    item_height: u32,
    overscan: usize,
    total_items: usize,
) -> VisibleRange {
    if total_items == 0 || item_height == 0 {
        return VisibleRange::EMPTY;
    }

    let visible_count = viewport_size.div_ceil(item_height) as usize;
    let first = usize::try_from(scroll_offset / item_height as u64).unwrap_or(usize::MAX);
    let last_item = total_items - 1;

    let start = first.saturating_sub(overscan);
    let last = start
        .saturating_add(visible_count)
        .saturating_add(overscan.saturating_mul(2))
        .min(last_item);

    VisibleRange::inclusive(start.min(last), last)
}
