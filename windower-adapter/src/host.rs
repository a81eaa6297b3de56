use alloc::vec::Vec;

use windower::ViewportGeometry;

/// Reports the host viewport geometry on demand.
///
/// Geometry is pulled when a reconciliation pass runs, never pushed, so a pass always sees
/// the latest scroll offset.
pub trait GeometryProvider {
    /// Current scroll offset in the scroll axis (`scrollTop`-like).
    fn scroll_offset(&self) -> u64;

    /// Current viewport size in the scroll axis (`clientHeight`-like). Zero means the viewport is
    /// unavailable (e.g. detached from the display).
    fn viewport_size(&self) -> u32;

    fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::new(self.scroll_offset(), self.viewport_size())
    }
}

/// The rendering target that holds materialized elements.
///
/// Any target that can order children works: a DOM-like tree, a canvas scene, native views, or a
/// terminal line buffer.
pub trait HostContainer: GeometryProvider {
    /// Opaque element identity.
    type Handle;

    /// Inserts `element` before `anchor`, or after every materialized element when `anchor` is
    /// `None`.
    fn insert_before(&mut self, element: &Self::Handle, anchor: Option<&Self::Handle>);

    fn remove(&mut self, element: &Self::Handle);

    /// Receives the full scroll extent of the list (`total_items * item_height`) when the engine
    /// is mounted, so the host scrollbar covers every row.
    fn set_track_size(&mut self, _size: u64) {}
}

/// Builds the element for one logical row. Called once per newly added index.
pub trait RowFactory<T> {
    type Handle;

    fn create_element(&mut self, index: usize, item: &T) -> Self::Handle;
}

impl<T, H, F> RowFactory<T> for F
where
    F: FnMut(usize, &T) -> H,
{
    type Handle = H;

    fn create_element(&mut self, index: usize, item: &T) -> H {
        self(index, item)
    }
}

/// Row content indexed by logical index.
///
/// Must return `Some` for every index in `[0, total_items)`.
pub trait DataSource {
    type Item;

    fn get_item(&self, index: usize) -> Option<Self::Item>;
}

impl<T: Clone> DataSource for Vec<T> {
    type Item = T;

    fn get_item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> DataSource for &[T] {
    type Item = T;

    fn get_item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// A data source that derives each item from its index.
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(pub F);

impl<T, F> DataSource for FromFn<F>
where
    F: Fn(usize) -> Option<T>,
{
    type Item = T;

    fn get_item(&self, index: usize) -> Option<T> {
        (self.0)(index)
    }
}

/// Wraps `f` as a [`DataSource`].
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(usize) -> Option<T>,
{
    FromFn(f)
}
