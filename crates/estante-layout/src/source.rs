//! Data source seam between the engine and the host toolkit.

use estante_core::Size;

/// Counts and optional per-item sizes, queried once per full layout pass.
///
/// All methods are total: the engine never validates the answers, it sizes
/// its attribute storage to whatever the source reports. `item_size` is the
/// variable-cell capability; return `None` to use the configured fixed cell
/// size for that item.
pub trait ShelfDataSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in a section.
    fn item_count(&self, section: usize) -> usize;

    /// Size override for one item, or `None` for the configured cell size.
    fn item_size(&self, section: usize, item: usize) -> Option<Size> {
        let _ = (section, item);
        None
    }
}
