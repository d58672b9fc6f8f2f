//! Computed layout state: every frame from one full pass.

use estante_core::{Constraints, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::attributes::{ElementKind, ElementPath, ShelfAttributes};
use crate::config::ShelfConfig;
use crate::source::ShelfDataSource;

/// Geometry of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Full-width frame spanning the section's header, cell row, and footer
    pub frame: Rect,
    /// Logical scrollable cell area. Its width is the pan-independent
    /// content width, which may exceed the viewport width.
    pub cell_area: Rect,
    /// Cell frames in item order, at their current (possibly panned)
    /// positions
    pub cell_frames: Vec<Rect>,
}

/// Every frame computed by one full layout pass.
///
/// Replaced wholesale on a full rebuild; cell frames of a single section are
/// translated in place during a panning invalidation.
#[derive(Debug, Default)]
pub struct LayoutState {
    pub(crate) header: Option<ShelfAttributes>,
    pub(crate) footer: Option<ShelfAttributes>,
    pub(crate) section_frames: Vec<Rect>,
    pub(crate) cell_areas: Vec<Rect>,
    pub(crate) section_headers: Vec<ShelfAttributes>,
    pub(crate) section_footers: Vec<ShelfAttributes>,
    pub(crate) cells: Vec<Vec<ShelfAttributes>>,
    pub(crate) content_size: Size,
}

impl LayoutState {
    /// Compute all frames in a single top-to-bottom sweep.
    ///
    /// `offsets` carries the per-section horizontal pan offsets from before
    /// the rebuild; sections beyond its length start at offset 0. Runs in
    /// O(total items).
    pub(crate) fn compute(
        config: &ShelfConfig,
        source: &dyn ShelfDataSource,
        bounds_width: f32,
        offsets: &[f32],
    ) -> Self {
        let mut state = Self::default();
        let mut current_y = 0.0;

        if let Some(header) = config.header.as_deref() {
            let size = header.measure(Constraints::fit_width(bounds_width));
            state.header = Some(ShelfAttributes::new(
                ElementKind::GlobalHeader,
                ElementPath::section(0),
                Rect::new(0.0, current_y, size.width, size.height),
            ));
            current_y += size.height;
        }

        let inset = config.section_cell_inset;
        for section in 0..source.section_count() {
            let section_min_y = current_y;

            if config.section_header_height > 0.0 {
                state.section_headers.push(ShelfAttributes::new(
                    ElementKind::SectionHeader,
                    ElementPath::section(section),
                    Rect::new(0.0, current_y, bounds_width, config.section_header_height),
                ));
                current_y += config.section_header_height;
            }

            // Reapply the pan offset known before this rebuild so panning
            // state survives a data reload.
            let offset = offsets.get(section).copied().unwrap_or(0.0);
            let mut cell_x = inset.left - offset;
            let cell_min_x = cell_x - inset.left;
            current_y += inset.top;
            let row_top = current_y;

            let count = source.item_count(section);
            let mut row_height = if count == 0 { config.cell_size.height } else { 0.0 };
            let mut section_cells = Vec::with_capacity(count);
            for item in 0..count {
                let size = source.item_size(section, item).unwrap_or(config.cell_size);
                section_cells.push(ShelfAttributes::new(
                    ElementKind::Cell,
                    ElementPath::cell(section, item),
                    Rect::new(cell_x, row_top, size.width, size.height),
                ));
                cell_x += size.width + config.spacing;
                row_height = row_height.max(size.height);
            }
            state.cells.push(section_cells);

            // Logical content width: the pan offset cancels out of
            // `cell_x - cell_min_x`, so the scrollable extent is independent
            // of the current pan position.
            let cell_area = Rect::new(
                0.0,
                row_top,
                cell_x - config.spacing + inset.right - cell_min_x,
                row_height,
            );
            state.cell_areas.push(cell_area);
            current_y += row_height + inset.bottom;

            if config.section_footer_height > 0.0 {
                state.section_footers.push(ShelfAttributes::new(
                    ElementKind::SectionFooter,
                    ElementPath::section(section),
                    Rect::new(0.0, current_y, bounds_width, config.section_footer_height),
                ));
                current_y += config.section_footer_height;
            }

            state.section_frames.push(Rect::new(
                0.0,
                section_min_y,
                bounds_width,
                current_y - section_min_y,
            ));
        }

        if let Some(footer) = config.footer.as_deref() {
            let size = footer.measure(Constraints::fit_width(bounds_width));
            state.footer = Some(ShelfAttributes::new(
                ElementKind::GlobalFooter,
                ElementPath::section(0),
                Rect::new(0.0, current_y, size.width, size.height),
            ));
            current_y += size.height;
        }

        state.content_size = Size::new(bounds_width, current_y);
        state
    }

    /// Total scrollable content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Number of sections covered by this state.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_frames.len()
    }

    /// Assemble the geometry of one section.
    #[must_use]
    pub fn section_geometry(&self, section: usize) -> Option<SectionGeometry> {
        Some(SectionGeometry {
            frame: *self.section_frames.get(section)?,
            cell_area: *self.cell_areas.get(section)?,
            cell_frames: self.cells.get(section)?.iter().map(|a| a.frame).collect(),
        })
    }

    /// All attributes whose frames intersect the query rect.
    ///
    /// Sections whose frames are disjoint from the rect are skipped without
    /// visiting their cells. Global decorations come last.
    #[must_use]
    pub fn attributes_in_rect(&self, rect: &Rect) -> Vec<&ShelfAttributes> {
        let mut visible = Vec::new();

        for (section, frame) in self.section_frames.iter().enumerate() {
            if !rect.intersects(frame) {
                continue;
            }
            if let Some(header) = self.section_headers.get(section) {
                if rect.intersects(&header.frame) {
                    visible.push(header);
                }
            }
            visible.extend(
                self.cells[section]
                    .iter()
                    .filter(|attributes| rect.intersects(&attributes.frame)),
            );
            if let Some(footer) = self.section_footers.get(section) {
                if rect.intersects(&footer.frame) {
                    visible.push(footer);
                }
            }
        }

        for decoration in [self.header.as_ref(), self.footer.as_ref()].into_iter().flatten() {
            if rect.intersects(&decoration.frame) {
                visible.push(decoration);
            }
        }

        visible
    }

    /// Translate one section's cells to match a new pan offset.
    ///
    /// The translation is computed against the section's current minimum
    /// cell x, so repeated calls with the same offset are stable. Returns
    /// false when the section has no cells to move.
    pub(crate) fn translate_section(
        &mut self,
        section: usize,
        new_offset: f32,
        inset_left: f32,
    ) -> bool {
        let Some(section_cells) = self.cells.get_mut(section) else {
            return false;
        };
        if section_cells.is_empty() {
            return false;
        }

        let min_x = section_cells
            .iter()
            .map(|attributes| attributes.frame.min_x())
            .fold(f32::INFINITY, f32::min)
            - inset_left;
        let translation = -new_offset - min_x;
        for attributes in section_cells.iter_mut() {
            attributes.frame = attributes.frame.offset_by(translation, 0.0);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estante_core::EdgeInsets;

    struct Counts(Vec<usize>);

    impl ShelfDataSource for Counts {
        fn section_count(&self) -> usize {
            self.0.len()
        }

        fn item_count(&self, section: usize) -> usize {
            self.0[section]
        }
    }

    fn shelf_config() -> ShelfConfig {
        ShelfConfig::new()
            .with_cell_size(Size::new(100.0, 100.0))
            .with_cell_inset(EdgeInsets::uniform(4.0))
            .with_spacing(8.0)
    }

    #[test]
    fn test_cell_positions() {
        let state = LayoutState::compute(&shelf_config(), &Counts(vec![3, 0]), 320.0, &[]);
        let xs: Vec<f32> = state.cells[0].iter().map(|a| a.frame.x).collect();
        assert_eq!(xs, vec![4.0, 112.0, 220.0]);
        assert!(state.cells[0].iter().all(|a| a.frame.y == 4.0));
    }

    #[test]
    fn test_cell_area_is_pan_independent() {
        let config = shelf_config();
        let resting = LayoutState::compute(&config, &Counts(vec![3]), 320.0, &[]);
        let panned = LayoutState::compute(&config, &Counts(vec![3]), 320.0, &[150.0]);
        assert_eq!(resting.cell_areas[0].width, 324.0);
        assert_eq!(panned.cell_areas[0], resting.cell_areas[0]);
        assert_eq!(panned.cells[0][0].frame.x, 4.0 - 150.0);
    }

    #[test]
    fn test_empty_section_reserves_row_height() {
        let state = LayoutState::compute(&shelf_config(), &Counts(vec![3, 0]), 320.0, &[]);
        assert_eq!(state.cell_areas[1].height, 100.0);
        assert_eq!(state.section_frames[0].height, 108.0);
        assert_eq!(state.section_frames[1].height, 108.0);
        assert!(state.cells[1].is_empty());
    }

    #[test]
    fn test_content_height_sums_sections() {
        let config = shelf_config()
            .with_section_header_height(30.0)
            .with_section_footer_height(10.0);
        let state = LayoutState::compute(&config, &Counts(vec![3, 0]), 320.0, &[]);
        // 2 sections, each 30 + 4 + 100 + 4 + 10
        assert_eq!(state.content_size(), Size::new(320.0, 296.0));
    }

    #[test]
    fn test_translate_section_moves_only_cells() {
        let mut state = LayoutState::compute(&shelf_config(), &Counts(vec![3, 2]), 320.0, &[]);
        let before_other: Vec<Rect> = state.cells[1].iter().map(|a| a.frame).collect();
        assert!(state.translate_section(0, 50.0, 4.0));
        let xs: Vec<f32> = state.cells[0].iter().map(|a| a.frame.x).collect();
        assert_eq!(xs, vec![-46.0, 62.0, 170.0]);
        let after_other: Vec<Rect> = state.cells[1].iter().map(|a| a.frame).collect();
        assert_eq!(before_other, after_other);
    }

    #[test]
    fn test_translate_empty_section_is_noop() {
        let mut state = LayoutState::compute(&shelf_config(), &Counts(vec![0]), 320.0, &[]);
        assert!(!state.translate_section(0, 50.0, 4.0));
        assert!(!state.translate_section(7, 50.0, 4.0));
    }

    #[test]
    fn test_section_geometry() {
        let state = LayoutState::compute(&shelf_config(), &Counts(vec![2]), 320.0, &[]);
        let geometry = state.section_geometry(0).unwrap();
        assert_eq!(geometry.frame, Rect::new(0.0, 0.0, 320.0, 108.0));
        assert_eq!(geometry.cell_frames.len(), 2);
        assert!(state.section_geometry(1).is_none());
    }
}
