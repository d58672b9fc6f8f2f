//! Per-section scroll tracking.

use estante_core::{PanEvent, PanPhase, Point, Rect};

/// Tracks the horizontal scroll of one section.
///
/// A tracker owns its section's frame, the logical scrollable cell-area
/// frame (whose width may exceed the viewport), and the current horizontal
/// offset. It converts pan gestures into offset changes but applies no
/// minimum or maximum: rubber-banding or clamping is a host concern layered
/// on top.
///
/// Trackers are plain values owned by the engine and rebuilt alongside the
/// layout; they hold no reference to host views.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    section: usize,
    frame: Rect,
    cell_area: Rect,
    offset: f32,
    drag_origin: Option<f32>,
}

impl SectionTracker {
    pub(crate) const fn new(section: usize, frame: Rect, cell_area: Rect) -> Self {
        Self {
            section,
            frame,
            cell_area,
            offset: 0.0,
            drag_origin: None,
        }
    }

    /// Index of the tracked section.
    #[must_use]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// The section's full frame.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// The logical scrollable cell area.
    #[must_use]
    pub const fn cell_area(&self) -> Rect {
        self.cell_area
    }

    /// Width of the scrollable content, independent of the pan position.
    #[must_use]
    pub const fn content_width(&self) -> f32 {
        self.cell_area.width
    }

    /// Current horizontal offset.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Whether a drag starting at `start` belongs to this tracker.
    ///
    /// True exactly when the point lands in this section's cell area, which
    /// excludes the section's header and footer bars. Cell areas of distinct
    /// sections never overlap vertically, so at most one tracker claims any
    /// given start point.
    #[must_use]
    pub fn should_claim(&self, start: &Point) -> bool {
        self.cell_area.contains_point(start)
    }

    /// Whether this tracker's gesture may run alongside another recognizer.
    ///
    /// Sibling trackers coexist (the claim test already makes their gestures
    /// mutually exclusive); a tracker never runs simultaneously with itself.
    /// Identity is compared directly, never inferred from runtime types.
    #[must_use]
    pub fn recognizes_simultaneously_with(&self, other: &Self) -> bool {
        !std::ptr::eq(self, other)
    }

    /// Whether a drag is currently owned by this tracker.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Feed one pan gesture update.
    ///
    /// A `Began` event claims the drag if it starts inside the cell area;
    /// `Changed`/`Ended`/`Cancelled` events move the offset against the
    /// offset captured at the claim. Returns the new offset whenever it
    /// changed, which the engine turns into a panning invalidation.
    pub fn handle_pan(&mut self, event: &PanEvent) -> Option<f32> {
        match event.phase {
            PanPhase::Began => {
                if !self.should_claim(&event.position) {
                    return None;
                }
                self.drag_origin = Some(self.offset);
                None
            }
            PanPhase::Changed => {
                let origin = self.drag_origin?;
                self.offset = origin - event.translation.x;
                Some(self.offset)
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                let origin = self.drag_origin.take()?;
                self.offset = origin - event.translation.x;
                Some(self.offset)
            }
        }
    }
}
