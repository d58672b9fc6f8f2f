//! The shelf layout engine.

use estante_core::{PanEvent, PanPhase, Point, Rect, Size};

use crate::attributes::{ElementKind, ShelfAttributes};
use crate::config::ShelfConfig;
use crate::invalidation::InvalidationContext;
use crate::source::ShelfDataSource;
use crate::state::{LayoutState, SectionGeometry};
use crate::tracker::SectionTracker;

/// Progress of the invalidation protocol between layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvalidationState {
    /// No invalidation in flight
    Idle,
    /// The last invalidation was a pan of this section; the next full pass
    /// must not recompute
    Panning(usize),
}

/// App-store style shelf layout: vertically stacked sections, each
/// independently horizontally pannable, with optional global and
/// per-section header/footer views.
///
/// The engine computes geometry only. A host toolkit drives it through
/// three entry points: [`prepare`](Self::prepare) before querying
/// attributes, [`invalidate`](Self::invalidate) when something changed, and
/// the `attributes_*` lookups when placing views. Pan gestures reach the
/// engine either pre-digested through
/// [`set_pan_offset`](Self::set_pan_offset) or as raw events through
/// [`handle_pan`](Self::handle_pan).
///
/// A full pass costs O(total items). A pan invalidation never triggers one:
/// it translates the affected section's existing cell frames in place and
/// arms a one-shot skip consumed by the host's follow-up layout pass,
/// keeping each scroll tick at O(items in the panned section).
pub struct ShelfLayout {
    config: ShelfConfig,
    state: LayoutState,
    trackers: Vec<SectionTracker>,
    invalidation: InvalidationState,
    bounds: Size,
}

impl ShelfLayout {
    /// Create an engine with the given configuration. No geometry exists
    /// until the first [`prepare`](Self::prepare).
    #[must_use]
    pub fn new(config: ShelfConfig) -> Self {
        Self {
            config,
            state: LayoutState::default(),
            trackers: Vec::new(),
            invalidation: InvalidationState::Idle,
            bounds: Size::ZERO,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Replace the configuration. Discards any in-flight pan invalidation;
    /// the next [`prepare`](Self::prepare) rebuilds from scratch.
    pub fn set_config(&mut self, config: ShelfConfig) {
        self.config = config;
        self.invalidation = InvalidationState::Idle;
    }

    /// Run a full layout pass.
    ///
    /// When the pass was triggered solely by this engine's own pan
    /// invalidation, the frames are already correct (translated in place)
    /// and the pass is a no-op that consumes the pending-pan flag.
    /// Otherwise all attributes are discarded and recomputed in one
    /// top-to-bottom sweep; per-section pan offsets survive the rebuild and
    /// are reapplied to the new cell frames.
    pub fn prepare(&mut self, source: &dyn ShelfDataSource, bounds: Size) {
        if matches!(self.invalidation, InvalidationState::Panning(_)) {
            self.invalidation = InvalidationState::Idle;
            return;
        }

        let offsets: Vec<f32> = self.trackers.iter().map(SectionTracker::offset).collect();
        self.bounds = bounds;
        self.state = LayoutState::compute(&self.config, source, bounds.width, &offsets);

        self.trackers = self
            .state
            .section_frames
            .iter()
            .zip(self.state.cell_areas.iter())
            .enumerate()
            .map(|(section, (frame, cell_area))| {
                let mut tracker = SectionTracker::new(section, *frame, *cell_area);
                // Sections beyond the previous tracker list start at rest.
                if let Some(offset) = offsets.get(section) {
                    tracker.set_offset(*offset);
                }
                tracker
            })
            .collect();
    }

    /// Apply an invalidation request.
    ///
    /// A panning context translates the named section's cells in place and
    /// arms the one-shot skip consumed by the next
    /// [`prepare`](Self::prepare); panning a section with no cells, or one
    /// outside the current layout, is a no-op. A full context returns the
    /// protocol to idle so the next pass recomputes everything.
    pub fn invalidate(&mut self, context: &InvalidationContext) {
        if let Some(delta) = context.pan() {
            if self
                .state
                .translate_section(delta.section, delta.offset, self.config.section_cell_inset.left)
            {
                if let Some(tracker) = self.trackers.get_mut(delta.section) {
                    tracker.set_offset(delta.offset);
                }
                self.invalidation = InvalidationState::Panning(delta.section);
            }
        } else {
            self.invalidation = InvalidationState::Idle;
        }
    }

    /// Whether a bounds change requires a full relayout.
    #[must_use]
    pub fn should_invalidate_for_bounds_change(&self, new_bounds: Size) -> bool {
        self.bounds != new_bounds
    }

    /// The section whose pan invalidation is in flight, if any.
    #[must_use]
    pub fn panning_section(&self) -> Option<usize> {
        match self.invalidation {
            InvalidationState::Idle => None,
            InvalidationState::Panning(section) => Some(section),
        }
    }

    /// Total scrollable content size from the last full pass.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.state.content_size()
    }

    /// Number of sections in the last-computed layout.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.state.section_count()
    }

    /// Geometry of one section, or `None` past the last-computed count.
    #[must_use]
    pub fn section_geometry(&self, section: usize) -> Option<SectionGeometry> {
        self.state.section_geometry(section)
    }

    /// All attributes intersecting the query rect, cells and section
    /// supplementaries first, global decorations last.
    #[must_use]
    pub fn attributes_in_rect(&self, rect: &Rect) -> Vec<&ShelfAttributes> {
        self.state.attributes_in_rect(rect)
    }

    /// Attributes of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `section` or `item` lie outside the counts of the last
    /// full pass; attribute storage is always sized to the last-queried
    /// counts and a stale index is a caller bug.
    #[must_use]
    pub fn attributes_for_item(&self, section: usize, item: usize) -> &ShelfAttributes {
        &self.state.cells[section][item]
    }

    /// Attributes of a per-section supplementary view. `None` when that
    /// kind is disabled (zero height) or `kind` is not a supplementary.
    #[must_use]
    pub fn attributes_for_supplementary(
        &self,
        kind: ElementKind,
        section: usize,
    ) -> Option<&ShelfAttributes> {
        match kind {
            ElementKind::SectionHeader => self.state.section_headers.get(section),
            ElementKind::SectionFooter => self.state.section_footers.get(section),
            _ => None,
        }
    }

    /// Attributes of a global decoration view. `None` when the
    /// configuration has no such view or `kind` is not a decoration.
    #[must_use]
    pub fn attributes_for_decoration(&self, kind: ElementKind) -> Option<&ShelfAttributes> {
        match kind {
            ElementKind::GlobalHeader => self.state.header.as_ref(),
            ElementKind::GlobalFooter => self.state.footer.as_ref(),
            _ => None,
        }
    }

    /// The tracker of one section.
    #[must_use]
    pub fn tracker(&self, section: usize) -> Option<&SectionTracker> {
        self.trackers.get(section)
    }

    /// All section trackers, in section order.
    #[must_use]
    pub fn trackers(&self) -> &[SectionTracker] {
        &self.trackers
    }

    /// The section claiming a drag that starts at `start`, if any.
    ///
    /// Claims are evaluated per section in index order; cell areas never
    /// overlap vertically, so at most one section matches.
    #[must_use]
    pub fn claiming_section(&self, start: &Point) -> Option<usize> {
        self.trackers
            .iter()
            .position(|tracker| tracker.should_claim(start))
    }

    /// Set one section's pan offset directly, translating its cells.
    pub fn set_pan_offset(&mut self, section: usize, offset: f32) {
        self.invalidate(&InvalidationContext::panning(section, offset));
    }

    /// Feed a raw pan gesture update.
    ///
    /// A `Began` event is offered to each tracker's claim test in section
    /// order; later events are routed to whichever tracker owns the drag,
    /// and any resulting offset change becomes a panning invalidation.
    /// Returns the section that responded.
    pub fn handle_pan(&mut self, event: &PanEvent) -> Option<usize> {
        if event.phase == PanPhase::Began {
            let section = self.claiming_section(&event.position)?;
            self.trackers[section].handle_pan(event);
            return Some(section);
        }

        let section = self.trackers.iter().position(SectionTracker::is_dragging)?;
        let offset = self.trackers[section].handle_pan(event)?;
        self.invalidate(&InvalidationContext::panning(section, offset));
        Some(section)
    }
}
