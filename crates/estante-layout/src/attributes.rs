//! Layout attributes: the frame and identity record for one visual element.

use estante_core::Rect;
use serde::{Deserialize, Serialize};

/// Kind of element a set of attributes describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A data cell inside a section's pannable row
    Cell,
    /// A per-section header bar
    SectionHeader,
    /// A per-section footer bar
    SectionFooter,
    /// The single layout-wide header decoration
    GlobalHeader,
    /// The single layout-wide footer decoration
    GlobalFooter,
}

impl ElementKind {
    /// Check if this kind is a per-section supplementary view.
    #[must_use]
    pub const fn is_supplementary(&self) -> bool {
        matches!(self, Self::SectionHeader | Self::SectionFooter)
    }

    /// Check if this kind is a layout-owned decoration view.
    #[must_use]
    pub const fn is_decoration(&self) -> bool {
        matches!(self, Self::GlobalHeader | Self::GlobalFooter)
    }
}

/// Identity of an element within the layout.
///
/// Cells carry both a section and an item index; supplementary views carry
/// only a section; global decorations use section 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementPath {
    /// Section index
    pub section: usize,
    /// Item index within the section, for cells
    pub item: Option<usize>,
}

impl ElementPath {
    /// Path of a cell.
    #[must_use]
    pub const fn cell(section: usize, item: usize) -> Self {
        Self {
            section,
            item: Some(item),
        }
    }

    /// Path of a section-level element.
    #[must_use]
    pub const fn section(section: usize) -> Self {
        Self {
            section,
            item: None,
        }
    }
}

/// Where and what to place: one element's kind, identity, and frame.
///
/// Produced fresh on every full layout pass. During a panning invalidation
/// the frames of one section's cells are translated in place; identity never
/// changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfAttributes {
    /// Element kind
    pub kind: ElementKind,
    /// Element identity
    pub path: ElementPath,
    /// Frame in content coordinates
    pub frame: Rect,
}

impl ShelfAttributes {
    /// Create attributes for an element.
    #[must_use]
    pub const fn new(kind: ElementKind, path: ElementPath, frame: Rect) -> Self {
        Self { kind, path, frame }
    }
}
