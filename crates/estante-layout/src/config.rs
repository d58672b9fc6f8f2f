//! Shelf layout configuration.

use estante_core::{EdgeInsets, Measurable, Size};
use serde::{Deserialize, Serialize};

/// Default horizontal spacing between cells.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Declarative configuration of a shelf layout.
///
/// A configuration is immutable during one layout pass; replacing it on the
/// engine triggers a full rebuild on the next pass. Values are not
/// validated: negative heights or a zero cell size produce degenerate
/// geometry rather than an error, so clamp upstream if that matters to the
/// host.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Height of each section header. 0 disables section headers.
    pub section_header_height: f32,
    /// Height of each section footer. 0 disables section footers.
    pub section_footer_height: f32,
    /// Inset around the cell area of each section, inside the section's
    /// header and footer and the content edges.
    pub section_cell_inset: EdgeInsets,
    /// Size of each cell, unless the data source overrides per item.
    pub cell_size: Size,
    /// Horizontal spacing between cells.
    pub spacing: f32,
    /// Layout-wide header decoration, measured by width-constrained fit.
    #[serde(skip)]
    pub header: Option<Box<dyn Measurable>>,
    /// Layout-wide footer decoration, measured by width-constrained fit.
    #[serde(skip)]
    pub footer: Option<Box<dyn Measurable>>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfConfig {
    /// Create a configuration with default values: no supplementaries, no
    /// decorations, zero insets, zero cell size, spacing of 8.
    #[must_use]
    pub fn new() -> Self {
        Self {
            section_header_height: 0.0,
            section_footer_height: 0.0,
            section_cell_inset: EdgeInsets::ZERO,
            cell_size: Size::ZERO,
            spacing: DEFAULT_SPACING,
            header: None,
            footer: None,
        }
    }

    /// Set the section header height.
    #[must_use]
    pub fn with_section_header_height(mut self, height: f32) -> Self {
        self.section_header_height = height;
        self
    }

    /// Set the section footer height.
    #[must_use]
    pub fn with_section_footer_height(mut self, height: f32) -> Self {
        self.section_footer_height = height;
        self
    }

    /// Set the cell-area inset.
    #[must_use]
    pub fn with_cell_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_cell_inset = inset;
        self
    }

    /// Set the cell size.
    #[must_use]
    pub fn with_cell_size(mut self, size: Size) -> Self {
        self.cell_size = size;
        self
    }

    /// Set the spacing between cells.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the layout-wide header decoration.
    #[must_use]
    pub fn with_header(mut self, header: impl Measurable + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    /// Set the layout-wide footer decoration.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Measurable + 'static) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estante_core::FixedHeight;

    #[test]
    fn test_config_defaults() {
        let config = ShelfConfig::new();
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert_eq!(config.section_header_height, 0.0);
        assert_eq!(config.cell_size, Size::ZERO);
        assert!(config.header.is_none());
        assert!(config.footer.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ShelfConfig::new()
            .with_section_header_height(30.0)
            .with_cell_inset(EdgeInsets::uniform(4.0))
            .with_cell_size(Size::new(100.0, 100.0))
            .with_spacing(10.0)
            .with_header(FixedHeight::new(44.0));
        assert_eq!(config.section_header_height, 30.0);
        assert_eq!(config.section_cell_inset.left, 4.0);
        assert_eq!(config.spacing, 10.0);
        assert!(config.header.is_some());
        assert!(config.footer.is_none());
    }
}
