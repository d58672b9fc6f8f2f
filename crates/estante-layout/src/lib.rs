//! Shelf layout engine for the estante framework.
//!
//! Implements an app-store style browsing layout: vertically stacked
//! sections, each independently horizontally pannable, with optional global
//! header/footer decorations and per-section header/footer bars. The engine
//! computes frames and invalidation decisions from a declarative
//! [`ShelfConfig`] and a [`ShelfDataSource`]; rendering, view reuse, and
//! gesture delivery stay in the host toolkit.
//!
//! # Panning without relayout
//!
//! A full pass sweeps all sections in O(total items). Per-section panning
//! instead goes through [`InvalidationContext::panning`]: the engine
//! translates the one affected section's cell frames in place and skips the
//! host's follow-up layout pass, keeping scroll ticks at O(items in one
//! section). See [`ShelfLayout`] for the protocol.

mod attributes;
mod config;
mod engine;
mod invalidation;
mod source;
mod state;
mod tracker;

pub use attributes::{ElementKind, ElementPath, ShelfAttributes};
pub use config::{ShelfConfig, DEFAULT_SPACING};
pub use engine::ShelfLayout;
pub use invalidation::{InvalidationContext, PanDelta};
pub use source::ShelfDataSource;
pub use state::{LayoutState, SectionGeometry};
pub use tracker::SectionTracker;
