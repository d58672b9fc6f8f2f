//! Core types for the estante shelf layout engine.
//!
//! This crate provides the foundational vocabulary shared by the layout
//! engine and its hosts:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`EdgeInsets`]
//! - Measurement: [`Constraints`] and the [`Measurable`] trait
//! - Pan gesture events: [`PanEvent`], [`PanPhase`]

mod constraints;
mod event;
mod geometry;
mod measure;

pub use constraints::Constraints;
pub use event::{PanEvent, PanPhase};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use measure::{FixedHeight, Measurable};
