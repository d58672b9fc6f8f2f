//! Pan gesture events delivered by the host toolkit.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanPhase {
    /// The drag started
    #[default]
    Began,
    /// The drag moved
    Changed,
    /// The drag ended
    Ended,
    /// The drag was cancelled by the host
    Cancelled,
}

impl PanPhase {
    /// Check if the gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// Check if the gesture has finished.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// A single pan gesture update.
///
/// `translation` is cumulative from the start of the drag, in the host's
/// coordinate space, matching the convention of native pan recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanEvent {
    /// Gesture phase
    pub phase: PanPhase,
    /// Position of the touch in content coordinates
    pub position: Point,
    /// Cumulative translation since the drag began
    pub translation: Point,
}

impl PanEvent {
    /// Create a pan event.
    #[must_use]
    pub const fn new(phase: PanPhase, position: Point, translation: Point) -> Self {
        Self {
            phase,
            position,
            translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_phase_is_active() {
        assert!(PanPhase::Began.is_active());
        assert!(PanPhase::Changed.is_active());
        assert!(!PanPhase::Ended.is_active());
    }

    #[test]
    fn test_pan_phase_is_end() {
        assert!(PanPhase::Ended.is_end());
        assert!(PanPhase::Cancelled.is_end());
        assert!(!PanPhase::Began.is_end());
    }
}
