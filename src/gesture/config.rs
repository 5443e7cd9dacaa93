//! Gesture capture tuning knobs.

use crate::util::{InkDigitError, InkDigitResult};
use std::time::Duration;

/// Configuration for a drawing [`Surface`](crate::Surface).
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Movement from the press position, in pixels, that turns a press into a
    /// drawing for mouse and touch pointers. Pens draw immediately.
    pub movement_threshold_px: f32,
    /// Quiet period after the last release before the ink is classified.
    pub debounce: Duration,
    /// Strokes with fewer points are dropped as accidental taps.
    pub min_stroke_points: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            movement_threshold_px: 8.0,
            debounce: Duration::from_millis(600),
            min_stroke_points: 3,
        }
    }
}

impl GestureConfig {
    /// Checks every field against its valid range.
    pub fn validate(&self) -> InkDigitResult<()> {
        if !self.movement_threshold_px.is_finite() || self.movement_threshold_px < 0.0 {
            return Err(InkDigitError::InvalidConfig {
                field: "movement_threshold_px",
                reason: "must be finite and >= 0",
            });
        }
        if self.min_stroke_points == 0 {
            return Err(InkDigitError::InvalidConfig {
                field: "min_stroke_points",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GestureConfig;

    #[test]
    fn default_is_valid() {
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_threshold_and_zero_points() {
        let cfg = GestureConfig {
            movement_threshold_px: -1.0,
            ..GestureConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = GestureConfig {
            min_stroke_points: 0,
            ..GestureConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
