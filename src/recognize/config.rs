//! Recognizer tuning knobs.

use crate::candidate::gate::ConfidenceGate;
use crate::template::DEFAULT_RESAMPLE_POINTS;
use crate::util::{InkDigitError, InkDigitResult};

/// Configuration for [`Recognizer`](crate::Recognizer).
#[derive(Clone, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Points every candidate and template is resampled to.
    pub resample_points: usize,
    /// Absolute gate: the best total score must not exceed this.
    pub max_distance: f32,
    /// Relative gate: the runner-up must trail the best by at least this.
    pub confidence_gap: f32,
    /// Ink with fewer raw points is rejected without scoring.
    pub min_points: usize,
    /// Width/height below which tall ink is taken as a 1 without scoring.
    pub vertical_line_ratio: f32,
    /// Minimum raw height, in pixels, for the vertical-line shortcut.
    pub vertical_line_min_height: f32,
    /// Score digits in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            resample_points: DEFAULT_RESAMPLE_POINTS,
            max_distance: 0.50,
            confidence_gap: 0.05,
            min_points: 5,
            vertical_line_ratio: 0.20,
            vertical_line_min_height: 20.0,
            parallel: false,
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> InkDigitResult<()> {
    if !value.is_finite() {
        return Err(InkDigitError::InvalidConfig {
            field,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(InkDigitError::InvalidConfig {
            field,
            reason: "must be >= 0",
        });
    }
    Ok(())
}

impl RecognizerConfig {
    /// Checks every field against its valid range.
    pub fn validate(&self) -> InkDigitResult<()> {
        if self.resample_points < 2 {
            return Err(InkDigitError::InvalidConfig {
                field: "resample_points",
                reason: "must be at least 2",
            });
        }
        if self.min_points < 2 {
            return Err(InkDigitError::InvalidConfig {
                field: "min_points",
                reason: "must be at least 2",
            });
        }
        non_negative("max_distance", self.max_distance)?;
        non_negative("confidence_gap", self.confidence_gap)?;
        non_negative("vertical_line_ratio", self.vertical_line_ratio)?;
        non_negative("vertical_line_min_height", self.vertical_line_min_height)?;
        Ok(())
    }

    pub(crate) fn gate(&self) -> ConfidenceGate {
        ConfidenceGate {
            max_distance: self.max_distance,
            min_gap: self.confidence_gap,
        }
    }
}
