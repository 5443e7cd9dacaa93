//! Two-stage confidence gate over ranked candidates.

use crate::candidate::Candidate;
use crate::digit::Digit;

/// Why a classification produced no digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The ink had fewer points than the configured minimum.
    TooFewPoints,
    /// No template was available to score against.
    NoCandidates,
    /// The best score exceeded the absolute distance threshold.
    AboveMaxDistance,
    /// The runner-up was within the confidence gap of the best score.
    AmbiguousGap,
}

/// Absolute and relative acceptance thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Best score must be at most this.
    pub max_distance: f32,
    /// Runner-up must trail the best score by at least this.
    pub min_gap: f32,
}

impl ConfidenceGate {
    /// Accepts the best of `ranked` (sorted ascending) or explains why not.
    ///
    /// A lone candidate has no runner-up and passes the relative check.
    pub fn evaluate(&self, ranked: &[Candidate]) -> Result<Digit, Rejection> {
        let best = ranked.first().ok_or(Rejection::NoCandidates)?;
        let best_score = best.score();
        if best_score.is_nan() || best_score > self.max_distance {
            return Err(Rejection::AboveMaxDistance);
        }
        if let Some(runner_up) = ranked.get(1) {
            let gap = runner_up.score() - best_score;
            if gap < self.min_gap {
                return Err(Rejection::AmbiguousGap);
            }
        }
        Ok(best.digit)
    }
}
