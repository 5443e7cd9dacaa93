//! Per-digit candidates, ranking, and the confidence gate.

pub(crate) mod gate;
pub(crate) mod rank;

use crate::digit::Digit;

/// Score of one digit for one classification call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Digit being scored.
    pub digit: Digit,
    /// Best shape distance over the digit's template variants.
    pub distance: f32,
    /// Structural critic penalty.
    pub penalty: f32,
}

impl Candidate {
    /// Total score; lower is better.
    pub fn score(&self) -> f32 {
        self.distance + self.penalty
    }
}
