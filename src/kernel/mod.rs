//! Shape scorer: point-wise distance between normalized polylines.
//!
//! Candidates and templates are resampled to the same point count, so the
//! distance is a plain mean over index-aligned pairs. Scoring against both
//! traversal directions makes the score independent of stroke direction.

use crate::geometry::{distance, Point};
use crate::template::NormalizedTemplate;

/// Mean Euclidean distance between index-aligned points.
///
/// Returns `f32::INFINITY` when the lengths differ or either path is empty.
pub fn path_distance(a: &[Point], b: &[Point]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return f32::INFINITY;
    }
    mean_distance(a.iter().copied().zip(b.iter().copied()), a.len())
}

/// Minimum of the forward and reversed-template distances.
pub fn best_match_distance(candidate: &[Point], template: &[Point]) -> f32 {
    if candidate.len() != template.len() || candidate.is_empty() {
        return f32::INFINITY;
    }
    let forward = path_distance(candidate, template);
    let backward = mean_distance(
        candidate.iter().copied().zip(template.iter().rev().copied()),
        candidate.len(),
    );
    forward.min(backward)
}

/// Best distance over every variant of one digit.
///
/// Returns `f32::INFINITY` when the digit has no variants.
pub fn digit_distance(candidate: &[Point], variants: &[NormalizedTemplate]) -> f32 {
    variants
        .iter()
        .map(|tpl| best_match_distance(candidate, tpl.points()))
        .fold(f32::INFINITY, f32::min)
}

fn mean_distance(pairs: impl Iterator<Item = (Point, Point)>, len: usize) -> f32 {
    let sum: f32 = pairs.map(|(p, q)| distance(p, q)).sum();
    sum / len as f32
}
