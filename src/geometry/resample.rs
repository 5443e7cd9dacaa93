//! Arc-length resampling of polylines.

use crate::geometry::{distance, path_length, Point};

/// Resamples a polyline to exactly `n` points evenly spaced by arc length.
///
/// The spacing is `path_length / (n - 1)`; interpolated points are inserted
/// along the original segments. A path with zero length yields `n` copies of
/// its first point. Floating-point drift is absorbed by padding with the last
/// input point or truncating, so the output length is always `n` for
/// non-empty input. An empty input yields an empty output.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if n < 2 {
        return vec![first; n];
    }

    let interval = path_length(points) / (n - 1) as f32;
    if interval <= 0.0 {
        return vec![first; n];
    }

    let mut out = Vec::with_capacity(n);
    out.push(first);
    let mut acc = 0.0f32;
    let mut prev = first;
    let mut idx = 1usize;
    while idx < points.len() && out.len() < n {
        let cur = points[idx];
        let d = distance(prev, cur);
        if d > 0.0 && acc + d >= interval {
            let q = prev.lerp(cur, (interval - acc) / d);
            out.push(q);
            // Continue from the inserted point along the same segment.
            prev = q;
            acc = 0.0;
        } else {
            acc += d;
            prev = cur;
            idx += 1;
        }
    }

    let last = points[points.len() - 1];
    out.resize(n, last);
    out
}
