//! Strokes and ink accumulated for one recognition attempt.

use crate::geometry::{get_bounds, Bounds, Point};

/// Points of one continuous contact, in capture order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates an empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample to the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the captured points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Ordered strokes belonging to one recognition attempt.
///
/// Stroke boundaries are only kept for bookkeeping; recognition sees the
/// concatenated path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ink {
    strokes: Vec<Stroke>,
}

impl Ink {
    /// Creates empty ink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Returns the strokes in capture order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns true if no stroke has been added.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Concatenates all strokes into one point sequence.
    pub fn flatten(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.point_count());
        for stroke in &self.strokes {
            out.extend_from_slice(stroke.points());
        }
        out
    }

    /// Bounding box over every stroke, or `None` if there are no points.
    pub fn bounds(&self) -> Option<Bounds> {
        get_bounds(&self.flatten())
    }

    /// Removes every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

impl From<Vec<Stroke>> for Ink {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }
}

impl FromIterator<Stroke> for Ink {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}
