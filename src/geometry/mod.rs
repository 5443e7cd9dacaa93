//! Geometry kernel for polyline normalization.
//!
//! All functions are pure and deterministic. Inputs are surface-local pixel
//! coordinates or already-normalized coordinates; degenerate inputs (zero path
//! length, zero extent) are handled with floors instead of division by zero.

mod resample;

pub use resample::resample;

/// Smallest extent used as a divisor when scaling an axis.
pub const MIN_DIMENSION: f32 = 0.01;

/// Real-valued 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Width over height, with the height floored at [`MIN_DIMENSION`].
    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height().max(MIN_DIMENSION)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of consecutive segment lengths; 0 for fewer than two points.
pub fn path_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Arithmetic mean of all points, or `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f32;
    Some(Point::new(sx / n, sy / n))
}

/// Shifts every point so the centroid lands on the origin.
pub fn translate_to_origin(points: &[Point]) -> Vec<Point> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| Point::new(p.x - c.x, p.y - c.y))
        .collect()
}

/// Bounding box of the points, or `None` for an empty slice.
pub fn get_bounds(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?;
    let init = Bounds {
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    Some(points.iter().skip(1).fold(init, |b, p| Bounds {
        min_x: b.min_x.min(p.x),
        max_x: b.max_x.max(p.x),
        min_y: b.min_y.min(p.y),
        max_y: b.max_y.max(p.y),
    }))
}

/// Rescales each axis independently into `[0, 1]`.
///
/// Axis extents are floored at [`MIN_DIMENSION`], so a straight horizontal or
/// vertical stroke keeps its flat axis near 0 instead of dividing by zero.
pub fn normalize_scale(points: &[Point]) -> Vec<Point> {
    let Some(bounds) = get_bounds(points) else {
        return Vec::new();
    };
    let width = bounds.width().max(MIN_DIMENSION);
    let height = bounds.height().max(MIN_DIMENSION);
    points
        .iter()
        .map(|p| Point::new((p.x - bounds.min_x) / width, (p.y - bounds.min_y) / height))
        .collect()
}

/// Full normalization: resample, translate to origin, scale per axis.
pub fn normalize(points: &[Point], n: usize) -> Vec<Point> {
    normalize_scale(&translate_to_origin(&resample(points, n)))
}

/// Returns the points in reverse traversal order.
pub fn reversed(points: &[Point]) -> Vec<Point> {
    points.iter().rev().copied().collect()
}
