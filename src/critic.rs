//! Structural critic: digit-specific corrective penalties.
//!
//! Mean point distance alone confuses digits whose resampled point clouds look
//! alike (0 vs 6, 8 vs 9, 4 vs 9). Each digit carries a small set of
//! necessary-condition checks on the normalized candidate; a failed check adds
//! a penalty to that digit's shape score rather than rejecting it outright, so
//! a borderline drawing can still win when nothing fits better.
//!
//! All candidate coordinates here are in the normalized unit box, with `y`
//! growing downwards.

use crate::digit::Digit;
use crate::geometry::{distance, Bounds, Point};
use crate::util::math::angle_between_deg;

/// Axis-aligned sub-rectangle of the unit box (bounds inclusive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Zone {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Returns true if `p` lies inside the zone or on its edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

// Shared zones.
const TOP: Zone = Zone::new(0.0, 1.0, 0.0, 0.5);
const BOTTOM: Zone = Zone::new(0.0, 1.0, 0.5, 1.0);
const LEFT: Zone = Zone::new(0.0, 0.5, 0.0, 1.0);
const RIGHT: Zone = Zone::new(0.5, 1.0, 0.0, 1.0);
const CENTER: Zone = Zone::new(0.3, 0.7, 0.3, 0.7);
const TOP_LEFT: Zone = Zone::new(0.0, 0.5, 0.0, 0.5);
const TOP_RIGHT: Zone = Zone::new(0.5, 1.0, 0.0, 0.5);

// 0: closed loop with an empty middle.
const ZERO_MAX_GAP: f32 = 0.35;
const ZERO_OPEN_PENALTY: f32 = 1.0;
const ZERO_MAX_CENTER: f32 = 0.15;
const ZERO_FILLED_PENALTY: f32 = 0.8;

// 1: narrow, and not piled up on one side.
const ONE_MAX_ASPECT: f32 = 0.5;
const ONE_WIDE_PENALTY: f32 = 1.0;
const ONE_MAX_SIDE: f32 = 0.8;
const ONE_LOPSIDED_PENALTY: f32 = 0.5;

// 2: a flat base and an upper-left start.
const TWO_BASE: Zone = Zone::new(0.0, 1.0, 0.85, 1.0);
const TWO_MIN_BASE: f32 = 0.15;
const TWO_NO_BASE_PENALTY: f32 = 0.5;
const TWO_HEAD: Zone = Zone::new(0.0, 0.5, 0.0, 0.3);
const TWO_MIN_HEAD: f32 = 0.05;
const TWO_NO_HEAD_PENALTY: f32 = 0.3;

// 3: open on the left, pinched in the middle.
const THREE_LEFT_BAND: Zone = Zone::new(0.0, 0.25, 0.3, 0.7);
const THREE_MAX_LEFT: f32 = 0.05;
const THREE_CLOSED_PENALTY: f32 = 0.8;
const THREE_MIN_CENTER: f32 = 0.1;
const THREE_NO_PINCH_PENALTY: f32 = 0.4;

// 4: crossbar through the middle, does not start mid-right.
const FOUR_MIN_CENTER: f32 = 0.1;
const FOUR_NO_CROSS_PENALTY: f32 = 0.3;
const FOUR_BAD_START: Point = Point::new(1.0, 0.5);
const FOUR_MIN_START_GAP: f32 = 0.3;
const FOUR_BAD_START_PENALTY: f32 = 0.5;

// 5: a corner early in the path.
const FIVE_CORNER_FROM: f32 = 0.0;
const FIVE_CORNER_TO: f32 = 0.4;
const FIVE_CORNER_MAX_DEG: f32 = 110.0;
const FIVE_NO_CORNER_PENALTY: f32 = 0.4;

// 6: ends low with a bottom loop, does not start low-left.
const SIX_MIN_END_Y: f32 = 0.5;
const SIX_HIGH_END_PENALTY: f32 = 1.0;
const SIX_LOOP: Zone = Zone::new(0.2, 0.8, 0.6, 0.9);
const SIX_MIN_LOOP: f32 = 0.1;
const SIX_NO_LOOP_PENALTY: f32 = 0.5;
const SIX_MIN_START_X: f32 = 0.2;
const SIX_MAX_START_Y: f32 = 0.2;
const SIX_LOW_START_PENALTY: f32 = 0.5;

// 7: a top bar and an empty lower-left.
const SEVEN_BAR: Zone = Zone::new(0.0, 1.0, 0.0, 0.15);
const SEVEN_MIN_BAR: f32 = 0.1;
const SEVEN_NO_BAR_PENALTY: f32 = 0.7;
const SEVEN_FOOT: Zone = Zone::new(0.0, 0.4, 0.6, 1.0);
const SEVEN_MAX_FOOT: f32 = 0.1;
const SEVEN_FOOT_PENALTY: f32 = 0.5;

// 8: dense crossing and mass above and below.
const EIGHT_MIN_CENTER: f32 = 0.15;
const EIGHT_NO_CROSS_PENALTY: f32 = 0.8;
const EIGHT_MIN_HALF: f32 = 0.2;
const EIGHT_LOPSIDED_PENALTY: f32 = 0.5;

// 9: a closed top loop and a tail that ends low.
const NINE_MIN_QUADRANT: f32 = 0.1;
const NINE_OPEN_LOOP_PENALTY: f32 = 0.5;
const NINE_MIN_END_Y: f32 = 0.6;
const NINE_HIGH_END_PENALTY: f32 = 1.0;
const NINE_MIN_TOP: f32 = 0.2;
const NINE_LIGHT_TOP_PENALTY: f32 = 0.5;

/// Samples between the corner point and each of its neighbors when measuring
/// a turn. Resampling chamfers a corner across adjacent samples, so the turn
/// only shows at a wider span.
pub const SHARP_TURN_SPAN: usize = 3;

/// Fraction of points inside `zone`; 0 for an empty slice.
pub fn zone_density(points: &[Point], zone: Zone) -> f32 {
    if points.is_empty() {
        return 0.0;
    }
    let inside = points.iter().filter(|&&p| zone.contains(p)).count();
    inside as f32 / points.len() as f32
}

/// Looks for a turn sharper than `max_angle_deg` between the `from` and `to`
/// fractions of the path.
///
/// The angle at `p[i + SPAN]` is taken between the vectors pointing back to
/// `p[i]` and forward to `p[i + 2 * SPAN]`; a straight run measures 180
/// degrees. Scanning advances two samples at a time.
pub fn has_sharp_turn(points: &[Point], from: f32, to: f32, max_angle_deg: f32) -> bool {
    let len = points.len() as f32;
    let start = (len * from).floor() as usize;
    let end = ((len * to).floor() as usize).min(points.len());
    let last = end.saturating_sub(2 * SHARP_TURN_SPAN);
    (start..last).step_by(2).any(|i| {
        let a = points[i];
        let b = points[i + SHARP_TURN_SPAN];
        let c = points[i + 2 * SHARP_TURN_SPAN];
        angle_between_deg((a.x - b.x, a.y - b.y), (c.x - b.x, c.y - b.y))
            .is_some_and(|angle| angle < max_angle_deg)
    })
}

/// Features shared by every digit's rules, computed once per candidate.
#[derive(Clone, Copy, Debug)]
pub struct ZoneProfile<'a> {
    points: &'a [Point],
    raw_bounds: Bounds,
    start: Point,
    end: Point,
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
    center: f32,
}

impl<'a> ZoneProfile<'a> {
    /// Profiles a normalized candidate; `raw_bounds` is the un-normalized
    /// extent of the ink. Returns `None` for an empty candidate.
    pub fn new(points: &'a [Point], raw_bounds: Bounds) -> Option<Self> {
        let start = *points.first()?;
        let end = *points.last()?;
        Some(Self {
            points,
            raw_bounds,
            start,
            end,
            top: zone_density(points, TOP),
            bottom: zone_density(points, BOTTOM),
            left: zone_density(points, LEFT),
            right: zone_density(points, RIGHT),
            center: zone_density(points, CENTER),
        })
    }

    fn density(&self, zone: Zone) -> f32 {
        zone_density(self.points, zone)
    }

    /// Total penalty for interpreting the candidate as `digit`.
    pub fn penalty(&self, digit: Digit) -> f32 {
        match digit.value() {
            0 => self.zero(),
            1 => self.one(),
            2 => self.two(),
            3 => self.three(),
            4 => self.four(),
            5 => self.five(),
            6 => self.six(),
            7 => self.seven(),
            8 => self.eight(),
            _ => self.nine(),
        }
    }

    fn zero(&self) -> f32 {
        let mut penalty = 0.0;
        // An open end usually means a 6.
        if distance(self.start, self.end) > ZERO_MAX_GAP {
            penalty += ZERO_OPEN_PENALTY;
        }
        if self.center > ZERO_MAX_CENTER {
            penalty += ZERO_FILLED_PENALTY;
        }
        penalty
    }

    fn one(&self) -> f32 {
        let mut penalty = 0.0;
        if self.raw_bounds.aspect_ratio() > ONE_MAX_ASPECT {
            penalty += ONE_WIDE_PENALTY;
        }
        if self.left > ONE_MAX_SIDE || self.right > ONE_MAX_SIDE {
            penalty += ONE_LOPSIDED_PENALTY;
        }
        penalty
    }

    fn two(&self) -> f32 {
        let mut penalty = 0.0;
        if self.density(TWO_BASE) < TWO_MIN_BASE {
            penalty += TWO_NO_BASE_PENALTY;
        }
        if self.density(TWO_HEAD) < TWO_MIN_HEAD {
            penalty += TWO_NO_HEAD_PENALTY;
        }
        penalty
    }

    fn three(&self) -> f32 {
        let mut penalty = 0.0;
        if self.density(THREE_LEFT_BAND) > THREE_MAX_LEFT {
            penalty += THREE_CLOSED_PENALTY;
        }
        if self.center < THREE_MIN_CENTER {
            penalty += THREE_NO_PINCH_PENALTY;
        }
        penalty
    }

    fn four(&self) -> f32 {
        let mut penalty = 0.0;
        if self.center < FOUR_MIN_CENTER {
            penalty += FOUR_NO_CROSS_PENALTY;
        }
        if distance(self.start, FOUR_BAD_START) < FOUR_MIN_START_GAP {
            penalty += FOUR_BAD_START_PENALTY;
        }
        penalty
    }

    fn five(&self) -> f32 {
        if has_sharp_turn(
            self.points,
            FIVE_CORNER_FROM,
            FIVE_CORNER_TO,
            FIVE_CORNER_MAX_DEG,
        ) {
            0.0
        } else {
            FIVE_NO_CORNER_PENALTY
        }
    }

    fn six(&self) -> f32 {
        let mut penalty = 0.0;
        if self.end.y < SIX_MIN_END_Y {
            penalty += SIX_HIGH_END_PENALTY;
        }
        if self.density(SIX_LOOP) < SIX_MIN_LOOP {
            penalty += SIX_NO_LOOP_PENALTY;
        }
        if self.start.x < SIX_MIN_START_X && self.start.y > SIX_MAX_START_Y {
            penalty += SIX_LOW_START_PENALTY;
        }
        penalty
    }

    fn seven(&self) -> f32 {
        let mut penalty = 0.0;
        if self.density(SEVEN_BAR) < SEVEN_MIN_BAR {
            penalty += SEVEN_NO_BAR_PENALTY;
        }
        if self.density(SEVEN_FOOT) > SEVEN_MAX_FOOT {
            penalty += SEVEN_FOOT_PENALTY;
        }
        penalty
    }

    fn eight(&self) -> f32 {
        let mut penalty = 0.0;
        if self.center < EIGHT_MIN_CENTER {
            penalty += EIGHT_NO_CROSS_PENALTY;
        }
        if self.top < EIGHT_MIN_HALF || self.bottom < EIGHT_MIN_HALF {
            penalty += EIGHT_LOPSIDED_PENALTY;
        }
        penalty
    }

    fn nine(&self) -> f32 {
        let mut penalty = 0.0;
        if self.density(TOP_LEFT) < NINE_MIN_QUADRANT {
            penalty += NINE_OPEN_LOOP_PENALTY;
        }
        if self.density(TOP_RIGHT) < NINE_MIN_QUADRANT {
            penalty += NINE_OPEN_LOOP_PENALTY;
        }
        // Curling back up means an 8 or a 0.
        if self.end.y < NINE_MIN_END_Y {
            penalty += NINE_HIGH_END_PENALTY;
        }
        if self.top < NINE_MIN_TOP {
            penalty += NINE_LIGHT_TOP_PENALTY;
        }
        penalty
    }
}

/// Penalty for `digit` given a normalized candidate and its raw extent.
pub fn structural_penalty(digit: Digit, points: &[Point], raw_bounds: Bounds) -> f32 {
    ZoneProfile::new(points, raw_bounds).map_or(0.0, |profile| profile.penalty(digit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{normalize, Point};

    fn digit(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    fn square_bounds() -> Bounds {
        Bounds {
            min_x: 0.0,
            max_x: 60.0,
            min_y: 0.0,
            max_y: 60.0,
        }
    }

    fn shape(raw: &[(f32, f32)]) -> Vec<Point> {
        let pts: Vec<Point> = raw.iter().copied().map(Point::from).collect();
        normalize(&pts, 64)
    }

    #[test]
    fn zone_density_counts_edges() {
        let pts = [Point::new(0.0, 0.0), Point::new(0.5, 0.5), Point::new(1.0, 1.0)];
        assert!((zone_density(&pts, TOP) - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(zone_density(&[], TOP), 0.0);
    }

    #[test]
    fn corner_is_detected_and_straight_run_is_not() {
        let corner = shape(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        assert!(has_sharp_turn(&corner, 0.0, 1.0, 110.0));
        let straight = shape(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(!has_sharp_turn(&straight, 0.0, 1.0, 110.0));
    }

    #[test]
    fn sharp_turn_window_too_small_is_false() {
        let corner = shape(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        assert!(!has_sharp_turn(&corner, 0.0, 0.05, 110.0));
    }

    #[test]
    fn open_loop_is_penalized_as_zero() {
        let closed = shape(&[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5), (0.5, 0.0)]);
        assert_eq!(structural_penalty(digit(0), &closed, square_bounds()), 0.0);
        let open = shape(&[(0.8, 0.0), (0.1, 0.4), (0.1, 0.9), (0.9, 0.9), (0.9, 0.5), (0.2, 0.5)]);
        assert!(structural_penalty(digit(0), &open, square_bounds()) >= ZERO_OPEN_PENALTY);
    }

    #[test]
    fn wide_ink_is_penalized_as_one() {
        let stick = shape(&[(0.5, 0.0), (0.5, 1.0)]);
        let wide = Bounds {
            min_x: 0.0,
            max_x: 50.0,
            min_y: 0.0,
            max_y: 60.0,
        };
        let narrow = Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 60.0,
        };
        let p_wide = structural_penalty(digit(1), &stick, wide);
        let p_narrow = structural_penalty(digit(1), &stick, narrow);
        assert!((p_wide - p_narrow - ONE_WIDE_PENALTY).abs() < 1e-6);
    }

    #[test]
    fn six_ending_high_is_penalized() {
        let nine = shape(&[(1.0, 1.0), (1.0, 0.5), (0.0, 0.5), (0.5, 0.0), (1.0, 0.3)]);
        assert!(structural_penalty(digit(6), &nine, square_bounds()) >= SIX_HIGH_END_PENALTY);
    }

    #[test]
    fn eight_needs_a_crossing() {
        let eight = shape(&[
            (0.5, 0.5),
            (0.9, 0.2),
            (0.5, 0.0),
            (0.1, 0.2),
            (0.5, 0.5),
            (0.9, 0.8),
            (0.5, 1.0),
            (0.1, 0.8),
            (0.5, 0.5),
        ]);
        assert_eq!(structural_penalty(digit(8), &eight, square_bounds()), 0.0);
        let zero = shape(&[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5), (0.5, 0.0)]);
        assert!(structural_penalty(digit(8), &zero, square_bounds()) >= EIGHT_NO_CROSS_PENALTY);
    }

    #[test]
    fn five_template_has_its_corner() {
        let five = shape(&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.4), (1.0, 0.6), (0.5, 1.0), (0.0, 0.9)]);
        assert_eq!(structural_penalty(digit(5), &five, square_bounds()), 0.0);
    }

    #[test]
    fn empty_candidate_has_no_penalty() {
        assert_eq!(structural_penalty(digit(4), &[], square_bounds()), 0.0);
    }
}
