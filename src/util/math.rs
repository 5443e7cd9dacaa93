//! Mathematical helpers for turn-angle analysis.

/// Converts radians to degrees.
pub(crate) fn rad_to_deg(angle_rad: f32) -> f32 {
    angle_rad.to_degrees()
}

/// Returns the angle in degrees between two vectors, in `[0, 180]`.
///
/// Returns `None` when either vector has zero length.
pub(crate) fn angle_between_deg(a: (f32, f32), b: (f32, f32)) -> Option<f32> {
    let mag = (a.0 * a.0 + a.1 * a.1).sqrt() * (b.0 * b.0 + b.1 * b.1).sqrt();
    if mag == 0.0 {
        return None;
    }
    let cos = ((a.0 * b.0 + a.1 * b.1) / mag).clamp(-1.0, 1.0);
    Some(rad_to_deg(cos.acos()))
}

#[cfg(test)]
mod tests {
    use super::{angle_between_deg, rad_to_deg};

    #[test]
    fn rad_to_deg_matches_pi() {
        assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_right_angle() {
        let angle = angle_between_deg((1.0, 0.0), (0.0, 2.0)).unwrap();
        assert!((angle - 90.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_opposite_and_parallel() {
        let straight = angle_between_deg((1.0, 0.0), (-3.0, 0.0)).unwrap();
        assert!((straight - 180.0).abs() < 1e-3);
        let folded = angle_between_deg((1.0, 1.0), (2.0, 2.0)).unwrap();
        assert!(folded.abs() < 0.1);
    }

    #[test]
    fn angle_between_zero_vector_is_none() {
        assert!(angle_between_deg((0.0, 0.0), (1.0, 0.0)).is_none());
    }
}
