//! Process-wide library of normalized templates.
//!
//! Compiling the library resamples, centers, and scales every reference shape
//! once, so recognition only pays for candidate normalization. The default
//! library is built lazily on first use and stored in a `OnceLock`; it is never
//! mutated afterwards and can be shared by any number of surfaces.

use crate::digit::Digit;
use crate::geometry::{normalize, Point};
use crate::template::Template;
use crate::util::{InkDigitError, InkDigitResult};
use std::sync::{Arc, OnceLock};

/// Point count used by the default library.
pub const DEFAULT_RESAMPLE_POINTS: usize = 64;

/// One reference shape after resampling and normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedTemplate {
    digit: Digit,
    points: Vec<Point>,
}

impl NormalizedTemplate {
    /// Digit this shape represents.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Normalized points; always `resample_points` long.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Read-only mapping from digit to its normalized variants.
#[derive(Debug)]
pub struct TemplateLibrary {
    resample_points: usize,
    by_digit: Vec<Vec<NormalizedTemplate>>,
}

static GLOBAL: OnceLock<Arc<TemplateLibrary>> = OnceLock::new();

impl TemplateLibrary {
    /// Builds a library from arbitrary templates.
    pub fn build(templates: &[Template], resample_points: usize) -> InkDigitResult<Self> {
        if resample_points < 2 {
            return Err(InkDigitError::InvalidConfig {
                field: "resample_points",
                reason: "must be at least 2",
            });
        }
        Ok(Self::compile(templates, resample_points))
    }

    /// Builds the built-in reference set at the given point count.
    pub fn builtin(resample_points: usize) -> InkDigitResult<Self> {
        Self::build(&Template::builtin(), resample_points)
    }

    /// Shared built-in library at [`DEFAULT_RESAMPLE_POINTS`].
    pub fn global() -> Arc<TemplateLibrary> {
        GLOBAL
            .get_or_init(|| {
                Arc::new(Self::compile(
                    &Template::builtin(),
                    DEFAULT_RESAMPLE_POINTS,
                ))
            })
            .clone()
    }

    fn compile(templates: &[Template], resample_points: usize) -> Self {
        let mut by_digit: Vec<Vec<NormalizedTemplate>> = vec![Vec::new(); Digit::ALL.len()];
        for tpl in templates {
            by_digit[tpl.digit().index()].push(NormalizedTemplate {
                digit: tpl.digit(),
                points: normalize(tpl.points(), resample_points),
            });
        }
        Self {
            resample_points,
            by_digit,
        }
    }

    /// Point count every normalized template was resampled to.
    pub fn resample_points(&self) -> usize {
        self.resample_points
    }

    /// Variants for `digit`; empty if the library has none.
    pub fn templates_for(&self, digit: Digit) -> &[NormalizedTemplate] {
        &self.by_digit[digit.index()]
    }

    /// Total number of variants across all digits.
    pub fn len(&self) -> usize {
        self.by_digit.iter().map(Vec::len).sum()
    }

    /// Returns true if the library holds no variants.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{TemplateLibrary, DEFAULT_RESAMPLE_POINTS};
    use crate::digit::Digit;
    use crate::geometry::get_bounds;
    use crate::util::InkDigitError;
    use std::sync::Arc;

    #[test]
    fn global_is_shared() {
        let a = TemplateLibrary::global();
        let b = TemplateLibrary::global();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.resample_points(), DEFAULT_RESAMPLE_POINTS);
        assert_eq!(a.len(), 23);
    }

    #[test]
    fn normalized_templates_fill_unit_box() {
        let lib = TemplateLibrary::global();
        for digit in Digit::ALL {
            for tpl in lib.templates_for(digit) {
                assert_eq!(tpl.points().len(), DEFAULT_RESAMPLE_POINTS);
                let b = get_bounds(tpl.points()).unwrap();
                assert!(b.min_y.abs() < 1e-5, "digit {digit}");
                assert!((b.max_y - 1.0).abs() < 1e-5, "digit {digit}");
            }
        }
    }

    #[test]
    fn build_rejects_tiny_point_count() {
        let err = TemplateLibrary::builtin(1).err().unwrap();
        assert_eq!(
            err,
            InkDigitError::InvalidConfig {
                field: "resample_points",
                reason: "must be at least 2",
            }
        );
    }

    #[test]
    fn custom_point_count_is_respected() {
        let lib = TemplateLibrary::builtin(32).unwrap();
        let one = Digit::new(1).unwrap();
        assert_eq!(lib.templates_for(one).len(), 2);
        assert!(lib.templates_for(one).iter().all(|t| t.points().len() == 32));
    }
}
