//! Reference shapes and their normalized, cached form.

use crate::digit::Digit;
use crate::geometry::Point;
use crate::util::{InkDigitError, InkDigitResult};

pub(crate) mod library;
mod raw;

pub use library::{NormalizedTemplate, TemplateLibrary, DEFAULT_RESAMPLE_POINTS};

/// Raw, author-facing reference polyline for one digit.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    digit: Digit,
    points: Vec<Point>,
}

impl Template {
    /// Creates a template from raw coordinates.
    pub fn new(digit: Digit, points: Vec<Point>) -> InkDigitResult<Self> {
        if points.is_empty() {
            return Err(InkDigitError::EmptyTemplate {
                digit: digit.value(),
            });
        }
        Ok(Self { digit, points })
    }

    /// The built-in reference set: every variant for every digit.
    pub fn builtin() -> Vec<Template> {
        let mut out = Vec::new();
        for digit in Digit::ALL {
            for shape in raw::RAW_TEMPLATES[digit.index()] {
                out.push(Template {
                    digit,
                    points: shape.iter().copied().map(Point::from).collect(),
                });
            }
        }
        out
    }

    /// Digit this shape represents.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Raw coordinates as authored.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::Template;
    use crate::digit::Digit;
    use crate::util::InkDigitError;

    #[test]
    fn builtin_covers_every_digit() {
        let builtin = Template::builtin();
        for digit in Digit::ALL {
            assert!(builtin.iter().any(|t| t.digit() == digit));
        }
        let sixes = builtin.iter().filter(|t| t.digit().value() == 6).count();
        assert_eq!(sixes, 3);
        let zeros = builtin.iter().filter(|t| t.digit().value() == 0).count();
        assert_eq!(zeros, 1);
    }

    #[test]
    fn empty_template_is_rejected() {
        let digit = Digit::new(3).unwrap();
        assert_eq!(
            Template::new(digit, Vec::new()),
            Err(InkDigitError::EmptyTemplate { digit: 3 })
        );
    }
}
