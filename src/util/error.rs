//! Error types for inkdigit.
//!
//! Recognition itself never fails; these errors only surface when building a
//! recognizer, a template library, or a gesture surface from invalid input.

use thiserror::Error;

/// Result alias for inkdigit operations.
pub type InkDigitResult<T> = std::result::Result<T, InkDigitError>;

/// Errors that can occur when constructing inkdigit components.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InkDigitError {
    /// A configuration field is out of its valid range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// A reference shape has no points.
    #[error("template for digit {digit} has no points")]
    EmptyTemplate { digit: u8 },
    /// A value outside 0..=9 was used as a digit.
    #[error("invalid digit: {0}")]
    InvalidDigit(u8),
}
