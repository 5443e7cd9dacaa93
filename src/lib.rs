//! inkdigit recognizes a single handwritten digit from freehand pointer ink.
//!
//! Ink is resampled and normalized, scored against a fixed library of
//! reference shapes in both traversal directions, corrected by digit-specific
//! structural checks, and accepted only when the winner is both close enough
//! and clearly ahead of the runner-up. A [`Surface`] wraps the recognizer in a
//! gesture state machine that separates taps from drawings and waits for a
//! quiet period so multi-stroke digits are classified once.
//!
//! Digit scoring can run in parallel with the `rayon` feature; the `tracing`
//! feature instruments recognition and gesture decisions.

mod candidate;
mod critic;
pub mod digit;
pub mod geometry;
pub mod gesture;
pub mod ink;
mod kernel;
pub mod lowlevel;
pub mod recognize;
pub mod template;
mod trace;
pub mod util;

pub use candidate::gate::Rejection;
pub use candidate::Candidate;
pub use digit::Digit;
pub use geometry::{Bounds, Point};
pub use gesture::{
    Debounce, GestureConfig, GestureEvent, GestureSink, Phase, Pointer, PointerKind, Surface,
};
pub use ink::{Ink, Stroke};
pub use recognize::{recognize, Explanation, Outcome, Recognizer, RecognizerConfig};
pub use template::{NormalizedTemplate, Template, TemplateLibrary};
pub use util::{InkDigitError, InkDigitResult};
