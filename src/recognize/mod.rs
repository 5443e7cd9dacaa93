//! Classifier: fast path, normalization, scoring, ranking, and gating.
//!
//! A recognizer holds its configuration and a shared, read-only template
//! library. Each call is independent; nothing carries over between calls.

mod config;

pub use config::RecognizerConfig;

use crate::candidate::gate::Rejection;
use crate::candidate::rank::sort_candidates_asc;
use crate::candidate::Candidate;
use crate::critic::ZoneProfile;
use crate::digit::Digit;
use crate::geometry::{get_bounds, normalize, Bounds, Point};
use crate::ink::Ink;
use crate::kernel::digit_distance;
use crate::template::DEFAULT_RESAMPLE_POINTS;
use crate::template::TemplateLibrary;
use crate::trace::{trace_event, trace_span};
use crate::util::{InkDigitError, InkDigitResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::sync::Arc;

/// Final decision of one classification call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Tall, narrow ink taken as a 1 without scoring.
    FastPath(Digit),
    /// The best candidate passed both gates.
    Accepted(Digit),
    /// No digit; the caller should ask for a redraw.
    Rejected(Rejection),
}

impl Outcome {
    /// The recognized digit, if any.
    pub fn digit(&self) -> Option<Digit> {
        match *self {
            Outcome::FastPath(digit) | Outcome::Accepted(digit) => Some(digit),
            Outcome::Rejected(_) => None,
        }
    }
}

/// Outcome together with the ranked candidates that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    /// Final decision.
    pub outcome: Outcome,
    /// Candidates sorted by ascending score; empty when scoring was skipped.
    pub candidates: Vec<Candidate>,
    /// Raw extent of the ink, if it had any points.
    pub raw_bounds: Option<Bounds>,
}

/// Freehand single-digit recognizer.
#[derive(Clone, Debug)]
pub struct Recognizer {
    cfg: RecognizerConfig,
    library: Arc<TemplateLibrary>,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer {
    /// Recognizer with default settings over the shared built-in library.
    pub fn new() -> Self {
        Self {
            cfg: RecognizerConfig::default(),
            library: TemplateLibrary::global(),
        }
    }

    /// Recognizer with custom settings over the built-in templates.
    ///
    /// The shared library is reused when the point count matches the default;
    /// otherwise a private library is compiled.
    pub fn with_config(cfg: RecognizerConfig) -> InkDigitResult<Self> {
        cfg.validate()?;
        let library = if cfg.resample_points == DEFAULT_RESAMPLE_POINTS {
            TemplateLibrary::global()
        } else {
            Arc::new(TemplateLibrary::builtin(cfg.resample_points)?)
        };
        Ok(Self { cfg, library })
    }

    /// Recognizer over a caller-supplied library.
    pub fn with_library(
        library: Arc<TemplateLibrary>,
        cfg: RecognizerConfig,
    ) -> InkDigitResult<Self> {
        cfg.validate()?;
        if library.resample_points() != cfg.resample_points {
            return Err(InkDigitError::InvalidConfig {
                field: "resample_points",
                reason: "must match the template library",
            });
        }
        Ok(Self { cfg, library })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RecognizerConfig {
        &self.cfg
    }

    /// Returns the template library.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Classifies ink as a digit, or `None` when the drawing is too short or
    /// ambiguous.
    pub fn recognize(&self, ink: &Ink) -> Option<Digit> {
        self.explain_points(&ink.flatten()).outcome.digit()
    }

    /// Classifies an already-flattened point sequence.
    pub fn recognize_points(&self, points: &[Point]) -> Option<Digit> {
        self.explain_points(points).outcome.digit()
    }

    /// Classifies ink and reports the ranked candidates.
    pub fn explain(&self, ink: &Ink) -> Explanation {
        self.explain_points(&ink.flatten())
    }

    /// Classifies a flattened point sequence and reports the ranked candidates.
    pub fn explain_points(&self, raw: &[Point]) -> Explanation {
        let _span = trace_span!("recognize", points = raw.len()).entered();

        let raw_bounds = get_bounds(raw);
        let bounds = match raw_bounds {
            Some(bounds) if raw.len() >= self.cfg.min_points => bounds,
            _ => {
                trace_event!("too_few_points", points = raw.len());
                return Explanation {
                    outcome: Outcome::Rejected(Rejection::TooFewPoints),
                    candidates: Vec::new(),
                    raw_bounds,
                };
            }
        };

        if let Some(one) = self.vertical_line(&bounds) {
            trace_event!("fast_path_one", height = bounds.height());
            return Explanation {
                outcome: Outcome::FastPath(one),
                candidates: Vec::new(),
                raw_bounds,
            };
        }

        let points = normalize(raw, self.cfg.resample_points);
        let mut candidates = self.score_digits(&points, bounds);
        sort_candidates_asc(&mut candidates);

        let outcome = match self.cfg.gate().evaluate(&candidates) {
            Ok(digit) => Outcome::Accepted(digit),
            Err(reason) => Outcome::Rejected(reason),
        };
        if let [best, rest @ ..] = candidates.as_slice() {
            trace_event!(
                "candidates_ranked",
                best_digit = best.digit.value(),
                best_score = best.score(),
                gap = rest.first().map_or(f32::INFINITY, |r| r.score() - best.score()),
                accepted = outcome.digit().is_some(),
            );
        }

        Explanation {
            outcome,
            candidates,
            raw_bounds,
        }
    }

    fn vertical_line(&self, bounds: &Bounds) -> Option<Digit> {
        let height = bounds.height();
        if height > self.cfg.vertical_line_min_height
            && bounds.width() / height < self.cfg.vertical_line_ratio
        {
            Digit::new(1)
        } else {
            None
        }
    }

    fn score_digits(&self, points: &[Point], raw_bounds: Bounds) -> Vec<Candidate> {
        let _span = trace_span!("score_digits", parallel = self.cfg.parallel).entered();
        let profile = ZoneProfile::new(points, raw_bounds);
        let score = |digit: Digit| -> Option<Candidate> {
            let variants = self.library.templates_for(digit);
            if variants.is_empty() {
                return None;
            }
            Some(Candidate {
                digit,
                distance: digit_distance(points, variants),
                penalty: profile.map_or(0.0, |p| p.penalty(digit)),
            })
        };

        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                return Digit::ALL[..].par_iter().filter_map(|&d| score(d)).collect();
            }
        }

        Digit::ALL.iter().filter_map(|&d| score(d)).collect()
    }
}

/// Classifies ink with the default recognizer.
pub fn recognize(ink: &Ink) -> Option<Digit> {
    Recognizer::new().recognize(ink)
}

#[cfg(test)]
mod tests {
    use super::{recognize, Outcome, Recognizer, RecognizerConfig};
    use crate::candidate::gate::Rejection;
    use crate::digit::Digit;
    use crate::geometry::Point;
    use crate::ink::{Ink, Stroke};
    use crate::template::{Template, TemplateLibrary};
    use crate::util::InkDigitError;
    use std::sync::Arc;

    fn ink(raw: &[(f32, f32)]) -> Ink {
        Ink::from(vec![raw.iter().copied().map(Point::from).collect::<Stroke>()])
    }

    fn circle() -> Ink {
        ink(&[
            (20.0, 0.0),
            (40.0, 10.0),
            (40.0, 30.0),
            (20.0, 40.0),
            (0.0, 30.0),
            (0.0, 10.0),
            (20.0, 0.0),
        ])
    }

    #[test]
    fn four_points_are_rejected() {
        let short = ink(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let explanation = Recognizer::new().explain(&short);
        assert_eq!(explanation.outcome, Outcome::Rejected(Rejection::TooFewPoints));
        assert!(explanation.candidates.is_empty());
        assert!(recognize(&short).is_none());
        assert!(recognize(&Ink::new()).is_none());
    }

    #[test]
    fn vertical_line_skips_scoring() {
        let line = ink(&[
            (40.0, 0.0),
            (40.5, 20.0),
            (41.0, 40.0),
            (41.5, 60.0),
            (42.0, 80.0),
        ]);
        let explanation = Recognizer::new().explain(&line);
        assert_eq!(explanation.outcome, Outcome::FastPath(Digit::new(1).unwrap()));
        assert!(explanation.candidates.is_empty());
    }

    #[test]
    fn short_vertical_line_is_scored() {
        let line = ink(&[(5.0, 0.0), (5.0, 4.0), (5.0, 8.0), (5.0, 12.0), (5.0, 16.0)]);
        let explanation = Recognizer::new().explain(&line);
        assert!(!matches!(explanation.outcome, Outcome::FastPath(_)));
        assert_eq!(explanation.candidates.len(), 10);
    }

    #[test]
    fn circle_is_zero() {
        let explanation = Recognizer::new().explain(&circle());
        assert_eq!(explanation.outcome, Outcome::Accepted(Digit::new(0).unwrap()));
        let ranked = &explanation.candidates;
        assert!(ranked.windows(2).all(|w| w[0].score() <= w[1].score()));
        assert!(ranked[1].score() - ranked[0].score() >= 0.05);
    }

    #[test]
    fn recognition_is_deterministic() {
        let recognizer = Recognizer::new();
        let a = recognizer.explain(&circle());
        let b = recognizer.explain(&circle());
        assert_eq!(a, b);
    }

    #[test]
    fn strict_gap_rejects_circle() {
        let recognizer = Recognizer::with_config(RecognizerConfig {
            confidence_gap: 5.0,
            ..RecognizerConfig::default()
        })
        .unwrap();
        assert_eq!(
            recognizer.explain(&circle()).outcome,
            Outcome::Rejected(Rejection::AmbiguousGap)
        );
    }

    #[test]
    fn strict_distance_rejects_circle() {
        let recognizer = Recognizer::with_config(RecognizerConfig {
            max_distance: 0.01,
            ..RecognizerConfig::default()
        })
        .unwrap();
        assert_eq!(
            recognizer.explain(&circle()).outcome,
            Outcome::Rejected(Rejection::AboveMaxDistance)
        );
    }

    #[test]
    fn custom_library_scores_only_its_digits() {
        let zero = Digit::new(0).unwrap();
        let seven = Digit::new(7).unwrap();
        let templates = vec![
            Template::new(
                zero,
                vec![
                    Point::new(0.5, 0.0),
                    Point::new(1.0, 0.5),
                    Point::new(0.5, 1.0),
                    Point::new(0.0, 0.5),
                    Point::new(0.5, 0.0),
                ],
            )
            .unwrap(),
            Template::new(
                seven,
                vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.4, 1.0)],
            )
            .unwrap(),
        ];
        let library = Arc::new(TemplateLibrary::build(&templates, 64).unwrap());
        let recognizer = Recognizer::with_library(library, RecognizerConfig::default()).unwrap();
        let explanation = recognizer.explain(&circle());
        assert_eq!(explanation.candidates.len(), 2);
        assert_eq!(explanation.outcome.digit(), Some(zero));
    }

    #[test]
    fn library_point_count_must_match() {
        let library = Arc::new(TemplateLibrary::builtin(32).unwrap());
        let err = Recognizer::with_library(library, RecognizerConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            InkDigitError::InvalidConfig {
                field: "resample_points",
                ..
            }
        ));
    }

    #[test]
    fn empty_library_has_no_candidates() {
        let library = Arc::new(TemplateLibrary::build(&[], 64).unwrap());
        let recognizer = Recognizer::with_library(library, RecognizerConfig::default()).unwrap();
        assert_eq!(
            recognizer.explain(&circle()).outcome,
            Outcome::Rejected(Rejection::NoCandidates)
        );
    }
}
