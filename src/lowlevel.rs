//! Low-level building blocks for tuning tools and custom pipelines.
//!
//! These expose the geometry kernel, the shape scorer, the structural critic,
//! and the confidence gate individually. Most users should prefer
//! [`Recognizer`](crate::Recognizer) and [`Surface`](crate::Surface).

pub use crate::candidate::gate::ConfidenceGate;
pub use crate::candidate::rank::sort_candidates_asc;
pub use crate::critic::{
    has_sharp_turn, structural_penalty, zone_density, Zone, ZoneProfile, SHARP_TURN_SPAN,
};
pub use crate::geometry::{
    centroid, distance, get_bounds, normalize, normalize_scale, path_length, resample, reversed,
    translate_to_origin, MIN_DIMENSION,
};
pub use crate::kernel::{best_match_distance, digit_distance, path_distance};
pub use crate::template::DEFAULT_RESAMPLE_POINTS;
pub use crate::template::{NormalizedTemplate, Template, TemplateLibrary};
