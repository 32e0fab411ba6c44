//! lc-curve: curve sources and the point generator.
//!
//! A [`CurveSource`] describes where a learning curve's data comes from (raw
//! x,y text, a formula in `x`, or synthetic points with jitter); the
//! generator turns a source into an ordered sequence of
//! [`lc_core::PlotPoint`]s. Generation never fails outward: malformed raw
//! lines are dropped, failed formula samples degrade to zero, and the random
//! mode tolerates pathological counts. The preview must always have
//! something to draw.

pub mod generator;
pub mod source;

pub use generator::{generate_curve, CONFIDENCE_PLACEHOLDER};
pub use source::{
    CurveMode, CurveSource, FUNCTION_SAMPLE_COUNT, FUNCTION_SAMPLE_SPACING, MAX_POINT_COUNT,
    MIN_POINT_COUNT, RANDOM_TIME_STEP,
};
