//! Curve source descriptions for learning-curve data.
//!
//! A source captures the user's input for one of the three entry modes.
//! Sources are plain data; turning one into plot points is the generator's
//! job (see [`crate::generator`]).

use lc_core::{LcResult, ensure_in_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of samples taken in function mode.
pub const FUNCTION_SAMPLE_COUNT: usize = 50;
/// Spacing between function-mode samples; the domain is fixed at [0, 98].
pub const FUNCTION_SAMPLE_SPACING: f64 = 2.0;
/// Time step between consecutive random-mode points.
pub const RANDOM_TIME_STEP: f64 = 10.0;
/// Smallest accepted random-mode point count.
pub const MIN_POINT_COUNT: usize = 2;
/// Largest accepted random-mode point count.
pub const MAX_POINT_COUNT: usize = 100;

/// Data entry mode selector, one per [`CurveSource`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveMode {
    #[default]
    Raw,
    Function,
    Random,
}

impl CurveMode {
    pub const ALL: [CurveMode; 3] = [CurveMode::Raw, CurveMode::Function, CurveMode::Random];
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "Raw Data"),
            Self::Function => write!(f, "Function"),
            Self::Random => write!(f, "Random"),
        }
    }
}

/// A source of curve data, tagged by entry mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CurveSource {
    /// Raw x,y pairs, one comma-separated pair per line.
    RawPoints { data_points: String },
    /// Formula in one free variable `x`, sampled on a fixed grid.
    ///
    /// The domain fields are collected by the form but the generator samples
    /// a fixed grid regardless; see DESIGN.md for why they are kept.
    Function {
        expression: String,
        #[serde(default)]
        x_min: f64,
        #[serde(default = "default_x_max")]
        x_max: f64,
        #[serde(default = "default_step")]
        step: f64,
    },
    /// Synthetic points following a power curve with uniform jitter.
    Random {
        #[serde(default = "default_point_count")]
        point_count: usize,
        #[serde(default = "default_noise_level")]
        noise_level: f64,
    },
}

fn default_x_max() -> f64 {
    100.0
}

fn default_step() -> f64 {
    1.0
}

fn default_point_count() -> usize {
    10
}

fn default_noise_level() -> f64 {
    0.2
}

impl CurveSource {
    /// Build a validated random source.
    ///
    /// The generator itself tolerates out-of-range values; this is the
    /// range check the form applies before handing a source over.
    pub fn random(point_count: usize, noise_level: f64) -> LcResult<Self> {
        ensure_in_range(
            point_count as f64,
            "point count",
            MIN_POINT_COUNT as f64,
            MAX_POINT_COUNT as f64,
        )?;
        ensure_in_range(noise_level, "noise level", 0.0, 1.0)?;
        Ok(Self::Random {
            point_count,
            noise_level,
        })
    }

    /// Which entry mode this source belongs to.
    pub fn mode(&self) -> CurveMode {
        match self {
            Self::RawPoints { .. } => CurveMode::Raw,
            Self::Function { .. } => CurveMode::Function,
            Self::Random { .. } => CurveMode::Random,
        }
    }

    /// Descriptive label for a plot legend.
    pub fn label(&self) -> String {
        match self {
            Self::RawPoints { data_points } => {
                format!("Raw data ({} lines)", data_points.lines().count())
            }
            Self::Function { expression, .. } => format!("f(x) = {expression}"),
            Self::Random {
                point_count,
                noise_level,
            } => format!("Random ({point_count} points, noise {noise_level:.2})"),
        }
    }

    /// X-axis caption for this source.
    pub fn x_axis_label(&self) -> &'static str {
        match self.mode() {
            CurveMode::Raw => "Time",
            CurveMode::Function => "x",
            CurveMode::Random => "Step",
        }
    }

    /// Y-axis caption for this source.
    pub fn y_axis_label(&self) -> &'static str {
        match self.mode() {
            CurveMode::Raw => "Progress",
            CurveMode::Function => "f(x)",
            CurveMode::Random => "Value",
        }
    }
}

impl Default for CurveSource {
    fn default() -> Self {
        Self::RawPoints {
            data_points: String::new(),
        }
    }
}
