//! The plot point record shared by the generator, the preview synchronizer,
//! and both frontends.

use serde::{Deserialize, Serialize};

/// One plotted sample of a learning curve.
///
/// `t` is the independent variable (time or step index), `p` the progress
/// value drawn as the main line, and `ci` a confidence-band magnitude drawn
/// as a shaded area under the line. Nothing ties `ci` to `p`; it is
/// illustrative only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub t: f64,
    pub p: f64,
    pub ci: f64,
}

impl PlotPoint {
    pub fn new(t: f64, p: f64, ci: f64) -> Self {
        Self { t, p, ci }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_roundtrips_through_json() {
        let point = PlotPoint::new(2.0, 10.0, 5.0);
        let json = serde_json::to_string(&point).unwrap();
        let back: PlotPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
