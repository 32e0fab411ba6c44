//! Point generation for each curve source.
//!
//! The generator is the fail-soft boundary of the system: whatever state the
//! form is in, it returns a drawable (possibly empty) point sequence.
//! Malformed raw lines are silently dropped, formula samples that fail to
//! evaluate degrade to zero, and the random mode accepts any count.

use crate::source::{
    CurveSource, FUNCTION_SAMPLE_COUNT, FUNCTION_SAMPLE_SPACING, RANDOM_TIME_STEP,
};
use lc_core::{PlotPoint, ensure_finite};
use lc_expr::CompiledExpr;
use rand::Rng;

/// Constant confidence-band height emitted for every point.
/// Not derived from the data or the noise level yet.
pub const CONFIDENCE_PLACEHOLDER: f64 = 5.0;

/// Generate the plot point sequence for a curve source.
///
/// Raw mode is fully deterministic; function mode is deterministic in the
/// expression; random mode draws fresh jitter on every call.
pub fn generate_curve(source: &CurveSource) -> Vec<PlotPoint> {
    match source {
        CurveSource::RawPoints { data_points } => parse_raw_points(data_points),
        CurveSource::Function { expression, .. } => generate_function_curve(expression),
        CurveSource::Random {
            point_count,
            noise_level,
        } => generate_random_curve(*point_count, *noise_level),
    }
}

/// Parse newline-separated `x,y` pairs, preserving input order.
///
/// A line survives only if its first two comma-separated fields both parse
/// as finite numbers; everything else (blank lines, word soup, partial
/// pairs) is dropped without comment. Fields past the second are ignored.
fn parse_raw_points(text: &str) -> Vec<PlotPoint> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split(',');
            let x = parse_finite(fields.next()?, "raw x value")?;
            let y = parse_finite(fields.next()?, "raw y value")?;
            Some(PlotPoint::new(x, y, CONFIDENCE_PLACEHOLDER))
        })
        .collect()
}

fn parse_finite(field: &str, what: &'static str) -> Option<f64> {
    let value = field.trim().parse::<f64>().ok()?;
    ensure_finite(value, what).ok()
}

/// Sample the expression at 50 fixed positions x = 0, 2, ..., 98.
///
/// The expression is parsed once; a parse failure flattens the whole curve
/// to zero, an evaluation failure or non-finite sample flattens just that
/// point. Either way exactly 50 points come back.
fn generate_function_curve(expression: &str) -> Vec<PlotPoint> {
    let compiled = CompiledExpr::parse(expression, "x").ok();
    (0..FUNCTION_SAMPLE_COUNT)
        .map(|i| {
            let x = i as f64 * FUNCTION_SAMPLE_SPACING;
            let p = compiled
                .as_ref()
                .and_then(|c| c.eval(x).ok())
                .filter(|v| v.is_finite())
                .unwrap_or(0.0);
            PlotPoint::new(x, p, CONFIDENCE_PLACEHOLDER)
        })
        .collect()
}

/// Synthesize `point_count` points along a power curve with uniform jitter.
///
/// `p = i^1.5 * 8 + uniform(-0.5, 0.5) * noise_level * 100`. Draws are not
/// seeded; regenerating gives a fresh curve by design (the shuffle button).
fn generate_random_curve(point_count: usize, noise_level: f64) -> Vec<PlotPoint> {
    let mut rng = rand::rng();
    (0..point_count)
        .map(|i| {
            let t = i as f64 * RANDOM_TIME_STEP;
            let jitter = rng.random_range(-0.5..0.5) * noise_level * 100.0;
            let p = (i as f64).powf(1.5) * 8.0 + jitter;
            PlotPoint::new(t, p, CONFIDENCE_PLACEHOLDER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MAX_POINT_COUNT, MIN_POINT_COUNT};
    use lc_core::{Tolerances, nearly_equal};

    fn raw(text: &str) -> CurveSource {
        CurveSource::RawPoints {
            data_points: text.to_string(),
        }
    }

    fn function(expression: &str) -> CurveSource {
        CurveSource::Function {
            expression: expression.to_string(),
            x_min: 0.0,
            x_max: 100.0,
            step: 1.0,
        }
    }

    #[test]
    fn raw_preserves_order_and_drops_malformed() {
        let points = generate_curve(&raw("0,0\n2,10\nbad\n5,80"));
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], PlotPoint::new(0.0, 0.0, 5.0));
        assert_eq!(points[1], PlotPoint::new(2.0, 10.0, 5.0));
        assert_eq!(points[2], PlotPoint::new(5.0, 80.0, 5.0));
    }

    #[test]
    fn raw_is_not_sorted_by_t() {
        let points = generate_curve(&raw("5,1\n2,2\n9,3"));
        let ts: Vec<f64> = points.iter().map(|p| p.t).collect();
        assert_eq!(ts, vec![5.0, 2.0, 9.0]);
    }

    #[test]
    fn raw_empty_input_yields_empty_sequence() {
        assert!(generate_curve(&raw("")).is_empty());
        assert!(generate_curve(&raw("\n\n")).is_empty());
    }

    #[test]
    fn raw_drops_partial_and_non_finite_pairs() {
        // "5" has no y; "1,inf" is not finite; "nan,2" is not finite
        let points = generate_curve(&raw("5\n1,inf\nnan,2\n3,4"));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], PlotPoint::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn raw_ignores_extra_fields_and_whitespace() {
        let points = generate_curve(&raw(" 1 , 2 , 99\n3,4"));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], PlotPoint::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn raw_generation_is_deterministic() {
        let source = raw("0,0\n2,10\n5,80");
        assert_eq!(generate_curve(&source), generate_curve(&source));
    }

    #[test]
    fn function_produces_fifty_points_on_fixed_grid() {
        let points = generate_curve(&function("x*2"));
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], PlotPoint::new(0.0, 0.0, 5.0));
        assert_eq!(points[1], PlotPoint::new(2.0, 4.0, 5.0));
        assert_eq!(points[49], PlotPoint::new(98.0, 196.0, 5.0));
    }

    #[test]
    fn function_syntax_error_flattens_to_zero() {
        let points = generate_curve(&function("x +"));
        assert_eq!(points.len(), 50);
        assert!(points.iter().all(|p| p.p == 0.0));
        assert!(points.iter().all(|p| p.ci == 5.0));
    }

    #[test]
    fn function_non_finite_samples_flatten_pointwise() {
        // 1/(x - 2) blows up at the second sample only
        let points = generate_curve(&function("1 / (x - 2)"));
        assert_eq!(points.len(), 50);
        assert_eq!(points[1].p, 0.0);
        assert!(nearly_equal(points[0].p, -0.5, Tolerances::default()));
        assert!(nearly_equal(
            points[2].p,
            0.5,
            Tolerances::default()
        ));
    }

    #[test]
    fn function_ignores_domain_fields() {
        let narrowed = CurveSource::Function {
            expression: "x".to_string(),
            x_min: 10.0,
            x_max: 20.0,
            step: 5.0,
        };
        let points = generate_curve(&narrowed);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0].t, 0.0);
        assert_eq!(points[49].t, 98.0);
    }

    #[test]
    fn random_honors_point_count() {
        for count in [MIN_POINT_COUNT, 10, MAX_POINT_COUNT] {
            let source = CurveSource::Random {
                point_count: count,
                noise_level: 0.5,
            };
            assert_eq!(generate_curve(&source).len(), count);
        }
    }

    #[test]
    fn random_zero_count_yields_empty_sequence() {
        let source = CurveSource::Random {
            point_count: 0,
            noise_level: 0.5,
        };
        assert!(generate_curve(&source).is_empty());
    }

    #[test]
    fn random_zero_noise_is_exact_power_curve() {
        let source = CurveSource::Random {
            point_count: 10,
            noise_level: 0.0,
        };
        let points = generate_curve(&source);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.t, i as f64 * 10.0);
            assert_eq!(point.p, (i as f64).powf(1.5) * 8.0);
            assert_eq!(point.ci, 5.0);
        }
    }

    #[test]
    fn random_jitter_stays_in_band() {
        let source = CurveSource::Random {
            point_count: 100,
            noise_level: 1.0,
        };
        for point in generate_curve(&source) {
            let i = point.t / 10.0;
            let center = i.powf(1.5) * 8.0;
            assert!((point.p - center).abs() <= 50.0);
        }
    }

    #[test]
    fn confidence_band_is_constant_in_every_mode() {
        let sources = [
            raw("0,0\n1,1"),
            function("x"),
            CurveSource::Random {
                point_count: 5,
                noise_level: 0.3,
            },
        ];
        for source in &sources {
            assert!(
                generate_curve(source)
                    .iter()
                    .all(|p| p.ci == CONFIDENCE_PLACEHOLDER)
            );
        }
    }
}
