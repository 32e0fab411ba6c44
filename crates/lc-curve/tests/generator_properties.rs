//! Property checks for the fail-soft generator contract: arbitrary form
//! input must produce a drawable sequence, never a panic.

use lc_curve::{CONFIDENCE_PLACEHOLDER, CurveSource, FUNCTION_SAMPLE_COUNT, generate_curve};
use proptest::prelude::*;

proptest! {
    #[test]
    fn raw_never_panics_and_emits_finite_points(text in ".{0,256}") {
        let source = CurveSource::RawPoints { data_points: text };
        for point in generate_curve(&source) {
            prop_assert!(point.t.is_finite());
            prop_assert!(point.p.is_finite());
            prop_assert_eq!(point.ci, CONFIDENCE_PLACEHOLDER);
        }
    }

    #[test]
    fn function_always_returns_full_grid(expression in ".{0,64}") {
        let source = CurveSource::Function {
            expression,
            x_min: 0.0,
            x_max: 100.0,
            step: 1.0,
        };
        let points = generate_curve(&source);
        prop_assert_eq!(points.len(), FUNCTION_SAMPLE_COUNT);
        for (i, point) in points.iter().enumerate() {
            prop_assert_eq!(point.t, i as f64 * 2.0);
            prop_assert!(point.p.is_finite());
        }
    }

    #[test]
    fn random_length_always_matches_count(count in 0usize..=100, noise in 0.0f64..=1.0) {
        let source = CurveSource::Random {
            point_count: count,
            noise_level: noise,
        };
        prop_assert_eq!(generate_curve(&source).len(), count);
    }

    #[test]
    fn raw_roundtrip_of_well_formed_lines(
        pairs in proptest::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..20)
    ) {
        let text = pairs
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join("\n");
        let source = CurveSource::RawPoints { data_points: text };
        let points = generate_curve(&source);
        prop_assert_eq!(points.len(), pairs.len());
        for (point, (x, y)) in points.iter().zip(&pairs) {
            prop_assert_eq!(point.t, *x);
            prop_assert_eq!(point.p, *y);
        }
    }
}
