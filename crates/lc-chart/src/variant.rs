//! Gallery chart variants: a display title bound to a catalog palette, plus
//! the sample data the gallery cards are drawn with.

use lc_core::PlotPoint;
use lc_theme::{THEMES, ThemeStyle, random_theme_index, theme_or_default};
use rand::Rng;
use uuid::Uuid;

/// Number of sample points drawn on a gallery card.
const SAMPLE_POINT_COUNT: usize = 10;

/// One gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartVariant {
    pub id: String,
    pub title: String,
    pub theme_id: usize,
}

impl ChartVariant {
    /// The catalog, one variant per palette, in catalog order.
    pub fn catalog() -> Vec<ChartVariant> {
        (0..THEMES.len())
            .map(|index| ChartVariant {
                id: format!("THEME_{index}"),
                title: format!("SYSTEM_{index}.dat"),
                theme_id: index,
            })
            .collect()
    }

    /// A variant with a randomly picked palette and a generated identity.
    pub fn random() -> ChartVariant {
        let mut rng = rand::rng();
        let fragment = Uuid::new_v4().simple().to_string();
        ChartVariant {
            id: format!("RANDOM_{}", &fragment[..9]),
            title: format!("RANDOM_SYS_{}.dat", rng.random_range(0..1000)),
            theme_id: random_theme_index(),
        }
    }

    /// Resolve this variant's palette.
    pub fn style(&self) -> &'static ThemeStyle {
        theme_or_default(self.theme_id)
    }
}

/// Sample data for gallery cards: the reference power curve with a little
/// positive jitter and a random confidence band.
pub fn sample_points(noise: f64) -> Vec<PlotPoint> {
    let mut rng = rand::rng();
    (0..SAMPLE_POINT_COUNT)
        .map(|i| {
            let p = (i as f64).powf(1.5) * 8.0 + rng.random::<f64>() * noise;
            let ci = rng.random::<f64>() * 10.0;
            PlotPoint::new(i as f64, p, ci)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_theme() {
        let variants = ChartVariant::catalog();
        assert_eq!(variants.len(), THEMES.len());
        for (index, variant) in variants.iter().enumerate() {
            assert_eq!(variant.theme_id, index);
            assert_eq!(variant.style().name, THEMES[index].name);
        }
    }

    #[test]
    fn random_variants_have_distinct_ids() {
        let a = ChartVariant::random();
        let b = ChartVariant::random();
        assert!(a.id.starts_with("RANDOM_"));
        assert!(a.title.starts_with("RANDOM_SYS_"));
        assert_ne!(a.id, b.id);
        assert!(a.theme_id < THEMES.len());
    }

    #[test]
    fn sample_points_follow_the_reference_curve() {
        let points = sample_points(0.0);
        assert_eq!(points.len(), SAMPLE_POINT_COUNT);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.t, i as f64);
            assert_eq!(point.p, (i as f64).powf(1.5) * 8.0);
            assert!(point.ci >= 0.0 && point.ci < 10.0);
        }
    }
}
