//! Gallery of themed chart cards, one per catalog palette plus any random
//! variants the user has generated.

use crate::chart_panel::{ChartCard, show_chart};
use lc_chart::ChartVariant;
use lc_chart::variant::sample_points;
use lc_core::PlotPoint;
use std::collections::HashMap;

const GALLERY_COLUMNS: usize = 3;
const SAMPLE_NOISE: f64 = 5.0;

pub struct GalleryView {
    variants: Vec<ChartVariant>,
    // Sample data per variant id; drawn once so cards don't jitter per frame
    sample_data: HashMap<String, Vec<PlotPoint>>,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self {
            variants: ChartVariant::catalog(),
            sample_data: HashMap::new(),
        }
    }
}

impl GalleryView {
    /// Prepend a random variant (the toolbar's "Generate Random Theme").
    pub fn add_random_variant(&mut self) {
        self.variants.insert(0, ChartVariant::random());
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Learning Curves");
        ui.label(format!("{} charts", self.variants.len()));
        ui.separator();

        for variant in &self.variants {
            self.sample_data
                .entry(variant.id.clone())
                .or_insert_with(|| sample_points(SAMPLE_NOISE));
        }

        egui::ScrollArea::vertical()
            .id_salt("gallery_scroll")
            .show(ui, |ui| {
                for row in self.variants.chunks(GALLERY_COLUMNS) {
                    ui.columns(GALLERY_COLUMNS, |columns| {
                        for (variant, column) in row.iter().zip(columns.iter_mut()) {
                            let card = ChartCard {
                                title: &variant.title,
                                style: variant.style(),
                                created_by: None,
                                description: None,
                                category: None,
                            };
                            let points = &self.sample_data[&variant.id];
                            show_chart(column, &variant.id, &card, points, None);
                        }
                    });
                    ui.add_space(8.0);
                }
            });
    }
}
