use crate::views::{CreateAction, CreateView, GalleryView};

pub struct LearnCurveApp {
    active_view: ViewTab,
    gallery_view: GalleryView,
    create_view: CreateView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Gallery,
    Create,
}

impl LearnCurveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            active_view: ViewTab::Gallery,
            gallery_view: GalleryView::default(),
            create_view: CreateView::default(),
        }
    }
}

impl eframe::App for LearnCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.separator();

                if ui.button("Create Learning Curve").clicked() {
                    self.active_view = ViewTab::Create;
                }

                if ui.button("Generate Random Theme").clicked() {
                    self.gallery_view.add_random_variant();
                    self.active_view = ViewTab::Gallery;
                }

                if self.active_view == ViewTab::Create && ui.button("Cancel").clicked() {
                    self.active_view = ViewTab::Gallery;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Gallery, "Gallery");
                ui.selectable_value(&mut self.active_view, ViewTab::Create, "Create");
            });

            ui.separator();

            match self.active_view {
                ViewTab::Gallery => {
                    self.gallery_view.show(ui);
                }
                ViewTab::Create => {
                    if let Some(CreateAction::Submitted) = self.create_view.show(ui) {
                        self.active_view = ViewTab::Gallery;
                    }
                }
            }
        });
    }
}
