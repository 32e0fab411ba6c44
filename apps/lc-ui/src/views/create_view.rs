//! The chart composition form with its live preview.
//!
//! All field state lives here; once per frame the whole form is read into a
//! [`FormSnapshot`] and handed to the preview synchronizer, which recomputes
//! the point sequence only when something actually changed.

use crate::chart_panel::{ChartCard, show_chart};
use lc_chart::{CATEGORIES, ChartMetadata, DIFFICULTIES, FormSnapshot, PreviewSync, Subscription};
use lc_curve::{CurveMode, CurveSource, MAX_POINT_COUNT, MIN_POINT_COUNT};
use lc_theme::{THEMES, theme_or_default};
use std::cell::Cell;
use std::rc::Rc;

const DEFAULT_RAW_POINTS: &str = "0,0
2,10
5,80
15,95
25,85
50,30
60,25
70,40
80,60
90,75
100,80";

const DEFAULT_EXPRESSION: &str = "pow(x, 2)";
const PREVIEW_FALLBACK_TITLE: &str = "YOUR_LEARNING_CURVE.dat";

/// What the form asked the app shell to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    /// Valid submission; the shell navigates back to the gallery.
    Submitted,
}

pub struct CreateView {
    mode: CurveMode,

    title: String,
    created_by: String,
    description: String,
    category: String,
    difficulty: String,
    time_to_master_days: u32,
    theme_id: usize,

    raw_text: String,
    expression: String,
    // Collected domain fields; the generator samples a fixed grid (see
    // lc-curve). Kept so a saved form round-trips losslessly.
    x_min: f64,
    x_max: f64,
    step: f64,
    point_count: usize,
    noise_level: f64,

    sync: PreviewSync,
    push_count: Rc<Cell<u64>>,
    status_subscription: Subscription,
}

impl Default for CreateView {
    fn default() -> Self {
        let mut sync = PreviewSync::new();
        let push_count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&push_count);
        let status_subscription = sync.subscribe(move |_, _| counter.set(counter.get() + 1));

        let defaults = ChartMetadata::default();
        Self {
            mode: CurveMode::Raw,
            title: String::new(),
            created_by: String::new(),
            description: String::new(),
            category: defaults.category,
            difficulty: defaults.difficulty,
            time_to_master_days: defaults.time_to_master_days,
            theme_id: defaults.theme_id,
            raw_text: DEFAULT_RAW_POINTS.to_string(),
            expression: DEFAULT_EXPRESSION.to_string(),
            x_min: 0.0,
            x_max: 100.0,
            step: 1.0,
            point_count: 10,
            noise_level: 0.2,
            sync,
            push_count,
            status_subscription,
        }
    }
}

impl Drop for CreateView {
    fn drop(&mut self) {
        self.sync.unsubscribe(&self.status_subscription);
    }
}

impl CreateView {
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<CreateAction> {
        // Snapshot first: the preview below draws the state the form had
        // when this frame began.
        self.sync.observe(self.snapshot());

        let mut action = None;
        ui.columns(2, |columns| {
            self.show_preview(&mut columns[0]);
            action = self.show_form(&mut columns[1]);
        });
        action
    }

    fn snapshot(&self) -> FormSnapshot {
        let source = match self.mode {
            CurveMode::Raw => CurveSource::RawPoints {
                data_points: self.raw_text.clone(),
            },
            CurveMode::Function => CurveSource::Function {
                expression: self.expression.clone(),
                x_min: self.x_min,
                x_max: self.x_max,
                step: self.step,
            },
            CurveMode::Random => CurveSource::Random {
                point_count: self.point_count,
                noise_level: self.noise_level,
            },
        };
        FormSnapshot {
            source,
            meta: ChartMetadata {
                title: self.title.clone(),
                created_by: non_empty(&self.created_by),
                description: non_empty(&self.description),
                category: self.category.clone(),
                difficulty: self.difficulty.clone(),
                time_to_master_days: self.time_to_master_days,
                theme_id: self.theme_id,
            },
        }
    }

    fn show_preview(&self, ui: &mut egui::Ui) {
        ui.heading("Preview");
        ui.label(
            egui::RichText::new(format!(
                "STATUS: [ACTIVE]  MODE: PREVIEW  PUSH #{}",
                self.push_count.get()
            ))
            .weak()
            .monospace()
            .size(10.0),
        );
        ui.separator();

        let meta = self.sync.meta();
        let title = meta
            .map(|m| m.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(PREVIEW_FALLBACK_TITLE);
        let card = ChartCard {
            title,
            style: theme_or_default(self.theme_id),
            created_by: meta.and_then(|m| m.created_by.as_deref()),
            description: meta.and_then(|m| m.description.as_deref()),
            category: meta.map(|m| m.category.as_str()),
        };
        show_chart(ui, "create_preview", &card, self.sync.points(), Some(self.mode));
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> Option<CreateAction> {
        let mut action = None;

        egui::ScrollArea::vertical()
            .id_salt("create_form_scroll")
            .show(ui, |ui| {
                ui.heading("Configuration");
                ui.separator();

                ui.label("Title");
                ui.text_edit_singleline(&mut self.title);

                ui.label("Category");
                egui::ComboBox::from_id_salt("category_select")
                    .selected_text(self.category.clone())
                    .show_ui(ui, |ui| {
                        for category in CATEGORIES {
                            ui.selectable_value(
                                &mut self.category,
                                category.to_string(),
                                category,
                            );
                        }
                    });

                ui.label("Difficulty");
                egui::ComboBox::from_id_salt("difficulty_select")
                    .selected_text(self.difficulty.clone())
                    .show_ui(ui, |ui| {
                        for difficulty in DIFFICULTIES {
                            ui.selectable_value(
                                &mut self.difficulty,
                                difficulty.to_string(),
                                difficulty,
                            );
                        }
                    });

                ui.label("Time to Master");
                ui.add(
                    egui::DragValue::new(&mut self.time_to_master_days)
                        .speed(1)
                        .range(1..=1000)
                        .suffix(" days"),
                );

                ui.label("Chart Theme");
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(theme_or_default(self.theme_id).name)
                    .show_ui(ui, |ui| {
                        for (index, theme) in THEMES.iter().enumerate() {
                            ui.selectable_value(&mut self.theme_id, index, theme.name);
                        }
                    });

                ui.separator();

                ui.label("Created By (optional)");
                ui.text_edit_singleline(&mut self.created_by);

                ui.label("Description (optional)");
                ui.add(
                    egui::TextEdit::multiline(&mut self.description)
                        .desired_rows(3)
                        .hint_text("Describe your learning curve"),
                );

                ui.separator();

                ui.horizontal(|ui| {
                    for mode in CurveMode::ALL {
                        ui.selectable_value(&mut self.mode, mode, mode.to_string());
                    }
                });
                ui.add_space(4.0);

                match self.mode {
                    CurveMode::Raw => self.show_raw_fields(ui),
                    CurveMode::Function => self.show_function_fields(ui),
                    CurveMode::Random => self.show_random_fields(ui),
                }

                ui.separator();

                let problems = self.snapshot().meta.validate().err().unwrap_or_default();
                for problem in &problems {
                    ui.colored_label(egui::Color32::RED, format!("✗ {problem}"));
                }

                if ui
                    .add_enabled(
                        problems.is_empty(),
                        egui::Button::new("Create Learning Curve"),
                    )
                    .clicked()
                {
                    action = Some(CreateAction::Submitted);
                }
            });

        action
    }

    fn show_raw_fields(&mut self, ui: &mut egui::Ui) {
        ui.label("Data Points (x,y pairs)");
        ui.add(
            egui::TextEdit::multiline(&mut self.raw_text)
                .font(egui::TextStyle::Monospace)
                .desired_rows(10)
                .hint_text("0,0\n50,50\n100,100"),
        );
        ui.label(
            egui::RichText::new("Enter one x,y pair per line, separated by comma")
                .weak()
                .size(10.0),
        );
    }

    fn show_function_fields(&mut self, ui: &mut egui::Ui) {
        ui.label("Function (use x variable)");
        ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .font(egui::TextStyle::Monospace)
                .hint_text("pow(x, 2)"),
        );
        ui.label(
            egui::RichText::new("Sampled at x = 0, 2, ..., 98; bad samples flatten to 0")
                .weak()
                .size(10.0),
        );
    }

    fn show_random_fields(&mut self, ui: &mut egui::Ui) {
        ui.label("Number of Points");
        ui.horizontal(|ui| {
            ui.add(
                egui::DragValue::new(&mut self.point_count)
                    .speed(1)
                    .range(MIN_POINT_COUNT..=MAX_POINT_COUNT),
            );
            if ui
                .button("🔀")
                .on_hover_text("Redraw with fresh jitter")
                .clicked()
            {
                self.sync.refresh();
            }
        });

        ui.label("Noise Level (0-1)");
        ui.add(
            egui::Slider::new(&mut self.noise_level, 0.0..=1.0).step_by(0.1),
        );
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
