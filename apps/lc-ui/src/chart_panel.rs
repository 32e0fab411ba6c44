//! Themed chart card rendering shared by the gallery and the preview.

use egui::{Color32, Margin, RichText, Stroke};
use egui_plot::{Line, Plot, PlotPoints, Points, Polygon};
use lc_curve::CurveMode;
use lc_theme::{Rgb, ThemeStyle};

/// Descriptive strip drawn around one chart.
pub struct ChartCard<'a> {
    pub title: &'a str,
    pub style: &'static ThemeStyle,
    pub created_by: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
}

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Draw one chart card: themed frame, header strip, plot, category footer.
pub fn show_chart(
    ui: &mut egui::Ui,
    id_salt: &str,
    card: &ChartCard<'_>,
    points: &[lc_core::PlotPoint],
    mode: Option<CurveMode>,
) {
    let style = card.style;
    let background = color32(style.background);
    let text = color32(style.text);
    let border = color32(style.border);
    let line = color32(style.line);
    let grid = color32(style.grid);

    egui::Frame::none()
        .fill(background)
        .stroke(Stroke::new(3.0, border))
        .inner_margin(Margin::same(10.0))
        .show(ui, |ui| {
            ui.style_mut().visuals.override_text_color = Some(text);

            ui.label(RichText::new(card.title).color(text).strong().size(16.0));
            if let Some(created_by) = card.created_by {
                ui.label(
                    RichText::new(format!("CREATED BY: {created_by}"))
                        .color(text)
                        .weak()
                        .size(10.0),
                );
            }
            if let Some(description) = card.description {
                ui.label(
                    RichText::new(format!("DESCRIPTION: {description}"))
                        .color(text)
                        .weak()
                        .size(10.0),
                );
            }
            ui.add_space(4.0);

            show_plot(ui, id_salt, style, points, mode);

            if let Some(category) = card.category {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("CATEGORY: {category}"))
                        .color(text)
                        .weak()
                        .size(10.0),
                );
            }
        });
}

fn show_plot(
    ui: &mut egui::Ui,
    id_salt: &str,
    style: &'static ThemeStyle,
    points: &[lc_core::PlotPoint],
    mode: Option<CurveMode>,
) {
    let line_color = color32(style.line);
    let grid_color = color32(style.grid).gamma_multiply(style.opacity);
    let background = color32(style.background);

    // egui_plot takes its background and grid colors from the surrounding
    // visuals; scope the overrides to this card.
    ui.scope(|ui| {
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = background;
        visuals.widgets.noninteractive.bg_stroke.color = grid_color;

        let line: Vec<[f64; 2]> = points.iter().map(|p| [p.t, p.p]).collect();
        let line_points: PlotPoints = line.clone().into();
        let marker_points: PlotPoints = line.into();

        // Confidence band: area between the ci magnitudes and the axis
        let mut band: Vec<[f64; 2]> = points.iter().map(|p| [p.t, p.ci]).collect();
        band.extend(points.iter().rev().map(|p| [p.t, 0.0]));

        Plot::new(id_salt.to_owned())
            .height(240.0)
            .allow_drag(false)
            .allow_scroll(false)
            .label_formatter(move |_name, value| match mode {
                Some(CurveMode::Raw) => {
                    format!("Time: {:.0}\nProgress: {:.2}", value.x, value.y)
                }
                Some(CurveMode::Function) => format!("f({:.0}) = {:.2}", value.x, value.y),
                Some(CurveMode::Random) => {
                    format!("Step {:.0}\nValue: {:.2}", value.x, value.y)
                }
                None => format!("{:.0}: {:.2}", value.x, value.y),
            })
            .show(ui, |plot_ui| {
                if points.len() >= 2 {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(band))
                            .fill_color(line_color.gamma_multiply(0.1))
                            .stroke(Stroke::NONE),
                    );
                }
                plot_ui.line(Line::new(line_points).color(line_color).width(3.0));
                plot_ui.points(
                    Points::new(marker_points)
                        .color(line_color)
                        .radius(4.0),
                );
            });
    });
}
