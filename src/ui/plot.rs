use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text, VLine};

use crate::state::Session;

// ---------------------------------------------------------------------------
// Reflectance vs angle chart (central panel)
// ---------------------------------------------------------------------------

/// Render the annotated chart of one experiment run.
pub fn reflectance_plot(ui: &mut Ui, session: &Session) {
    let dataset = &session.dataset;
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No samples to plot");
        });
        return;
    }

    let colors = session.colors;
    let d_theta = session.instrument.angle_least_count_degrees;
    let d_refl = session.instrument.reflectance_least_count;
    let theta_b = session.result.brewster_angle_degrees;

    let x_min = dataset.angles().fold(f64::INFINITY, f64::min);
    let x_max = dataset.angles().fold(f64::NEG_INFINITY, f64::max);
    let y_max = dataset.reflectances().fold(f64::NEG_INFINITY, f64::max) + d_refl;

    Plot::new("reflectance_plot")
        .legend(Legend::default())
        .x_axis_label("Angle of Incidence (degrees)")
        .y_axis_label("Reflectance")
        .show_grid(true)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // ---- Error bars ----
            let error_bar = |ends: [[f64; 2]; 2]| {
                Line::new(PlotPoints::from(ends.to_vec()))
                    .name("Least count")
                    .color(colors.error_bars)
                    .width(1.0)
            };
            for s in dataset.samples() {
                let (x, y) = (s.angle_degrees, s.reflectance);
                if d_refl > 0.0 {
                    plot_ui.line(error_bar([[x, y - d_refl], [x, y + d_refl]]));
                }
                if d_theta > 0.0 {
                    plot_ui.line(error_bar([[x - d_theta, y], [x + d_theta, y]]));
                }
            }

            // ---- Measured data ----
            let line_points: PlotPoints = dataset
                .samples()
                .iter()
                .map(|s| [s.angle_degrees, s.reflectance])
                .collect();
            plot_ui.line(
                Line::new(line_points)
                    .name("Measured Data")
                    .color(colors.data)
                    .width(2.0),
            );

            let dots: PlotPoints = dataset
                .samples()
                .iter()
                .map(|s| [s.angle_degrees, s.reflectance])
                .collect();
            plot_ui.points(
                Points::new(dots)
                    .name("Measured Data")
                    .color(colors.data)
                    .radius(4.0),
            );

            // ---- Brewster angle marker ----
            plot_ui.vline(
                VLine::new(theta_b)
                    .name(format!("Brewster angle ({theta_b}°)"))
                    .color(colors.brewster_marker)
                    .style(LineStyle::dashed_loose())
                    .width(1.5),
            );

            // ---- Annotation box ----
            // Keep the box on the side of the marker with more room.
            let anchor = if theta_b - x_min > x_max - theta_b {
                Align2::RIGHT_TOP
            } else {
                Align2::LEFT_TOP
            };
            plot_ui.text(
                Text::new(
                    PlotPoint::new(theta_b, y_max),
                    RichText::new(&session.annotation)
                        .monospace()
                        .color(Color32::BLACK)
                        .background_color(Color32::from_rgb(245, 222, 179)),
                )
                .anchor(anchor),
            );
        });
}
