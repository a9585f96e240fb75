use eframe::egui::{RichText, Ui};

use crate::state::Session;

// ---------------------------------------------------------------------------
// Top panel – title and result summary
// ---------------------------------------------------------------------------

/// Render the read-only header above the chart.
pub fn summary_bar(ui: &mut Ui, session: &Session) {
    ui.heading("Brewster's Law Experiment");
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} samples", session.dataset.len()));
        ui.separator();
        ui.label(
            RichText::new(format!(
                "angle least count {}°, reflectance least count {}",
                session.instrument.angle_least_count_degrees,
                session.instrument.reflectance_least_count
            ))
            .weak(),
        );
    });
    for line in &session.summary {
        ui.strong(line);
    }
    if session.result.is_singular() {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            "Uncertainty diverges at 90°: linear error propagation does not apply.",
        );
    }
}
