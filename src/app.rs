use eframe::egui;

use crate::state::Session;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BrewsterApp {
    pub session: Session,
}

impl BrewsterApp {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl eframe::App for BrewsterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            panels::summary_bar(ui, &self.session);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::reflectance_plot(ui, &self.session);
        });
    }
}
