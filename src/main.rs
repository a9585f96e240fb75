mod app;
mod color;
mod data;
mod input;
mod report;
mod state;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::anyhow;
use app::BrewsterApp;
use eframe::egui;
use input::{ConsolePrompt, InputProvider};
use state::Session;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let raw = ConsolePrompt::new(io::stdin().lock(), io::stdout()).read_raw_input()?;

    let session = match Session::from_raw(&raw) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Input rejected: {e}");
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    for line in &session.summary {
        println!("{line}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Brewster's Law Experiment",
        options,
        Box::new(|_cc| Ok(Box::new(BrewsterApp::new(session)))),
    )
    .map_err(|e| anyhow!("failed to open chart window: {e}"))?;

    Ok(ExitCode::SUCCESS)
}
