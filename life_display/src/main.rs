// main.rs - Conway's Game of Life in an eframe window
// The app struct lives in app.rs, the eframe callbacks in ui.rs

use clap::Parser;
use eframe::egui;
use tracing::info;

mod app;     // Simulation session
mod error;   // AppError
mod fps;     // FPS logger
mod logging; // tracing setup
mod settings;
mod ui;      // eframe::App impl

use app::LifeApp;
use error::AppError;
use settings::{Settings, TITLE};

fn main() -> Result<(), AppError> {
    let settings = Settings::parse();
    logging::init_logging(settings.log_level.as_deref());

    let app = LifeApp::new(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.width as f32, settings.height as f32]),
        multisampling: 0, // Crisp cell edges
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            info!(width = settings.width, height = settings.height, "window created");
            Box::new(app)
        }),
    )?;
    Ok(())
}
