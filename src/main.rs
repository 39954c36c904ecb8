#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based wine quality prediction UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use wineform::egui_app::controller::EguiController;
use wineform::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use wineform::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(Some(path)) => eprintln!("Writing logs to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 860.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Wine Quality Prediction",
        native_options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = match EguiController::load() {
                Ok(controller) => Box::new(EguiApp::new(controller)),
                Err(err) => {
                    tracing::error!("Failed to load config: {err}");
                    Box::new(LaunchError {
                        message: format!("Failed to load config: {err}"),
                    })
                }
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
