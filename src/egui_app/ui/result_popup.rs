use super::EguiApp;
use super::pie_chart;
use super::style;
use crate::predict::ModelKind;
use eframe::egui::{self, Align2, Order, RichText};

const POPUP_WIDTH: f32 = 384.0;

impl EguiApp {
    /// Show the floating result panel for the page's latest prediction.
    pub(super) fn render_result_popup(&mut self, ctx: &egui::Context, model: ModelKind) {
        let Some(result) = self.controller.session(model).result() else {
            return;
        };
        let rows = result.detail_rows();
        let slices = result.chart();
        let palette = style::palette();

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new("Prediction Result")
            .id(egui::Id::new(("prediction_result", model)))
            .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 80.0))
            .order(Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(POPUP_WIDTH)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(POPUP_WIDTH);
                egui::Grid::new(("prediction_rows", model))
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in &rows {
                            ui.label(RichText::new(format!("{label}:")).color(palette.text_muted));
                            ui.label(RichText::new(value).strong());
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);
                pie_chart::render_pie_chart(ui, &slices);
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.controller.dismiss_result(model);
        }
    }
}
