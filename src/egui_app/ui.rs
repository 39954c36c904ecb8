//! egui renderer for the prediction pages.

mod form_panel;
mod pie_chart;
mod result_popup;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::EguiController;
use crate::predict::ModelKind;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window size that fits the two-column form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 640.0);

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_page_tabs(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("page_tabs")
            .frame(
                Frame::NONE
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for model in ModelKind::ALL {
                        let selected = self.controller.ui.active_page == model;
                        let mut label = model.name().to_string();
                        if self.controller.session(model).is_loading() {
                            label.push_str(" …");
                        }
                        if ui.selectable_label(selected, label).clicked() {
                            self.controller.select_page(model);
                        }
                    }
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::NONE.fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (badge, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(badge.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();

        self.render_page_tabs(ctx);
        self.render_status(ctx);
        let model = self.controller.ui.active_page;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_form_page(ui, model);
                });
        });
        self.render_result_popup(ctx, model);

        if self.controller.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
