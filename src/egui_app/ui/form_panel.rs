use super::EguiApp;
use super::style;
use crate::features::FeatureField;
use crate::predict::ModelKind;
use eframe::egui::{self, Frame, RichText, Stroke};

const FIELD_WIDTH: f32 = 240.0;
const BULK_INPUT_HINT: &str = "Example: 7.4, 0.7, 0.0, 1.9, 0.076, 11, ...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormAction {
    None,
    ApplyBulkInput,
    Reset,
    Predict,
}

impl EguiApp {
    /// Render one model page: heading, bulk input, field grid, buttons and error banner.
    pub(super) fn render_form_page(&mut self, ui: &mut egui::Ui, model: ModelKind) {
        let palette = style::palette();
        ui.heading(RichText::new(model.page_title()).strong());
        ui.add_space(2.0);
        ui.label(RichText::new(model.page_description()).color(palette.text_muted));
        ui.add_space(12.0);

        let mut action = FormAction::None;
        Frame::group(ui.style())
            .fill(style::compartment_fill())
            .stroke(style::outer_border())
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Wine Characteristics").strong());
                ui.add_space(10.0);
                if model.supports_bulk_input() && self.render_bulk_input(ui, model) {
                    action = FormAction::ApplyBulkInput;
                }
                self.render_feature_grid(ui, model);
                ui.add_space(14.0);
                if let Some(clicked) = self.render_buttons(ui, model) {
                    action = clicked;
                }
            });

        if let Some(error) = self.controller.session(model).error() {
            ui.add_space(14.0);
            Frame::NONE
                .fill(style::error_banner_fill())
                .stroke(Stroke::new(1.0, palette.warning))
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("Error: {error}")).color(palette.warning));
                });
        }

        match action {
            FormAction::None => {}
            FormAction::ApplyBulkInput => self.controller.apply_bulk_input(model),
            FormAction::Reset => self.controller.reset_form(model),
            FormAction::Predict => self.controller.submit_prediction(model),
        }
    }

    /// Returns true when the user asked to convert the bulk input.
    fn render_bulk_input(&mut self, ui: &mut egui::Ui, model: ModelKind) -> bool {
        let session = self.controller.session_mut(model);
        let Some(text) = session.bulk_input.as_mut() else {
            return false;
        };
        ui.label(format!(
            "Bulk Input ({} comma-separated values)",
            FeatureField::COUNT
        ));
        let mut convert = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(text)
                    .hint_text(BULK_INPUT_HINT)
                    .desired_width(ui.available_width() - 90.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Convert").clicked() || submitted {
                convert = true;
            }
        });
        ui.add_space(12.0);
        convert
    }

    fn render_feature_grid(&mut self, ui: &mut egui::Ui, model: ModelKind) {
        let session = self.controller.session_mut(model);
        egui::Grid::new(("feature_grid", model))
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                for row in FeatureField::ALL.chunks(2) {
                    for &field in row {
                        ui.vertical(|ui| {
                            ui.label(field.label());
                            let value = session.features.get_mut(field);
                            let mut edit = egui::TextEdit::singleline(&mut *value)
                                .desired_width(FIELD_WIDTH);
                            if let Some(hint) = field_hint(model, field) {
                                edit = edit.hint_text(hint);
                            }
                            if ui.add(edit).changed() {
                                let filtered = numeric_text(value);
                                *value = filtered;
                            }
                        });
                    }
                    ui.end_row();
                }
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui, model: ModelKind) -> Option<FormAction> {
        let loading = self.controller.session(model).is_loading();
        let mut action = None;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let predict_label = if loading { "Predicting..." } else { "Predict" };
            if ui
                .add_enabled(!loading, egui::Button::new(predict_label))
                .clicked()
            {
                action = Some(FormAction::Predict);
            }
            if ui.button(model.reset_label()).clicked() {
                action = Some(FormAction::Reset);
            }
        });
        action
    }
}

/// Placeholder shown in an empty field; only the Naive Bayes page has them.
fn field_hint(model: ModelKind, field: FeatureField) -> Option<String> {
    match model {
        ModelKind::Id3 => None,
        ModelKind::NaiveBayes => Some(format!("Input {}", field.key().replace('_', " "))),
    }
}

/// Keep only characters a number input accepts while typing.
fn numeric_text(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_only_on_naive_bayes_page() {
        assert_eq!(field_hint(ModelKind::Id3, FeatureField::Density), None);
        assert_eq!(
            field_hint(ModelKind::NaiveBayes, FeatureField::FreeSulfurDioxide).as_deref(),
            Some("Input free sulfur dioxide")
        );
        assert_eq!(
            field_hint(ModelKind::NaiveBayes, FeatureField::Ph).as_deref(),
            Some("Input pH")
        );
    }

    #[test]
    fn numeric_text_drops_letters_and_spaces() {
        assert_eq!(numeric_text("3.5a1 "), "3.51");
        assert_eq!(numeric_text("-1e-3"), "-1e-3");
        assert_eq!(numeric_text("abc"), "");
    }
}
