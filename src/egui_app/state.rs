//! Shared state types for the egui UI.

use crate::egui_app::ui::style::{self, StatusTone};
use crate::predict::ModelKind;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Model page currently shown.
    pub active_page: ModelKind,
    pub status: StatusBarState,
}

impl UiState {
    pub fn new(active_page: ModelKind) -> Self {
        Self {
            active_page,
            status: StatusBarState::idle(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    pub tone: StatusTone,
}

impl StatusBarState {
    /// Status shown before the first prediction.
    pub fn idle() -> Self {
        Self::new("Fill in the wine features and press Predict", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: tone.label().into(),
            badge_color: style::status_badge_color(tone),
            tone,
        }
    }
}
