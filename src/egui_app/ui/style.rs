//! Colours and visuals for the prediction pages.

use eframe::egui::{Color32, CornerRadius, Stroke, Visuals, style::WidgetVisuals};

/// Named colours used across the form, footer and result window.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Window, tab strip and footer background.
    pub bg_primary: Color32,
    /// Form compartment and panel background.
    pub bg_panel: Color32,
    /// Idle widget fill.
    pub bg_widget: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Selection and focus highlight.
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(16, 12, 16),
        bg_panel: Color32::from_rgb(30, 24, 30),
        bg_widget: Color32::from_rgb(46, 38, 46),
        outline: Color32::from_rgb(70, 56, 68),
        text_primary: Color32::from_rgb(222, 214, 220),
        text_muted: Color32::from_rgb(158, 146, 156),
        accent: Color32::from_rgb(0x00, 0x88, 0xFE),
        success: Color32::from_rgb(98, 170, 120),
        warning: Color32::from_rgb(214, 150, 60),
        danger: Color32::from_rgb(200, 70, 70),
    }
}

/// Pie slice fills, cycled by slice index.
pub const SLICE_COLORS: [Color32; 2] = [
    Color32::from_rgb(0x00, 0x88, 0xFE),
    Color32::from_rgb(0xFF, 0x80, 0x42),
];

pub fn slice_color(index: usize) -> Color32 {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Dark theme with square corners and the palette applied to every widget state.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_panel;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::ZERO;
    for (widget, fill) in [
        (&mut visuals.widgets.inactive, palette.bg_widget),
        (&mut visuals.widgets.hovered, palette.outline),
        (&mut visuals.widgets.active, palette.accent.gamma_multiply(0.5)),
    ] {
        paint_widget(widget, fill, palette);
    }
}

fn paint_widget(widget: &mut WidgetVisuals, fill: Color32, palette: Palette) {
    widget.corner_radius = CornerRadius::ZERO;
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, palette.outline);
    widget.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn outer_border() -> Stroke {
    Stroke::new(2.0, palette().outline)
}

pub fn compartment_fill() -> Color32 {
    palette().bg_panel
}

/// Background of the inline error banner.
pub fn error_banner_fill() -> Color32 {
    palette().danger.gamma_multiply(0.25)
}

/// Severity of the footer status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Busy => "Predicting",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.outline,
        StatusTone::Busy => palette.accent,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_colors_cycle() {
        assert_eq!(slice_color(0), Color32::from_rgb(0, 136, 254));
        assert_eq!(slice_color(1), Color32::from_rgb(255, 128, 66));
        assert_eq!(slice_color(2), slice_color(0));
    }

    #[test]
    fn successful_prediction_badge_uses_success_colour() {
        assert_eq!(status_badge_color(StatusTone::Info), palette().success);
        assert_ne!(
            status_badge_color(StatusTone::Error),
            status_badge_color(StatusTone::Warning)
        );
    }
}
