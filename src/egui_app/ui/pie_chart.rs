use super::style;
use crate::chart::{self, ChartSlice, PieSegment};
use eframe::egui::{self, Align2, FontId, Pos2, RichText, Sense, Stroke, Vec2, epaint::Mesh};

const RADIUS: f32 = 50.0;
const LABEL_GAP: f32 = 14.0;
const CHART_HEIGHT: f32 = 150.0;
/// Angular step used to tessellate slice arcs.
const ARC_STEP: f32 = 0.05;

/// Draw the pie with outside percentage labels, a legend and hover tooltips.
pub(super) fn render_pie_chart(ui: &mut egui::Ui, slices: &[ChartSlice]) {
    let width = ui.available_width().max(2.0 * (RADIUS + LABEL_GAP) + 160.0);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    let center = rect.center();
    let segments = chart::pie_segments(slices);
    let painter = ui.painter_at(rect);

    for segment in &segments {
        paint_segment(&painter, center, segment, style::slice_color(segment.index));
    }
    painter.circle_stroke(center, RADIUS, Stroke::new(1.0, style::palette().outline));

    for segment in segments.iter().filter(|segment| segment.sweep > 0.0) {
        let Some(slice) = slices.get(segment.index) else {
            continue;
        };
        let direction = Vec2::angled(segment.mid());
        let anchor = if direction.x >= 0.0 {
            Align2::LEFT_CENTER
        } else {
            Align2::RIGHT_CENTER
        };
        painter.text(
            center + direction * (RADIUS + LABEL_GAP),
            anchor,
            chart::slice_label(slice),
            FontId::proportional(12.0),
            style::slice_color(segment.index),
        );
    }

    if let Some(index) = hovered_slice(response.hover_pos(), center, &segments)
        && let Some(slice) = slices.get(index)
    {
        let text = format!("{}: {}", slice.name, chart::format_percent(slice.value));
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(text);
        });
    }

    render_legend(ui, slices);
}

fn paint_segment(painter: &egui::Painter, center: Pos2, segment: &PieSegment, color: egui::Color32) {
    if segment.sweep <= 0.0 {
        return;
    }
    let steps = ((segment.sweep / ARC_STEP).ceil() as usize).max(1);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for step in 0..=steps {
        let angle = segment.start + segment.sweep * step as f32 / steps as f32;
        mesh.colored_vertex(center + Vec2::angled(angle) * RADIUS, color);
    }
    for step in 0..steps as u32 {
        mesh.add_triangle(0, step + 1, step + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}

fn hovered_slice(pointer: Option<Pos2>, center: Pos2, segments: &[PieSegment]) -> Option<usize> {
    let offset = pointer? - center;
    if offset.length() > RADIUS {
        return None;
    }
    chart::segment_at_angle(segments, offset.angle())
}

fn render_legend(ui: &mut egui::Ui, slices: &[ChartSlice]) {
    ui.horizontal(|ui| {
        for (index, slice) in slices.iter().enumerate() {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 0.0, style::slice_color(index));
            ui.label(RichText::new(slice.name).color(style::slice_color(index)));
            ui.add_space(12.0);
        }
    });
}
