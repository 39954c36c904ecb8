//! Accuracy pie chart data: slices, percentage text and slice geometry.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Slice name for the model accuracy.
pub const ACCURACY_LABEL: &str = "Akurasi";
/// Slice name for the remainder of the pie.
pub const REMAINDER_LABEL: &str = "Sisa";

/// One named value of the pie chart dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
}

/// Two-slice dataset `{accuracy, 1 - accuracy}`.
///
/// The values are not clamped; out-of-range accuracies are shown as reported.
pub fn accuracy_slices(accuracy: f64) -> [ChartSlice; 2] {
    [
        ChartSlice {
            name: ACCURACY_LABEL,
            value: accuracy,
        },
        ChartSlice {
            name: REMAINDER_LABEL,
            value: 1.0 - accuracy,
        },
    ]
}

/// Format a fraction as a percentage with two decimals, e.g. `0.87` → `87.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Label drawn next to a slice, e.g. `Akurasi: 87.00%`.
pub fn slice_label(slice: &ChartSlice) -> String {
    format!("{}: {}", slice.name, format_percent(slice.value))
}

/// Angular span of one slice, in radians.
///
/// Angles are measured clockwise in screen space starting at 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSegment {
    pub index: usize,
    pub start: f32,
    pub sweep: f32,
}

impl PieSegment {
    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }

    pub fn mid(&self) -> f32 {
        self.start + self.sweep * 0.5
    }
}

/// Convert slice values into angular spans proportional to their share.
///
/// Negative and non-finite values get a zero sweep. Returns no segments when
/// nothing positive remains.
pub fn pie_segments(slices: &[ChartSlice]) -> Vec<PieSegment> {
    let weights: Vec<f64> = slices
        .iter()
        .map(|slice| {
            if slice.value.is_finite() {
                slice.value.max(0.0)
            } else {
                0.0
            }
        })
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    weights
        .iter()
        .enumerate()
        .map(|(index, weight)| {
            let sweep = (weight / total) as f32 * TAU;
            let segment = PieSegment {
                index,
                start,
                sweep,
            };
            start += sweep;
            segment
        })
        .collect()
}

/// Find the segment under a screen-space angle (as returned by `atan2(dy, dx)`).
pub fn segment_at_angle(segments: &[PieSegment], angle: f32) -> Option<usize> {
    let first = segments.first()?.start;
    let relative = (angle - first).rem_euclid(TAU);
    segments
        .iter()
        .filter(|segment| segment.sweep > 0.0)
        .find(|segment| {
            let offset = segment.start - first;
            relative >= offset && relative < offset + segment.sweep
        })
        .map(|segment| segment.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_splits_into_two_named_slices() {
        let [accuracy, rest] = accuracy_slices(0.87);
        assert_eq!(accuracy.name, "Akurasi");
        assert_eq!(accuracy.value, 0.87);
        assert_eq!(rest.name, "Sisa");
        assert!((rest.value - 0.13).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_accuracy_is_not_clamped() {
        let [_, rest] = accuracy_slices(1.2);
        assert!(rest.value < 0.0);
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(0.87), "87.00%");
        assert_eq!(format_percent(0.12345), "12.35%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(
            slice_label(&ChartSlice {
                name: ACCURACY_LABEL,
                value: 0.5
            }),
            "Akurasi: 50.00%"
        );
    }

    #[test]
    fn segments_cover_full_circle() {
        let segments = pie_segments(&accuracy_slices(0.75));
        assert_eq!(segments.len(), 2);
        assert!((segments[0].start + FRAC_PI_2).abs() < 1e-6);
        assert!((segments[0].sweep - TAU * 0.75).abs() < 1e-5);
        assert!((segments[1].end() - (TAU - FRAC_PI_2)).abs() < 1e-5);
    }

    #[test]
    fn negative_remainder_paints_as_empty() {
        let segments = pie_segments(&accuracy_slices(1.5));
        assert!((segments[0].sweep - TAU).abs() < 1e-5);
        assert_eq!(segments[1].sweep, 0.0);
    }

    #[test]
    fn nothing_positive_yields_no_segments() {
        let slices = [ChartSlice {
            name: ACCURACY_LABEL,
            value: f64::NAN,
        }];
        assert!(pie_segments(&slices).is_empty());
    }

    #[test]
    fn hit_test_finds_slice_under_angle() {
        let segments = pie_segments(&accuracy_slices(0.75));
        // Straight right (3 o'clock) is a quarter turn into the accuracy slice.
        assert_eq!(segment_at_angle(&segments, 0.0), Some(0));
        // Up-left lies in the last quarter, the remainder.
        assert_eq!(segment_at_angle(&segments, -2.5), Some(1));
    }
}
