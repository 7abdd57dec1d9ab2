//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::ControlPoint;
use crate::shared::{RenderScene, SceneCircle, SceneLine};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Klassifikation wird pro Frame neu berechnet und nie zwischengespeichert.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;
    let opts = &state.options;
    let report = curve.classify_monotonic();

    let background = if report.is_valid() {
        opts.background_valid
    } else {
        opts.background_invalid
    };

    let guide_color = opts.guide_color_with_alpha();
    let guide = |anchor: ControlPoint, handle: ControlPoint| SceneLine {
        from: curve.point(anchor),
        to: curve.point(handle),
        color: guide_color,
        width_px: opts.guide_stroke_width_px,
    };
    let guides = vec![
        guide(ControlPoint::Start, ControlPoint::StartHandle),
        guide(ControlPoint::End, ControlPoint::EndHandle),
    ];

    let curve_lines = curve
        .sample_segments(opts.curve_segments)
        .into_iter()
        .map(|segment| SceneLine {
            from: segment.from,
            to: segment.to,
            color: if segment.increasing {
                opts.curve_color_increasing
            } else {
                opts.curve_color_decreasing
            },
            width_px: opts.curve_stroke_width_px,
        })
        .collect();

    let points = ControlPoint::ALL
        .into_iter()
        .map(|point| SceneCircle {
            center: curve.point(point),
            radius: opts.point_radius,
            fill: if state.selection.selected_point == Some(point) {
                opts.point_color_selected
            } else {
                opts.point_color
            },
            outline: opts.point_outline_color,
        })
        .collect();

    RenderScene {
        canvas: state.view.canvas(),
        background,
        guides,
        curve: curve_lines,
        points,
        report,
    }
}
