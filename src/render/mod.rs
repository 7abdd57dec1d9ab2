//! Rendering der Render-Szene über den egui-Painter.
//!
//! Die Szene liefert Welt-Koordinaten; hier werden sie über die
//! `CanvasTransform` in Canvas-Pixel relativ zu `rect.min` umgerechnet.

pub use crate::shared::RenderScene;

use crate::shared::{SceneCircle, SceneLine};

/// Konvertiert eine RGBA-Farbe [0, 1] in `egui::Color32` (nicht vormultipliziert).
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// Zeichnet Hintergrund, Hilfslinien, Kurve und Kontrollpunkte.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background));

    for line in &scene.guides {
        paint_line(painter, rect, scene, line);
    }
    for line in &scene.curve {
        paint_line(painter, rect, scene, line);
    }
    for circle in &scene.points {
        paint_circle(painter, rect, scene, circle);
    }
}

fn to_canvas_pos(rect: egui::Rect, scene: &RenderScene, world: glam::Vec2) -> egui::Pos2 {
    let local = scene.canvas.world_to_screen(world);
    egui::pos2(rect.min.x + local.x, rect.min.y + local.y)
}

fn paint_line(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene, line: &SceneLine) {
    painter.line_segment(
        [
            to_canvas_pos(rect, scene, line.from),
            to_canvas_pos(rect, scene, line.to),
        ],
        egui::Stroke::new(line.width_px, to_color32(line.color)),
    );
}

fn paint_circle(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    circle: &SceneCircle,
) {
    painter.circle(
        to_canvas_pos(rect, scene, circle.center),
        scene.canvas.world_to_pixels(circle.radius),
        to_color32(circle.fill),
        egui::Stroke::new(1.5, to_color32(circle.outline)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_color32_maps_unit_range() {
        let c = to_color32([1.0, 0.0, 0.5, 1.0]);
        assert_eq!(c.to_srgba_unmultiplied(), [255, 0, 128, 255]);

        let guide = to_color32([0.0, 0.0, 0.0, 0.1]);
        assert_eq!(guide.a(), 26);
    }

    #[test]
    fn to_color32_clamps_out_of_range_channels() {
        let c = to_color32([2.0, -1.0, 0.0, 1.0]);
        assert_eq!(c.to_srgba_unmultiplied(), [255, 0, 0, 255]);
    }
}
