//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ControlPoint;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, is_valid_function: bool) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if is_valid_function {
                ui.label(egui::RichText::new("✔ Valid function").color(egui::Color32::LIGHT_GREEN));
            } else {
                ui.label(egui::RichText::new("✖ Not a function").color(egui::Color32::LIGHT_RED));
            }

            ui.separator();

            for point in ControlPoint::ALL {
                let pos = state.curve.point(point);
                ui.label(format!("{}: ({:.2}, {:.2})", point.label(), pos.x, pos.y));
            }

            ui.separator();

            match state.selection.selected_point {
                Some(point) => ui.label(format!("Selected: {}", point.label())),
                None => ui.label("Selected: -"),
            };
        });
    });
}
