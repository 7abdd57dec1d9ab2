//! Optionen-Dialog für Farben, Radien und Abtastung.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{CURVE_SEGMENTS_RANGE, RADIUS_RANGE, STROKE_WIDTH_RANGE};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Kontrollpunkte ──────────────────────────────
            ui.collapsing("Kontrollpunkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius (Welt):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_radius)
                                .range(RADIUS_RANGE)
                                .speed(0.001),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Pick-Radius (Welt):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.pick_radius)
                                .range(RADIUS_RANGE)
                                .speed(0.001),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Füllfarbe:", &mut opts.point_color);
                changed |= color_edit(ui, "Selektiert:", &mut opts.point_color_selected);
                changed |= color_edit(ui, "Umriss:", &mut opts.point_outline_color);
            });

            // ── Kurve ───────────────────────────────────────
            ui.collapsing("Kurve", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Abschnitte:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.curve_segments).range(CURVE_SEGMENTS_RANGE))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_stroke_width_px)
                                .range(STROKE_WIDTH_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Steigend:", &mut opts.curve_color_increasing);
                changed |= color_edit(ui, "Fallend:", &mut opts.curve_color_decreasing);
            });

            // ── Hilfslinien ─────────────────────────────────
            ui.collapsing("Hilfslinien", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Deckkraft:");
                    changed |= ui
                        .add(egui::Slider::new(&mut opts.guide_alpha, 0.0..=1.0))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.guide_stroke_width_px)
                                .range(STROKE_WIDTH_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.guide_color);
            });

            // ── Hintergrund ─────────────────────────────────
            ui.collapsing("Hintergrund", |ui| {
                changed |= color_edit(ui, "Gültig:", &mut opts.background_valid);
                changed |= color_edit(ui, "Ungültig:", &mut opts.background_invalid);
                changed |= ui
                    .checkbox(&mut opts.show_diagnostics, "Diagnose beim Start zeigen")
                    .changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
