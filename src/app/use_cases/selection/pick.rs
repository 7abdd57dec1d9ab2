//! Use-Case: Kontrollpunkt per Klick greifen und wieder loslassen.

use crate::core::{ControlPoint, CubicBezier};
use crate::AppState;

/// Sucht den Kontrollpunkt, der näher als `pick_radius` an `world_pos` liegt.
///
/// Die Punkte werden in Index-Reihenfolge P0..P3 geprüft. Qualifizieren sich
/// mehrere (überlappende Pick-Radien), gewinnt der letzte Treffer, nicht der
/// nächstgelegene.
pub fn hit_test(curve: &CubicBezier, world_pos: glam::Vec2, pick_radius: f32) -> Option<ControlPoint> {
    ControlPoint::ALL
        .into_iter()
        .rev()
        .find(|&point| curve.point(point).distance(world_pos) < pick_radius)
}

/// Selektiert den Kontrollpunkt unter `world_pos`.
///
/// Liegt kein Punkt im Pick-Radius, ist die Selektion danach leer.
pub fn pick_control_point(state: &mut AppState, world_pos: glam::Vec2, pick_radius: f32) {
    let hit = hit_test(&state.curve, world_pos, pick_radius);
    if let Some(point) = hit {
        log::debug!(
            "Kontrollpunkt {} selektiert bei ({:.3}, {:.3})",
            point.label(),
            world_pos.x,
            world_pos.y
        );
    }
    state.selection.selected_point = hit;
}

/// Hebt die Selektion auf (idempotent).
pub fn release_selection(state: &mut AppState) {
    state.selection.selected_point = None;
}
