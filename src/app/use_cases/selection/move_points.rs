//! Use-Case: Verschieben des selektierten Kontrollpunkts.

use crate::AppState;

/// Verschiebt den selektierten Punkt um `delta_world`.
///
/// Ein Anker nimmt seinen Steuerpunkt mit (P0 → P1, P3 → P2).
/// Steuerpunkte bewegen sich allein. Ohne Selektion passiert nichts.
pub fn drag_selected_point(state: &mut AppState, delta_world: glam::Vec2) {
    let Some(point) = state.selection.selected_point else {
        return;
    };

    state.curve.translate_point(point, delta_world);
    if let Some(handle) = point.coupled_handle() {
        state.curve.translate_point(handle, delta_world);
    }
}
