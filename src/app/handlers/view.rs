//! Handler für Viewport und Anzeige-Umschalter.

use crate::app::AppState;

/// Aktualisiert die Canvas-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Blendet das Diagnose-Fenster ein oder aus.
pub fn toggle_diagnostics(state: &mut AppState) {
    state.view.show_diagnostics = !state.view.show_diagnostics;
}
