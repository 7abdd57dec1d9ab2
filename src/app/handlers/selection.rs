//! Handler für Selektion und Ziehen von Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert den Kontrollpunkt unter dem Mauszeiger.
pub fn select_at(state: &mut AppState, world_pos: glam::Vec2, pick_radius: f32) {
    use_cases::selection::pick_control_point(state, world_pos, pick_radius);
}

/// Verschiebt den selektierten Kontrollpunkt um ein Delta.
pub fn drag_selected(state: &mut AppState, delta_world: glam::Vec2) {
    use_cases::selection::drag_selected_point(state, delta_world);
}

/// Hebt die aktuelle Selektion auf.
pub fn release(state: &mut AppState) {
    use_cases::selection::release_selection(state);
}
