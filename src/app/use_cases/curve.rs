//! Use-Case: Kurve auf die Startkonfiguration zurücksetzen.

use crate::core::CubicBezier;
use crate::AppState;

/// Setzt alle vier Punkte zurück und hebt eine laufende Selektion auf.
pub fn reset_curve(state: &mut AppState) {
    state.curve = CubicBezier::initial();
    state.selection.selected_point = None;
    log::info!("Kurve auf Startkonfiguration zurückgesetzt");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPoint;

    #[test]
    fn reset_restores_initial_points_and_clears_selection() {
        let mut state = AppState::new();
        state
            .curve
            .translate_point(ControlPoint::End, glam::Vec2::new(1.0, 1.0));
        state.selection.selected_point = Some(ControlPoint::End);

        reset_curve(&mut state);

        assert_eq!(state.curve, CubicBezier::initial());
        assert!(!state.selection.has_selection());
    }
}
