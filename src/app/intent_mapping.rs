//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::SelectControlPointAt {
            world_pos,
            pick_radius: state.options.pick_radius,
        }],
        AppIntent::PointerDragged { delta_world } => {
            // Ohne Selektion kein Command: hält das Log frei von Leerlauf-Drags
            if state.selection.has_selection() {
                vec![AppCommand::DragSelectedControlPoint { delta_world }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::ReleaseSelection],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetCurveRequested => vec![AppCommand::ResetCurve],
        AppIntent::ToggleDiagnosticsRequested => vec![AppCommand::ToggleDiagnostics],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPoint;

    #[test]
    fn pointer_press_uses_pick_radius_from_options() {
        let mut state = AppState::new();
        state.options.pick_radius = 0.125;

        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                world_pos: glam::Vec2::new(0.3, 0.4),
            },
        );

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            AppCommand::SelectControlPointAt {
                world_pos,
                pick_radius,
            } => {
                assert_eq!(*world_pos, glam::Vec2::new(0.3, 0.4));
                assert_eq!(*pick_radius, 0.125);
            }
            other => panic!("Unerwarteter Command: {other:?}"),
        }
    }

    #[test]
    fn pointer_drag_without_selection_maps_to_nothing() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerDragged {
                delta_world: glam::Vec2::new(0.1, 0.0),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn pointer_drag_with_selection_maps_to_drag_command() {
        let mut state = AppState::new();
        state.selection.selected_point = Some(ControlPoint::End);
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerDragged {
                delta_world: glam::Vec2::new(0.1, 0.0),
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::DragSelectedControlPoint { .. }]
        ));
    }

    #[test]
    fn pointer_release_always_maps_to_release() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);
        assert!(matches!(commands.as_slice(), [AppCommand::ReleaseSelection]));
    }
}
