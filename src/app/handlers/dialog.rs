//! Handler für Dialoge, Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt geänderte Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Signalisiert dem Host das Beenden der Anwendung.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
