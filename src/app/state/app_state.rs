use crate::app::CommandLog;
use crate::core::CubicBezier;
use crate::shared::EditorOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die bearbeitete Kurve (lebt für die gesamte Prozessdauer)
    pub curve: CubicBezier,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Radien)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Startkurve
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.show_diagnostics = options.show_diagnostics;

        Self {
            curve: CubicBezier::initial(),
            view,
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
