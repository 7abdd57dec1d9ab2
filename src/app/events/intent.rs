use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste im Canvas gedrückt (Weltposition)
    PointerPressed { world_pos: glam::Vec2 },
    /// Maus bei gedrückter Taste bewegt (Welt-Delta, Y nach oben)
    PointerDragged { delta_world: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Canvas-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kurve auf die Startkonfiguration zurücksetzen
    ResetCurveRequested,
    /// Diagnose-Fenster ein-/ausblenden
    ToggleDiagnosticsRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
