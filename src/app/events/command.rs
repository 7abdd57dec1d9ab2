use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt innerhalb des Pick-Radius selektieren (sonst Selektion leeren)
    SelectControlPointAt {
        world_pos: glam::Vec2,
        pick_radius: f32,
    },
    /// Selektierten Kontrollpunkt (inkl. gekoppeltem Steuerpunkt) verschieben
    DragSelectedControlPoint { delta_world: glam::Vec2 },
    /// Selektion aufheben
    ReleaseSelection,
    /// Canvas-Größe übernehmen
    SetViewportSize { size: [f32; 2] },
    /// Kurve auf Startkonfiguration setzen
    ResetCurve,
    /// Diagnose-Fenster umschalten
    ToggleDiagnostics,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname des Commands (Variantenname) für Log und Diagnose.
    pub fn kind(&self) -> &'static str {
        match self {
            AppCommand::SelectControlPointAt { .. } => "SelectControlPointAt",
            AppCommand::DragSelectedControlPoint { .. } => "DragSelectedControlPoint",
            AppCommand::ReleaseSelection => "ReleaseSelection",
            AppCommand::SetViewportSize { .. } => "SetViewportSize",
            AppCommand::ResetCurve => "ResetCurve",
            AppCommand::ToggleDiagnostics => "ToggleDiagnostics",
            AppCommand::OpenOptionsDialog => "OpenOptionsDialog",
            AppCommand::CloseOptionsDialog => "CloseOptionsDialog",
            AppCommand::ApplyOptions { .. } => "ApplyOptions",
            AppCommand::ResetOptions => "ResetOptions",
            AppCommand::RequestExit => "RequestExit",
        }
    }

    /// Optionales Detail für die Anzeige (z.B. Klickposition).
    pub fn detail(&self) -> Option<String> {
        match self {
            AppCommand::SelectControlPointAt { world_pos, .. } => {
                Some(format!("({:.2}, {:.2})", world_pos.x, world_pos.y))
            }
            _ => None,
        }
    }
}
