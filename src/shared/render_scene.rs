//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Koordinaten sind Welt-Koordinaten; die Umrechnung in Pixel
//! übernimmt der Renderer über `CanvasTransform`.

use crate::core::{CanvasTransform, MonotonicReport};
use glam::Vec2;

/// Linie zwischen zwei Weltpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLine {
    pub from: Vec2,
    pub to: Vec2,
    /// Farbe (RGBA, nicht vormultipliziert)
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub width_px: f32,
}

/// Gefüllter Kreis mit Umriss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCircle {
    pub center: Vec2,
    /// Radius in Welteinheiten
    pub radius: f32,
    pub fill: [f32; 4],
    pub outline: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Abbildung Welt → Canvas für diesen Frame
    pub canvas: CanvasTransform,
    /// Hintergrundfarbe (zeigt Gültigkeit an)
    pub background: [f32; 4],
    /// Hilfslinien Anker → Steuerpunkt
    pub guides: Vec<SceneLine>,
    /// Abgetastete Kurve
    pub curve: Vec<SceneLine>,
    /// Kontrollpunkte P0..P3
    pub points: Vec<SceneCircle>,
    /// Klassifikationsergebnis für Diagnoseanzeigen
    pub report: MonotonicReport,
}

impl RenderScene {
    /// Gibt zurück, ob die Kurve als gültige Funktion gilt.
    pub fn is_valid_function(&self) -> bool {
        self.report.is_valid()
    }
}
