use crate::core::CanvasTransform;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Sichtbarkeit des Diagnose-Fensters
    pub show_diagnostics: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            show_diagnostics: true,
        }
    }

    /// Abbildung Welt ↔ Canvas für die aktuelle Viewport-Größe.
    pub fn canvas(&self) -> CanvasTransform {
        CanvasTransform::new(glam::Vec2::from(self.viewport_size))
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
