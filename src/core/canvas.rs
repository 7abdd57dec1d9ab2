//! Abbildung zwischen Canvas-Pixeln und Welt-Koordinaten.

use glam::Vec2;

/// Normierte Zeichenfläche: Ursprung in der Mitte, Y nach oben,
/// die Canvas-Höhe entspricht dem Welt-Bereich [-1, 1].
///
/// Die Breite ergibt sich aus dem Seitenverhältnis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Canvas-Größe in Pixeln
    pub size: Vec2,
}

impl CanvasTransform {
    /// Sichtbare Welt-Halbhöhe.
    pub const WORLD_HALF_HEIGHT: f32 = 1.0;

    /// Erstellt eine Abbildung für eine Canvas-Größe in Pixeln.
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Pixel pro Welteinheit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.size.y.max(1.0) * 0.5 / Self::WORLD_HALF_HEIGHT
    }

    /// Konvertiert Canvas-Koordinaten (links oben = 0,0) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let centered = screen_pos - self.size * 0.5;
        let scale = self.pixels_per_unit();
        Vec2::new(centered.x / scale, -centered.y / scale)
    }

    /// Konvertiert Welt-Koordinaten zu Canvas-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit();
        Vec2::new(world_pos.x * scale, -world_pos.y * scale) + self.size * 0.5
    }

    /// Rechnet ein Pixel-Delta (Y nach unten) in ein Welt-Delta (Y nach oben) um.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit();
        Vec2::new(delta.x / scale, -delta.y / scale)
    }

    /// Rechnet eine Welt-Länge (z.B. Punktradius) in Pixel um.
    pub fn world_to_pixels(&self, length: f32) -> f32 {
        length * self.pixels_per_unit()
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}
