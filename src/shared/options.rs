//! Zentrale Konfiguration für den Bézier-Funktions-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Radius der gezeichneten Kontrollpunkte (Welteinheiten).
pub const POINT_RADIUS: f32 = 0.05;
/// Zulässiger Bereich für Punkt- und Pick-Radius (Welteinheiten).
pub const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 0.005..=0.3;
/// Pick-Radius (Welteinheiten): Klick näher als dieser Abstand greift den Punkt.
pub const PICK_RADIUS: f32 = 0.05;
/// Füllfarbe der Kontrollpunkte (RGBA: Weiß).
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Füllfarbe des gerade gezogenen Kontrollpunkts (RGBA: Gelb).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Umrissfarbe der Kontrollpunkte (RGBA: Schwarz).
pub const POINT_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Polylinien-Abschnitte über [0, 1].
pub const CURVE_SEGMENTS: usize = 150;
/// Zulässiger Bereich für die Abschnittsanzahl (Dialog und Datei).
pub const CURVE_SEGMENTS_RANGE: std::ops::RangeInclusive<usize> = 1..=2000;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_STROKE_WIDTH_PX: f32 = 2.0;
/// Farbe steigender Abschnitte, x'(t) >= 0 (RGBA: Green Pigment).
pub const CURVE_COLOR_INCREASING: [f32; 4] = [0.0, 0.647, 0.314, 1.0];
/// Farbe fallender Abschnitte, x'(t) < 0 (RGBA: Red Violet).
pub const CURVE_COLOR_DECREASING: [f32; 4] = [0.78, 0.082, 0.522, 1.0];

// ── Hilfslinien ─────────────────────────────────────────────────────

/// Farbe der Anker-Steuerpunkt-Linien (RGBA: Schwarz).
pub const GUIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Deckkraft der Anker-Steuerpunkt-Linien.
pub const GUIDE_ALPHA: f32 = 0.1;
/// Linienstärke der Hilfslinien in Pixeln.
pub const GUIDE_STROKE_WIDTH_PX: f32 = 2.0;
/// Zulässiger Bereich für Linienstärken in Pixeln.
pub const STROKE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 0.5..=10.0;

// ── Hintergrund ─────────────────────────────────────────────────────

/// Hintergrund bei gültiger Funktion (RGBA: Deep Sky Blue).
pub const BACKGROUND_VALID: [f32; 4] = [0.0, 0.749, 1.0, 1.0];
/// Hintergrund bei ungültiger Funktion (RGBA: Red Devil).
pub const BACKGROUND_INVALID: [f32; 4] = [0.525, 0.004, 0.067, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_function_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Radius der Kontrollpunkte in Welteinheiten
    pub point_radius: f32,
    /// Pick-Radius in Welteinheiten
    pub pick_radius: f32,
    /// Füllfarbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Füllfarbe des selektierten Kontrollpunkts
    #[serde(default = "default_point_color_selected")]
    pub point_color_selected: [f32; 4],
    /// Umrissfarbe der Kontrollpunkte
    pub point_outline_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl der Polylinien-Abschnitte
    pub curve_segments: usize,
    /// Linienstärke der Kurve in Pixeln
    pub curve_stroke_width_px: f32,
    /// Farbe steigender Abschnitte
    pub curve_color_increasing: [f32; 4],
    /// Farbe fallender Abschnitte
    pub curve_color_decreasing: [f32; 4],

    // ── Hilfslinien ─────────────────────────────────────────────
    /// Farbe der Anker-Steuerpunkt-Linien
    pub guide_color: [f32; 4],
    /// Deckkraft der Hilfslinien (überschreibt den Alpha-Kanal von `guide_color`)
    #[serde(default = "default_guide_alpha")]
    pub guide_alpha: f32,
    /// Linienstärke der Hilfslinien in Pixeln
    pub guide_stroke_width_px: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrund bei gültiger Funktion
    pub background_valid: [f32; 4],
    /// Hintergrund bei ungültiger Funktion
    pub background_invalid: [f32; 4],

    // ── Anzeige ─────────────────────────────────────────────────
    /// Diagnose-Fenster beim Start anzeigen
    #[serde(default = "default_show_diagnostics")]
    pub show_diagnostics: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            pick_radius: PICK_RADIUS,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            point_outline_color: POINT_OUTLINE_COLOR,

            curve_segments: CURVE_SEGMENTS,
            curve_stroke_width_px: CURVE_STROKE_WIDTH_PX,
            curve_color_increasing: CURVE_COLOR_INCREASING,
            curve_color_decreasing: CURVE_COLOR_DECREASING,

            guide_color: GUIDE_COLOR,
            guide_alpha: GUIDE_ALPHA,
            guide_stroke_width_px: GUIDE_STROKE_WIDTH_PX,

            background_valid: BACKGROUND_VALID,
            background_invalid: BACKGROUND_INVALID,

            show_diagnostics: true,
        }
    }
}

/// Serde-Default für `point_color_selected` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_point_color_selected() -> [f32; 4] {
    POINT_COLOR_SELECTED
}

/// Serde-Default für `guide_alpha`.
fn default_guide_alpha() -> f32 {
    GUIDE_ALPHA
}

/// Serde-Default für `show_diagnostics`.
fn default_show_diagnostics() -> bool {
    true
}

fn clamp_or_default(value: f32, range: &std::ops::RangeInclusive<f32>, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        default
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_function_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_function_editor.toml")
    }

    /// Begrenzt Zahlenwerte auf die Bereiche des Options-Dialogs.
    ///
    /// Nicht-endliche Werte fallen auf den Standardwert zurück.
    pub fn sanitized(mut self) -> Self {
        let clamped = self.curve_segments.clamp(
            *CURVE_SEGMENTS_RANGE.start(),
            *CURVE_SEGMENTS_RANGE.end(),
        );
        if clamped != self.curve_segments {
            log::warn!(
                "curve_segments = {} außerhalb von {:?}, verwende {}",
                self.curve_segments,
                CURVE_SEGMENTS_RANGE,
                clamped
            );
            self.curve_segments = clamped;
        }

        self.point_radius = clamp_or_default(self.point_radius, &RADIUS_RANGE, POINT_RADIUS);
        self.pick_radius = clamp_or_default(self.pick_radius, &RADIUS_RANGE, PICK_RADIUS);
        self.curve_stroke_width_px = clamp_or_default(
            self.curve_stroke_width_px,
            &STROKE_WIDTH_RANGE,
            CURVE_STROKE_WIDTH_PX,
        );
        self.guide_stroke_width_px = clamp_or_default(
            self.guide_stroke_width_px,
            &STROKE_WIDTH_RANGE,
            GUIDE_STROKE_WIDTH_PX,
        );
        self.guide_alpha = clamp_or_default(self.guide_alpha, &(0.0..=1.0), GUIDE_ALPHA);
        self
    }

    /// Hilfslinien-Farbe mit angewendeter Deckkraft.
    pub fn guide_color_with_alpha(&self) -> [f32; 4] {
        let [r, g, b, _] = self.guide_color;
        [r, g, b, self.guide_alpha.clamp(0.0, 1.0)]
    }
}
