//! Core-Domänentypen: Bézier-Kurve, Monotonie-Klassifikation, Canvas-Abbildung.

/// Kubische Bézier-Kurve
///
/// Vier Kontrollpunkte, Auswertung B(t) und Abtastung als Polylinie.
pub mod bezier;
pub mod canvas;
pub mod monotonic;

pub use bezier::{ControlPoint, CubicBezier, CurveSegment};
pub use canvas::CanvasTransform;
pub use monotonic::{ClassificationBranch, DerivativeCoefficients, MonotonicReport};
