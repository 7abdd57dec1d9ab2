//! Kubische Bézier-Kurve mit genau vier Kontrollpunkten.

use super::monotonic::{self, DerivativeCoefficients, MonotonicReport};
use glam::Vec2;

/// Einer der vier Kontrollpunkte einer kubischen Bézier-Kurve.
///
/// `Start` und `End` sind Anker (die Kurve läuft durch sie hindurch),
/// `StartHandle` und `EndHandle` formen nur die Krümmung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    /// P0: Startanker
    Start,
    /// P1: Steuerpunkt am Start
    StartHandle,
    /// P2: Steuerpunkt am Ende
    EndHandle,
    /// P3: Endanker
    End,
}

impl ControlPoint {
    /// Alle Kontrollpunkte in Index-Reihenfolge (P0..P3).
    pub const ALL: [ControlPoint; 4] = [
        ControlPoint::Start,
        ControlPoint::StartHandle,
        ControlPoint::EndHandle,
        ControlPoint::End,
    ];

    /// Index im Punkt-Array (0..=3).
    pub fn index(self) -> usize {
        match self {
            ControlPoint::Start => 0,
            ControlPoint::StartHandle => 1,
            ControlPoint::EndHandle => 2,
            ControlPoint::End => 3,
        }
    }

    /// Steuerpunkt, der beim Verschieben dieses Ankers mitwandert.
    ///
    /// Steuerpunkte selbst sind nicht gekoppelt.
    pub fn coupled_handle(self) -> Option<Self> {
        match self {
            ControlPoint::Start => Some(ControlPoint::StartHandle),
            ControlPoint::End => Some(ControlPoint::EndHandle),
            ControlPoint::StartHandle | ControlPoint::EndHandle => None,
        }
    }

    /// Kurzname für Status- und Diagnoseanzeigen.
    pub fn label(self) -> &'static str {
        match self {
            ControlPoint::Start => "P0",
            ControlPoint::StartHandle => "P1",
            ControlPoint::EndHandle => "P2",
            ControlPoint::End => "P3",
        }
    }
}

/// Ein Abschnitt der abgetasteten Kurve (für das Polylinien-Rendering).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    /// Startpunkt des Abschnitts
    pub from: Vec2,
    /// Endpunkt des Abschnitts
    pub to: Vec2,
    /// `x'(t) >= 0` am Abschnittsende
    pub increasing: bool,
}

/// Kubische Bézier-Kurve P0..P3.
///
/// Das feste Array erzwingt genau vier Punkte. Mutationen laufen über
/// [`CubicBezier::set_point`] bzw. [`CubicBezier::translate_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    points: [Vec2; 4],
}

impl CubicBezier {
    /// Startkonfiguration des Editors (Bogen nach oben, x steigt monoton).
    pub const INITIAL_POINTS: [Vec2; 4] = [
        Vec2::new(-0.5, -0.5),
        Vec2::new(-0.2, 0.5),
        Vec2::new(0.2, 0.5),
        Vec2::new(0.5, -0.5),
    ];

    /// Erstellt eine Kurve aus vier Punkten.
    pub fn new(points: [Vec2; 4]) -> Self {
        Self { points }
    }

    /// Erstellt die Kurve mit der Startkonfiguration.
    pub fn initial() -> Self {
        Self::new(Self::INITIAL_POINTS)
    }

    /// Alle vier Punkte in Index-Reihenfolge.
    pub fn points(&self) -> &[Vec2; 4] {
        &self.points
    }

    /// Position eines Kontrollpunkts.
    pub fn point(&self, point: ControlPoint) -> Vec2 {
        self.points[point.index()]
    }

    /// Setzt die Position eines Kontrollpunkts.
    pub fn set_point(&mut self, point: ControlPoint, position: Vec2) {
        self.points[point.index()] = position;
    }

    /// Verschiebt einen einzelnen Kontrollpunkt (ohne Kopplung).
    pub fn translate_point(&mut self, point: ControlPoint, delta: Vec2) {
        self.points[point.index()] += delta;
    }

    /// B(t) = (1-t)³·P0 + 3t(1-t)²·P1 + 3t²(1-t)·P2 + t³·P3
    ///
    /// `t` wird nicht geklemmt.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        let inv = 1.0 - t;
        p0 * inv * inv * inv + p1 * 3.0 * t * inv * inv + p2 * 3.0 * t * t * inv + p3 * t * t * t
    }

    /// Koeffizienten von x'(t) = a·t² + b·t + c.
    pub fn derivative_coefficients(&self) -> DerivativeCoefficients {
        DerivativeCoefficients::from_x_coordinates(
            self.points[0].x,
            self.points[1].x,
            self.points[2].x,
            self.points[3].x,
        )
    }

    /// Klassifiziert, ob x(t) auf [0, 1] monoton steigt.
    pub fn classify_monotonic(&self) -> MonotonicReport {
        monotonic::classify(self.derivative_coefficients())
    }

    /// Kurzform für `classify_monotonic().is_valid()`.
    pub fn is_valid_function(&self) -> bool {
        self.classify_monotonic().is_valid()
    }

    /// Tastet die Kurve in `segments` gleich große t-Schritte ab.
    ///
    /// Jeder Abschnitt trägt das Vorzeichen von x'(t) an seinem Ende.
    pub fn sample_segments(&self, segments: usize) -> Vec<CurveSegment> {
        if segments == 0 {
            return Vec::new();
        }

        let coefficients = self.derivative_coefficients();
        let mut result = Vec::with_capacity(segments);
        let mut prev = self.points[0];
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let curr = self.evaluate(t);
            result.push(CurveSegment {
                from: prev,
                to: curr,
                increasing: coefficients.eval(t) >= 0.0,
            });
            prev = curr;
        }
        result
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests;
