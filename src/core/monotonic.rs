//! Monotonie-Klassifikation der x-Komponente einer kubischen Bézier-Kurve.
//!
//! x(t) ist genau dann auf [0, 1] nicht fallend, wenn die quadratische
//! Ableitung x'(t) = a·t² + b·t + c dort nirgends negativ wird. Die Prüfung
//! erfolgt analytisch über Diskriminante und Nullstellen.
//!
//! Zwei Zweige sind bewusst unvollständig und bleiben bitkompatibel:
//! - `a == 0` (lineare Ableitung) gilt immer als ungültig, obwohl eine
//!   lineare Ableitung auf [0, 1] durchaus nicht negativ sein kann.
//! - `Δ == 0` (doppelte Nullstelle) gilt immer als gültig, ohne das
//!   Vorzeichen von `a` zu prüfen.

/// Koeffizienten der Ableitung x'(t) = a·t² + b·t + c.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl DerivativeCoefficients {
    /// Berechnet die Koeffizienten aus den x-Koordinaten von P0..P3.
    pub fn from_x_coordinates(x0: f32, x1: f32, x2: f32, x3: f32) -> Self {
        Self {
            a: -3.0 * x0 + 9.0 * x1 - 9.0 * x2 + 3.0 * x3,
            b: 6.0 * x0 - 12.0 * x1 + 6.0 * x2,
            c: -3.0 * x0 + 3.0 * x1,
        }
    }

    /// Wert von x'(t).
    pub fn eval(&self, t: f32) -> f32 {
        self.a * t * t + self.b * t + self.c
    }

    /// Δ = b² − 4ac
    pub fn discriminant(&self) -> f32 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

/// Welcher Zweig der Klassifikation genommen wurde (für Diagnoseanzeigen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassificationBranch {
    /// `a == 0`: nicht behandelt, Ergebnis immer ungültig
    LinearDerivative,
    /// `Δ < 0`: keine reellen Nullstellen, Vorzeichen überall gleich
    NoRealRoots { discriminant: f32 },
    /// `Δ > 0`: zwei Nullstellen, `root1 <= root2`
    TwoRoots {
        discriminant: f32,
        root1: f32,
        root2: f32,
    },
    /// `Δ == 0`: doppelte Nullstelle, Ergebnis immer gültig
    DoubleRoot,
}

/// Ergebnis der Klassifikation inklusive Diagnosedaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotonicReport {
    /// Verwendete Ableitungskoeffizienten
    pub coefficients: DerivativeCoefficients,
    /// Genommener Zweig
    pub branch: ClassificationBranch,
    valid: bool,
}

impl MonotonicReport {
    /// `true`, wenn x(t) auf [0, 1] als monoton steigend gilt.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Öffnet sich die Parabel nach oben (`a > 0`)?
    pub fn opens_upward(&self) -> bool {
        self.coefficients.a > 0.0
    }
}

/// Klassifiziert die Ableitung über [0, 1].
pub fn classify(coefficients: DerivativeCoefficients) -> MonotonicReport {
    let DerivativeCoefficients { a, b, .. } = coefficients;

    // TODO: lineare Ableitung b·t + c über [0, 1] auswerten statt pauschal ungültig
    if a == 0.0 {
        return MonotonicReport {
            coefficients,
            branch: ClassificationBranch::LinearDerivative,
            valid: false,
        };
    }

    let discriminant = coefficients.discriminant();

    let (branch, valid) = if discriminant < 0.0 {
        (ClassificationBranch::NoRealRoots { discriminant }, a > 0.0)
    } else if discriminant > 0.0 {
        let sign = if a > 0.0 { 1.0 } else { -1.0 };
        let sqrt_delta = discriminant.sqrt();
        let root1 = (-b - sign * sqrt_delta) / (2.0 * a);
        let root2 = (-b + sign * sqrt_delta) / (2.0 * a);

        let valid = if a > 0.0 {
            // Negativ zwischen den Nullstellen: Intervall darf (0, 1) nicht schneiden
            root2 <= 0.0 || root1 >= 1.0
        } else {
            // Negativ außerhalb der Nullstellen: [0, 1] muss innen liegen
            root1 <= 0.0 && root2 >= 1.0
        };

        (
            ClassificationBranch::TwoRoots {
                discriminant,
                root1,
                root2,
            },
            valid,
        )
    } else {
        // Δ == 0 (oder NaN bei nicht-endlichen Eingaben)
        (ClassificationBranch::DoubleRoot, true)
    };

    MonotonicReport {
        coefficients,
        branch,
        valid,
    }
}

#[cfg(test)]
mod tests;
