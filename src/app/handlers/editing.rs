//! Handler für Kurven-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kurve auf die Startkonfiguration zurück.
pub fn reset_curve(state: &mut AppState) {
    use_cases::curve::reset_curve(state);
}
