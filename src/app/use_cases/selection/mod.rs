//! Use-Case-Funktionen für die Kontrollpunkt-Interaktion.
//!
//! Lebenszyklus einer Interaktion:
//! - `pick` — Maus gedrückt: Punkt im Pick-Radius selektieren
//! - `move_points` — Maus gezogen: selektierten Punkt (und gekoppelten Steuerpunkt) verschieben
//! - `pick` — Maus losgelassen: Selektion aufheben

mod move_points;
mod pick;

pub use move_points::drag_selected_point;
pub use pick::{pick_control_point, release_selection};
