use crate::core::ControlPoint;

/// Auswahlbezogener Anwendungszustand
///
/// Es ist höchstens ein Kontrollpunkt gleichzeitig selektiert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell gezogener Kontrollpunkt (None = keine Selektion)
    pub selected_point: Option<ControlPoint>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_point: None,
        }
    }

    /// Gibt `true` zurück, wenn ein Punkt selektiert ist.
    pub fn has_selection(&self) -> bool {
        self.selected_point.is_some()
    }
}
