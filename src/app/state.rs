//! Application State — zentrale Datenhaltung.

mod app_state;
mod selection;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use view::ViewState;
