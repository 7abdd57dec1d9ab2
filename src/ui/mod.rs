//! UI-Komponenten: Menü, Status-Bar, Diagnose, Optionen, Input-Handling.

pub mod diagnostics;
pub mod input;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use diagnostics::{diagnostic_lines, recent_command_lines, show_diagnostics_window};
pub use input::{InputState, PointerSample};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
