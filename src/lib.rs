//! Bézier Function Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{
    CanvasTransform, ClassificationBranch, ControlPoint, CubicBezier, CurveSegment,
    DerivativeCoefficients, MonotonicReport,
};
pub use shared::{EditorOptions, RenderScene};
