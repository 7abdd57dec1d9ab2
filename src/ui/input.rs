//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Bildet die Host-Callbacks „gedrückt / gezogen / losgelassen“ auf Intents ab.
//! Positionen und Deltas werden über die `CanvasTransform` in Welt-Koordinaten
//! umgerechnet.

use crate::app::AppIntent;
use crate::core::CanvasTransform;
use glam::Vec2;

/// Roh-Eingaben eines Frames für die primäre Maustaste.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Canvas-lokale Position, falls die Taste in diesem Frame über dem Canvas gedrückt wurde
    pub pressed_at: Option<Vec2>,
    /// Mausbewegung seit dem letzten Frame in Pixeln
    pub delta: Vec2,
    /// Taste in diesem Frame losgelassen
    pub released: bool,
}

/// Verwaltet den Input-Zustand für den Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde über dem Canvas gedrückt und ist noch unten
    pointer_down_on_canvas: bool,
    /// Zuletzt gemeldete Canvas-Größe
    last_viewport_size: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_down_on_canvas: false,
            last_viewport_size: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        canvas: &CanvasTransform,
    ) -> Vec<AppIntent> {
        let sample = ui.input(|i| {
            let pressed_at = if i.pointer.primary_pressed() && response.contains_pointer() {
                i.pointer.press_origin().map(|pos| {
                    let local = pos - response.rect.min;
                    Vec2::new(local.x, local.y)
                })
            } else {
                None
            };
            let delta = i.pointer.delta();
            PointerSample {
                pressed_at,
                delta: Vec2::new(delta.x, delta.y),
                released: i.pointer.primary_released(),
            }
        });

        let size = Vec2::new(response.rect.width(), response.rect.height());
        let mut events: Vec<AppIntent> = self.viewport_resized(size).into_iter().collect();
        events.extend(self.process_pointer(sample, canvas));
        events
    }

    /// Meldet die Canvas-Größe nur, wenn sie sich seit der letzten Meldung geändert hat.
    pub fn viewport_resized(&mut self, size: Vec2) -> Option<AppIntent> {
        if self.last_viewport_size == Some(size) {
            return None;
        }
        self.last_viewport_size = Some(size);
        Some(AppIntent::ViewportResized {
            size: size.to_array(),
        })
    }

    /// Übersetzt einen Frame-Sample in Intents (ohne egui-Abhängigkeit testbar).
    pub fn process_pointer(
        &mut self,
        sample: PointerSample,
        canvas: &CanvasTransform,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some(local) = sample.pressed_at {
            events.push(AppIntent::PointerPressed {
                world_pos: canvas.screen_to_world(local),
            });
            self.pointer_down_on_canvas = true;
        } else if self.pointer_down_on_canvas && sample.delta != Vec2::ZERO {
            events.push(AppIntent::PointerDragged {
                delta_world: canvas.screen_delta_to_world(sample.delta),
            });
        }

        if sample.released && self.pointer_down_on_canvas {
            events.push(AppIntent::PointerReleased);
            self.pointer_down_on_canvas = false;
        }

        events
    }
}
