//! Bézier Function Editor.
//!
//! Interaktiver Editor für eine kubische Bézier-Kurve: zeigt an, ob die Kurve
//! eine gültige Funktion y = f(x) ist (x(t) monoton steigend auf [0, 1]).

use bezier_function_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Function Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_maximized(true)
                .with_title("Bezier Function Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Function Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Szene einmal pro Frame aus dem aktuellen Zustand bauen
        let scene = self.controller.build_render_scene(&self.state);

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state, scene.is_valid_function());
        ui::show_diagnostics_window(
            ctx,
            self.state.view.show_diagnostics,
            &scene.report,
            &self.state.command_log,
        );
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let canvas = bezier_function_editor::CanvasTransform::new(glam::Vec2::new(
                    rect.width(),
                    rect.height(),
                ));

                events.extend(self.input.collect_canvas_events(ui, &response, &canvas));

                // Canvas-Größe kann sich seit dem Bau der Szene geändert haben
                let mut scene = scene;
                scene.canvas = canvas;
                render::paint_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
