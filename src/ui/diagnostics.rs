//! Diagnose-Fenster: textuelle Darstellung der Monotonie-Klassifikation.

use crate::app::CommandLog;
use crate::core::{ClassificationBranch, MonotonicReport};

/// Anzahl der im Diagnose-Fenster gezeigten Commands.
const RECENT_COMMANDS: usize = 8;

/// Formatiert den Klassifikationsbericht als Textzeilen.
pub fn diagnostic_lines(report: &MonotonicReport) -> Vec<String> {
    let coeffs = report.coefficients;
    let mut lines = vec![format!(
        "x'(t) = {:.3}·t² + {:.3}·t + {:.3}",
        coeffs.a, coeffs.b, coeffs.c
    )];

    match report.branch {
        ClassificationBranch::LinearDerivative => {
            lines.push("a = 0: linear derivative (not handled)".to_string());
        }
        ClassificationBranch::NoRealRoots { discriminant } => {
            lines.push(format!("Delta negative ({discriminant:.3})"));
        }
        ClassificationBranch::TwoRoots {
            discriminant,
            root1,
            root2,
        } => {
            lines.push(format!("Delta positive ({discriminant:.3})"));
            lines.push(format!("Root1: {root1:.3}"));
            lines.push(format!("Root2: {root2:.3}"));
            lines.push(if report.opens_upward() {
                "a positive".to_string()
            } else {
                "a negative".to_string()
            });
        }
        ClassificationBranch::DoubleRoot => {
            lines.push("Delta zero (double root, assumed valid)".to_string());
        }
    }

    lines.push(if report.is_valid() {
        "Valid function".to_string()
    } else {
        "Not a function".to_string()
    });

    lines
}

/// Die jüngsten Commands als Textzeilen, jüngster zuerst.
pub fn recent_command_lines(log: &CommandLog, count: usize) -> Vec<String> {
    log.recent(count).map(ToString::to_string).collect()
}

/// Zeigt das Diagnose-Fenster (falls aktiviert).
pub fn show_diagnostics_window(
    ctx: &egui::Context,
    visible: bool,
    report: &MonotonicReport,
    command_log: &CommandLog,
) {
    if !visible {
        return;
    }

    egui::Window::new("Diagnostics")
        .collapsible(true)
        .resizable(false)
        .default_pos([16.0, 48.0])
        .show(ctx, |ui| {
            for line in diagnostic_lines(report) {
                ui.label(line);
            }

            ui.separator();
            ui.collapsing("Letzte Commands", |ui| {
                let lines = recent_command_lines(command_log, RECENT_COMMANDS);
                if lines.is_empty() {
                    ui.weak("(keine)");
                }
                for line in lines {
                    ui.monospace(line);
                }
            });
        });
}
