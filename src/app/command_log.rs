//! Verlauf der ausgeführten Commands für das Diagnose-Fenster.
//!
//! Viewport-Änderungen werden nicht protokolliert, aufeinanderfolgende
//! Drag-Schritte werden zu einem Eintrag mit Zähler zusammengefasst.

use std::collections::VecDeque;
use std::fmt;

use super::AppCommand;

/// Ein protokollierter Command (bzw. eine Folge gleicher Drag-Schritte).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLogEntry {
    /// Variantenname des Commands
    pub kind: &'static str,
    /// Anzeige-Detail, z.B. Klickposition
    pub detail: Option<String>,
    /// Anzahl zusammengefasster Ausführungen (mindestens 1)
    pub repeat: u32,
}

impl fmt::Display for CommandLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(detail) = &self.detail {
            write!(f, " {detail}")?;
        }
        if self.repeat > 1 {
            write!(f, " ×{}", self.repeat)?;
        }
        Ok(())
    }
}

/// Begrenzter Command-Verlauf, älteste Einträge fallen heraus.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: &AppCommand) {
        match command {
            AppCommand::SetViewportSize { .. } => return,
            AppCommand::DragSelectedControlPoint { .. } => {
                if let Some(last) = self.entries.back_mut() {
                    if last.kind == command.kind() {
                        last.repeat = last.repeat.saturating_add(1);
                        return;
                    }
                }
            }
            _ => {}
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(CommandLogEntry {
            kind: command.kind(),
            detail: command.detail(),
            repeat: 1,
        });
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Jüngster Eintrag.
    pub fn last(&self) -> Option<&CommandLogEntry> {
        self.entries.back()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }

    /// Die letzten `count` Einträge, jüngste zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter().rev().take(count)
    }
}
