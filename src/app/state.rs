//! Application State — zentrale Datenhaltung.

use super::selection::SelectionCoordinator;
use super::CommandLog;
use crate::core::TrackModel;
use crate::shared::EditorOptions;

/// Gesamtzustand der Editing-Session.
///
/// Besitzt das TrackModel exklusiv (Single-Writer, ein Logik-Thread);
/// keine andere Komponente konstruiert oder zerstört Punktdaten.
#[derive(Default)]
pub struct AppState {
    /// Das Streckenmodell (alleiniger Eigentümer der Punktdaten)
    pub track: TrackModel,
    /// Selektions-Zustandsmaschine
    pub selection: SelectionCoordinator,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren Anwendungszustand.
    pub fn new() -> Self {
        Self {
            track: TrackModel::new(),
            selection: SelectionCoordinator::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Erstellt einen Zustand mit den Start-Kontrollpunkten aus den Optionen
    /// (Standard: drei Punkte vor der Kamera, Identitäts-Orientierung).
    pub fn with_initial_points(options: &EditorOptions) -> Self {
        let mut state = Self::new();
        for &position in &options.initial_positions {
            state.track.add_point(position);
        }
        log::info!(
            "Session mit {} Start-Punkten initialisiert",
            state.track.len()
        );
        state
    }
}
