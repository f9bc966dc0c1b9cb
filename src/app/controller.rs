//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppState};
use crate::core::TrackChange;

/// Orchestriert Commands und Use-Cases auf dem AppState.
///
/// Läuft ausschließlich auf dem Logik-Thread; Hit-Test-Ergebnisse anderer
/// Threads erreichen ihn nur über die [`HitQueue`](super::input::HitQueue)
/// als `TapHit`-Commands.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen mutierenden Command auf dem AppState aus und gibt den
    /// Änderungs-Deskriptor zurück, mit dem der Host den Reconciler füttert.
    ///
    /// Kein Command dieses Kerns kann fehlschlagen; der Result-Typ hält die
    /// Schnittstelle für fehlbare Erweiterungen (z.B. Options-I/O) stabil.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<TrackChange> {
        state.command_log.record(&command);

        let change = match command {
            AppCommand::AddPoint { position } => use_cases::editing::add_point(state, position),
            AppCommand::SetPositionComponent { id, axis, value } => {
                use_cases::editing::set_position_component(state, id, axis, value)
            }
            AppCommand::SetOrientationComponent {
                id,
                component,
                value,
            } => use_cases::editing::set_orientation_component(state, id, component, value),
            AppCommand::SetRotationMode { mode } => {
                use_cases::editing::set_rotation_mode(state, mode)
            }
            AppCommand::TapHit { hit } => use_cases::selection::tap_hit(state, hit),
        };

        Ok(change)
    }
}
