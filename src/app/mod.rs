//! Application-Layer: Controller, State, Commands, Selektion und
//! Thread-Übergabe der Hit-Test-Ergebnisse.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod input;
pub mod selection;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Editing-Session
/// (TrackModel, Selektion, Command-Log).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::AppCommand;
pub use input::{hit_channel, HitQueue, HitSender};
pub use selection::{SelectionCoordinator, SelectionPhase};
pub use state::AppState;
