//! Selektions-Zustandsmaschine: übersetzt Hit-Test-Ergebnisse in
//! Selektionswechsel auf dem TrackModel.

use crate::core::{TrackChange, TrackModel};

/// Phase der Selektions-Zustandsmaschine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Kein Punkt selektiert
    #[default]
    NoneSelected,
    /// Genau ein Punkt selektiert
    Selected(u64),
}

/// Zustandsmaschine über `{NoneSelected, Selected(id)}`.
///
/// Übergänge:
/// - `NoneSelected --tap(id)--> Selected(id)`
/// - `Selected(id) --tap(id)--> NoneSelected` (erneutes Antippen deselektiert)
/// - `Selected(a) --tap(b≠a)--> Selected(b)` (direkter Wechsel, kein
///   Zwischenzustand)
/// - `tap(None)` wird ignoriert, kein Übergang.
///
/// Jeder Übergang liefert die `VisualOnly`-Änderung des Modells, beschränkt
/// auf alte und neue Selektion; ein struktureller Resync wird nie ausgelöst.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    phase: SelectionPhase,
}

impl SelectionCoordinator {
    /// Erstellt die Zustandsmaschine im Zustand `NoneSelected`.
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::NoneSelected,
        }
    }

    /// Aktuelle Phase (spiegelt `model.selected_id()`).
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Verarbeitet ein Hit-Test-Ergebnis.
    ///
    /// `None` (nichts getroffen) und unbekannte IDs sind No-ops. Die
    /// eigentliche Selektion delegiert an [`TrackModel::select_point`];
    /// die Phase wird anschließend aus dem Modell übernommen.
    pub fn handle_tap(&mut self, track: &mut TrackModel, hit: Option<u64>) -> TrackChange {
        let Some(id) = hit else {
            return TrackChange::None;
        };

        let change = track.select_point(id);
        if !change.is_none() {
            self.phase = match track.selected_id() {
                Some(selected) => SelectionPhase::Selected(selected),
                None => SelectionPhase::NoneSelected,
            };
        }

        change
    }
}
