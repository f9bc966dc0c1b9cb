//! Use-Case: Tap-Selektion aus Hit-Test-Ergebnissen.

use crate::app::AppState;
use crate::core::TrackChange;

/// Verarbeitet ein Hit-Test-Ergebnis über die Selektions-Zustandsmaschine.
///
/// `None` (Tap ins Leere) wird ignoriert; die zurückgegebene Änderung ist
/// auf alte und neue Selektion beschränkt.
pub fn tap_hit(state: &mut AppState, hit: Option<u64>) -> TrackChange {
    let change = state.selection.handle_tap(&mut state.track, hit);
    if !change.is_none() {
        match state.track.selected_id() {
            Some(id) => log::info!("Punkt {id} selektiert"),
            None => log::info!("Selektion aufgehoben"),
        }
    }
    change
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SelectionPhase;
    use glam::Vec3;

    #[test]
    fn tap_selects_and_repeat_tap_deselects() {
        let mut state = AppState::new();
        let (id, _) = state.track.add_point(Vec3::ZERO);

        tap_hit(&mut state, Some(id));
        assert_eq!(state.selection.phase(), SelectionPhase::Selected(id));

        tap_hit(&mut state, Some(id));
        assert_eq!(state.selection.phase(), SelectionPhase::NoneSelected);
    }

    #[test]
    fn tap_into_empty_space_is_ignored() {
        let mut state = AppState::new();
        let (id, _) = state.track.add_point(Vec3::ZERO);
        tap_hit(&mut state, Some(id));

        let change = tap_hit(&mut state, None);
        assert!(change.is_none());
        assert_eq!(state.selection.phase(), SelectionPhase::Selected(id));
    }
}
