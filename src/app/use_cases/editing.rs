//! Use-Cases: Punkte anlegen und Felder bearbeiten.

use crate::app::AppState;
use crate::core::{Axis, OrientationComponent, RotationMode, TrackChange};
use glam::Vec3;

/// Hängt einen neuen Kontrollpunkt an die Strecke an.
pub fn add_point(state: &mut AppState, position: Vec3) -> TrackChange {
    let (id, change) = state.track.add_point(position);
    log::info!(
        "Punkt {} an Position ({:.2}, {:.2}, {:.2}) hinzugefügt",
        id,
        position.x,
        position.y,
        position.z
    );
    change
}

/// Setzt eine Positions-Koordinate eines Punkts.
pub fn set_position_component(state: &mut AppState, id: u64, axis: Axis, value: f32) -> TrackChange {
    state.track.update_position(id, axis, value)
}

/// Setzt einen Skalar der aktiven Rotations-Repräsentation.
pub fn set_orientation_component(
    state: &mut AppState,
    id: u64,
    component: OrientationComponent,
    value: f32,
) -> TrackChange {
    state.track.update_orientation_component(id, component, value)
}

/// Wechselt die aktive Rotations-Repräsentation für alle Punkte.
pub fn set_rotation_mode(state: &mut AppState, mode: RotationMode) -> TrackChange {
    let change = state.track.set_rotation_mode(mode);
    if !change.is_none() {
        log::info!("Rotationsmodus gewechselt: {mode:?}");
    }
    change
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_reports_structural_change() {
        let mut state = AppState::new();
        let change = add_point(&mut state, Vec3::new(0.1, 0.2, 0.3));
        assert!(matches!(change, TrackChange::Structural { .. }));
        assert_eq!(state.track.len(), 1);
    }

    #[test]
    fn edits_on_unknown_ids_are_noops() {
        let mut state = AppState::new();
        assert!(set_position_component(&mut state, 7, Axis::X, 1.0).is_none());
        assert!(
            set_orientation_component(&mut state, 7, OrientationComponent::W, 1.0).is_none()
        );
    }

    #[test]
    fn mode_switch_reports_all_points() {
        let mut state = AppState::new();
        add_point(&mut state, Vec3::ZERO);
        add_point(&mut state, Vec3::ONE);

        let change = set_rotation_mode(&mut state, RotationMode::Euler);
        assert_eq!(change.ids().len(), 2);
        // Erneuter Wechsel in denselben Modus ist ein No-op
        assert!(set_rotation_mode(&mut state, RotationMode::Euler).is_none());
    }
}
