//! Die zentrale TrackModel-Datenstruktur: geordnete Kontrollpunkte,
//! Einzel-Selektion und aktiver Rotationsmodus.

use super::interpolation::{euler_to_quat, quat_to_euler};
use super::{Axis, OrientationComponent, RotationMode, TrackChange, TrackPoint};
use glam::{Quat, Vec3};
use std::collections::HashMap;

/// Unterhalb dieser quadrierten Norm gilt ein Quaternion als degeneriert
/// und eine Bearbeitung wird verworfen statt durch ≈0 zu teilen.
const DEGENERATE_NORM_SQUARED: f32 = 1e-12;

/// Geordnete Sammlung aller Kontrollpunkte; alleiniger Eigentümer der Punktdaten.
///
/// Die Reihenfolge entspricht der Erstellungsreihenfolge und ist semantisch
/// bedeutsam (spätere Streckenkurve). Punkte werden in diesem Umfang nie
/// entfernt. Jede Mutation liefert einen [`TrackChange`], damit Konsumenten
/// nur die betroffenen Handles anfassen.
#[derive(Debug)]
pub struct TrackModel {
    /// Punkte in Erstellungsreihenfolge
    points: Vec<TrackPoint>,
    /// ID → Index in `points` für O(1)-Zugriff (IDs werden nie wiederverwendet)
    index: HashMap<u64, usize>,
    /// Nächste zu vergebende Punkt-ID
    next_id: u64,
    /// Aktuell selektierter Punkt (ID-Rückverweis, nie owning)
    selected_id: Option<u64>,
    /// Aktive Rotations-Repräsentation
    rotation_mode: RotationMode,
}

impl TrackModel {
    /// Erstellt ein leeres Modell im Quaternion-Modus.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
            selected_id: None,
            rotation_mode: RotationMode::Quaternion,
        }
    }

    /// Hängt einen neuen Punkt mit Identitäts-Orientierung an.
    ///
    /// Schlägt nie fehl; gibt die vergebene ID zurück. Die zugehörige
    /// Änderung ist `Structural { [id] }`.
    pub fn add_point(&mut self, position: Vec3) -> (u64, TrackChange) {
        let id = self.next_id;
        self.next_id += 1;

        self.index.insert(id, self.points.len());
        self.points.push(TrackPoint::new(id, position));

        (id, TrackChange::Structural { ids: vec![id] })
    }

    /// Überschreibt eine Positions-Koordinate.
    ///
    /// Unbekannte ID → No-op (`TrackChange::None`). Der Punkt wird nur
    /// verschoben, kein neues Handle nötig → `VisualOnly`.
    pub fn update_position(&mut self, id: u64, axis: Axis, value: f32) -> TrackChange {
        let Some(point) = self.point_mut(id) else {
            log::warn!("update_position: unbekannte Punkt-ID {id}");
            return TrackChange::None;
        };

        match axis {
            Axis::X => point.position.x = value,
            Axis::Y => point.position.y = value,
            Axis::Z => point.position.z = value,
        }

        TrackChange::VisualOnly { ids: vec![id] }
    }

    /// Bearbeitet einen Skalar der aktiven Rotations-Repräsentation.
    ///
    /// Quaternion-Modus: Komponente setzen, dann renormalisieren; eine
    /// degenerierte Bearbeitung (Norm ≈ 0) wird verworfen. Euler-Modus:
    /// Winkel setzen und den Quaternion-Spiegel neu ableiten; `W` hat dort
    /// kein Gegenstück und ist ein geloggter No-op.
    pub fn update_orientation_component(
        &mut self,
        id: u64,
        component: OrientationComponent,
        value: f32,
    ) -> TrackChange {
        let mode = self.rotation_mode;
        let Some(point) = self.point_mut(id) else {
            log::warn!("update_orientation_component: unbekannte Punkt-ID {id}");
            return TrackChange::None;
        };

        match mode {
            RotationMode::Quaternion => {
                let q = point.orientation;
                let edited = match component {
                    OrientationComponent::W => Quat::from_xyzw(q.x, q.y, q.z, value),
                    OrientationComponent::X => Quat::from_xyzw(value, q.y, q.z, q.w),
                    OrientationComponent::Y => Quat::from_xyzw(q.x, value, q.z, q.w),
                    OrientationComponent::Z => Quat::from_xyzw(q.x, q.y, value, q.w),
                };

                if edited.length_squared() < DEGENERATE_NORM_SQUARED {
                    log::warn!("Degenerierte Quaternion-Bearbeitung an Punkt {id} verworfen");
                    return TrackChange::None;
                }

                point.orientation = edited.normalize();
                point.euler_angles = quat_to_euler(point.orientation);
            }
            RotationMode::Euler => {
                match component {
                    OrientationComponent::W => {
                        log::warn!("W-Komponente hat im Euler-Modus kein Gegenstück (Punkt {id})");
                        return TrackChange::None;
                    }
                    OrientationComponent::X => point.euler_angles.x = value,
                    OrientationComponent::Y => point.euler_angles.y = value,
                    OrientationComponent::Z => point.euler_angles.z = value,
                }
                point.orientation = euler_to_quat(point.euler_angles);
            }
        }

        TrackChange::VisualOnly { ids: vec![id] }
    }

    /// Wechselt die aktive Rotations-Repräsentation.
    ///
    /// Konvertiert für jeden Punkt die nicht-autoritative Repräsentation aus
    /// der autoritativen. Quaternion→Euler kann im Gimbal Lock mehrdeutig
    /// sein; betroffen ist dann nur das Euler-Tripel des jeweiligen Punkts,
    /// das Quaternion bleibt gültig.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) -> TrackChange {
        if self.rotation_mode == mode {
            return TrackChange::None;
        }

        self.rotation_mode = mode;
        for point in &mut self.points {
            match mode {
                // Euler wird autoritativ: Tripel aus dem Quaternion ableiten
                RotationMode::Euler => point.euler_angles = quat_to_euler(point.orientation),
                // Quaternion wird autoritativ: aus dem Euler-Tripel neu aufbauen
                RotationMode::Quaternion => point.orientation = euler_to_quat(point.euler_angles),
            }
        }

        TrackChange::VisualOnly {
            ids: self.points.iter().map(|p| p.id).collect(),
        }
    }

    /// Selektiert einen Punkt (Toggle-Semantik).
    ///
    /// Erneutes Selektieren derselben ID hebt die Selektion auf; eine andere
    /// ID ersetzt die bisherige Selektion ohne Zwischenzustand. Unbekannte
    /// ID → No-op. Die Änderung umfasst nur alte und neue Selektion.
    pub fn select_point(&mut self, id: u64) -> TrackChange {
        if !self.index.contains_key(&id) {
            log::warn!("select_point: unbekannte Punkt-ID {id}");
            return TrackChange::None;
        }

        let mut ids = Vec::with_capacity(2);
        if self.selected_id == Some(id) {
            self.selected_id = None;
            ids.push(id);
        } else {
            if let Some(old) = self.selected_id {
                ids.push(old);
            }
            self.selected_id = Some(id);
            ids.push(id);
        }

        TrackChange::VisualOnly { ids }
    }

    /// Alle Punkte in Erstellungsreihenfolge.
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Punkt per ID (read-only).
    pub fn point(&self, id: u64) -> Option<&TrackPoint> {
        self.index.get(&id).map(|&i| &self.points[i])
    }

    fn point_mut(&mut self, id: u64) -> Option<&mut TrackPoint> {
        let i = *self.index.get(&id)?;
        Some(&mut self.points[i])
    }

    /// Aktuell selektierte Punkt-ID.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Aktive Rotations-Repräsentation.
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte existieren.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for TrackModel {
    fn default() -> Self {
        Self::new()
    }
}
