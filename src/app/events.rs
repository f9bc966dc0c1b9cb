//! AppCommand-Enum für den zentralen Command-Datenfluss.
//!
//! Der Host übersetzt rohe Gesten (Taps, Textfelder, Mode-Toggle) in
//! Commands; der Kern konsumiert nie rohe 2D-Koordinaten, sondern nur
//! bereits hit-getestete Punkt-IDs.

use crate::core::{Axis, OrientationComponent, RotationMode};
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt an Weltposition anhängen
    AddPoint {
        /// Weltposition des neuen Punkts
        position: Vec3,
    },
    /// Eine Positions-Koordinate eines Punkts setzen
    SetPositionComponent {
        /// Punkt-ID
        id: u64,
        /// Betroffene Achse
        axis: Axis,
        /// Neuer Koordinatenwert
        value: f32,
    },
    /// Einen Skalar der aktiven Rotations-Repräsentation setzen
    SetOrientationComponent {
        /// Punkt-ID
        id: u64,
        /// Betroffene Komponente
        component: OrientationComponent,
        /// Neuer Komponentenwert
        value: f32,
    },
    /// Aktive Rotations-Repräsentation wechseln
    SetRotationMode {
        /// Neuer Modus
        mode: RotationMode,
    },
    /// Hit-Test-Ergebnis eines Taps verarbeiten (`None` = nichts getroffen)
    TapHit {
        /// Getroffene Punkt-ID, falls vorhanden
        hit: Option<u64>,
    },
}
