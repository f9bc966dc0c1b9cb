//! Repräsentiert einen einzelnen Kontrollpunkt der Strecke.

use glam::{Quat, Vec3};

/// Aktive Rotations-Repräsentation für Bearbeitung und Interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Einheitsquaternion, Interpolation per SLERP
    #[default]
    Quaternion,
    /// Euler-Winkel (XYZ), Interpolation per komponentenweisem LERP
    Euler,
}

/// Achse einer Positions-Komponente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X-Achse
    X,
    /// Y-Achse
    Y,
    /// Z-Achse
    Z,
}

/// Skalar-Komponente der aktiven Rotations-Repräsentation.
///
/// `W` existiert nur im Quaternion-Modus; im Euler-Modus ist eine
/// W-Bearbeitung ein geloggter No-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationComponent {
    /// Skalarteil des Quaternions
    W,
    /// X-Komponente (Quaternion-Imaginärteil bzw. Euler-Winkel um X)
    X,
    /// Y-Komponente
    Y,
    /// Z-Komponente
    Z,
}

/// Ein Kontrollpunkt mit Position und Orientierung
#[derive(Debug, Clone)]
pub struct TrackPoint {
    /// Stabile ID, vergeben bei Erstellung, nie wiederverwendet
    pub id: u64,
    /// Weltposition in Metern
    pub position: Vec3,
    /// Orientierung als Einheitsquaternion (Norm ≈ 1, nach jeder Änderung renormalisiert)
    pub orientation: Quat,
    /// Euler-Winkel-Sicht derselben Rotation (XYZ, Radiant).
    /// Autoritativ nur im Euler-Modus; sonst abgeleiteter Spiegel.
    pub euler_angles: Vec3,
}

impl TrackPoint {
    /// Erstellt einen Punkt mit Identitäts-Orientierung.
    pub fn new(id: u64, position: Vec3) -> Self {
        Self {
            id,
            position,
            orientation: Quat::IDENTITY,
            euler_angles: Vec3::ZERO,
        }
    }
}
