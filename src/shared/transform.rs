//! Transform-Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `core` ihn liefert und `render` ihn konsumiert,
//! ohne dass der Kern konkrete Render-Typen kennt.

use crate::core::TrackPoint;
use glam::{Quat, Vec3};

/// Position und Orientierung eines Anchors im Weltkoordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTransform {
    /// Weltposition in Metern
    pub position: Vec3,
    /// Orientierung als Einheitsquaternion
    pub orientation: Quat,
}

impl From<&TrackPoint> for PointTransform {
    fn from(point: &TrackPoint) -> Self {
        Self {
            position: point.position,
            orientation: point.orientation,
        }
    }
}
