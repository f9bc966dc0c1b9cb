//! Zentrale Konfiguration für den Strecken-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Radius der Punkt-Kugel in Metern.
pub const POINT_RADIUS: f32 = 0.03;
/// Länge einer Gizmo-Achse in Metern.
pub const GIZMO_AXIS_LENGTH: f32 = 0.05;
/// Querschnitt einer Gizmo-Achse in Metern.
pub const GIZMO_AXIS_THICKNESS: f32 = 0.005;
/// Standard-Farbe unselektierter Punkte (RGBA: Rot).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe selektierter Punkte (RGBA: Gelb).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Laufzeit-Optionen für Größen, Farben und Start-Strecke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Radius der Punkt-Kugel in Metern
    pub point_radius: f32,
    /// Länge einer Gizmo-Achse in Metern
    pub gizmo_axis_length: f32,
    /// Querschnitt einer Gizmo-Achse in Metern
    pub gizmo_axis_thickness: f32,
    /// Farbe unselektierter Punkte (RGBA)
    pub point_color_default: [f32; 4],
    /// Farbe selektierter Punkte (RGBA)
    pub point_color_selected: [f32; 4],
    /// Weltpositionen der Start-Kontrollpunkte
    pub initial_positions: Vec<Vec3>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            gizmo_axis_length: GIZMO_AXIS_LENGTH,
            gizmo_axis_thickness: GIZMO_AXIS_THICKNESS,
            point_color_default: POINT_COLOR_DEFAULT,
            point_color_selected: POINT_COLOR_SELECTED,
            initial_positions: vec![
                Vec3::new(-0.3, 0.0, -0.6),
                Vec3::new(0.0, 0.0, -0.6),
                Vec3::new(0.3, 0.0, -0.6),
            ],
        }
    }
}

impl EditorOptions {
    /// Parst Optionen aus einem TOML-String; fehlende Felder bekommen Defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("EditorOptions: TOML-Parse fehlgeschlagen")
    }

    /// Serialisiert die Optionen als TOML-String.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("EditorOptions: TOML-Serialisierung fehlgeschlagen")
    }

    /// Lädt Optionen aus einer TOML-Datei.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("EditorOptions: Datei {} nicht lesbar", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Schreibt die Optionen in eine TOML-Datei.
    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("EditorOptions: Datei {} nicht schreibbar", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_constants() {
        let options = EditorOptions::default();
        assert_eq!(options.point_radius, POINT_RADIUS);
        assert_eq!(options.gizmo_axis_length, GIZMO_AXIS_LENGTH);
        assert_eq!(options.initial_positions.len(), 3);
        assert_eq!(options.initial_positions[0], Vec3::new(-0.3, 0.0, -0.6));
    }

    #[test]
    fn toml_round_trip_preserves_options() {
        let mut options = EditorOptions::default();
        options.point_radius = 0.05;
        options.initial_positions.push(Vec3::new(1.0, 2.0, 3.0));

        let toml = options.to_toml_string().unwrap();
        let parsed = EditorOptions::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed = EditorOptions::from_toml_str("point_radius = 0.1\n").unwrap();
        assert_eq!(parsed.point_radius, 0.1);
        assert_eq!(parsed.gizmo_axis_length, GIZMO_AXIS_LENGTH);
    }
}
