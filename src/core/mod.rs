//! Core-Domänentypen: Kontrollpunkte, TrackModel, Änderungs-Deskriptor,
//! Orientierungs-Interpolation.

pub mod change;
pub mod interpolation;
/// Core-Datenmodelle des Strecken-Editors
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - TrackPoint: einzelner Kontrollpunkt mit Position und Orientierung
/// - TrackModel: geordnete Sammlung aller Punkte plus Selektion und Modus
/// - TrackChange: typisierter Änderungs-Deskriptor jeder Mutation
pub mod point;
pub mod track;

pub use change::TrackChange;
pub use point::{Axis, OrientationComponent, RotationMode, TrackPoint};
pub use track::TrackModel;
