//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod transform;

pub use options::EditorOptions;
pub use options::{GIZMO_AXIS_LENGTH, GIZMO_AXIS_THICKNESS, POINT_RADIUS};
pub use transform::PointTransform;
