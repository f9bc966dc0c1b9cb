//! Traits für die externen Render-/AR-Kollaborateure.
//!
//! Der Kern referenziert nie konkrete Rendering-Typen; der Host (AR-Session,
//! Gesten-Erkennung, Material-Styling) implementiert diese Traits.

use crate::shared::PointTransform;

/// Szenen-Backend: verwaltet Anchors in der 3D-Szene.
pub trait SceneBackend {
    /// Opakes Handle auf einen Szenen-Anchor
    type Anchor;

    /// Legt einen Anchor an der gegebenen Welttransformation an.
    fn add_anchor(&mut self, transform: &PointTransform) -> Self::Anchor;

    /// Verschiebt/rotiert einen bestehenden Anchor.
    fn update_transform(&mut self, anchor: &mut Self::Anchor, transform: &PointTransform);

    /// Hit-Test an einer 2D-Bildschirmposition; liefert die Punkt-ID des
    /// getroffenen Visuals, falls eines getroffen wurde. Läuft typischerweise
    /// auf dem Input-/Render-Thread; das Ergebnis wird über die
    /// [`HitQueue`](crate::app::input::HitQueue) an den Logik-Thread übergeben.
    fn hit_test(&self, screen_point: [f32; 2]) -> Option<u64>;
}

/// Fabrik für die Visuals der Kontrollpunkte.
pub trait EntityFactory {
    /// Opakes Handle auf ein Punkt-Visual
    type Visual;

    /// Erstellt ein standard-gestyltes Visual, getaggt mit der Punkt-ID
    /// (damit Hit-Tests auf die Modell-Identität zurückführen).
    fn create_visual(&mut self, point_id: u64) -> Self::Visual;

    /// Schaltet Hervorhebung (Material + Gizmo-Sichtbarkeit) um.
    fn set_highlight(&mut self, visual: &mut Self::Visual, selected: bool);
}
