//! Inkrementeller Abgleich zwischen TrackModel und Präsentations-Graph.
//!
//! Die Handle-Tabelle gehört ausschließlich dem Reconciler: das Modell hält
//! nie ein Render-Handle, die Präsentation ist eine ableitbare Projektion
//! der Daten. Das verhindert Lifetime-Zyklen zwischen Daten- und
//! Präsentationsschicht.

use super::{EntityFactory, SceneBackend};
use crate::core::{TrackChange, TrackModel};
use crate::shared::PointTransform;
use indexmap::IndexMap;

/// Anchor- und Visual-Handle eines Kontrollpunkts.
#[derive(Debug)]
pub struct TrackHandle<A, V> {
    /// Szenen-Anchor (Position/Orientierung)
    pub anchor: A,
    /// Visual (Kugel + Gizmo-Achsen)
    pub visual: V,
}

/// Hält die Handle-Tabelle synchron zur Punktmenge des Modells.
///
/// Einfügereihenfolge = Modellreihenfolge (IndexMap), deterministisch für
/// Tests. Entfernen wird in diesem Umfang nicht unterstützt: würde ein Punkt
/// aus dem Modell gelöscht, bliebe sein Handle verwaist in der Tabelle —
/// bekannte, dokumentierte Lücke bis Punkt-Löschung eine Produktentscheidung
/// bekommt.
#[derive(Debug, Default)]
pub struct SceneReconciler<A, V> {
    handles: IndexMap<u64, TrackHandle<A, V>>,
}

impl<A, V> SceneReconciler<A, V> {
    /// Erstellt einen Reconciler mit leerer Handle-Tabelle.
    pub fn new() -> Self {
        Self {
            handles: IndexMap::new(),
        }
    }

    /// Gleicht die Tabelle mit dem Modell ab: legt Handles nur für Punkte an,
    /// die noch keines haben. Bestehende Handles werden nie neu gebaut.
    ///
    /// Idempotent: bei unverändertem Modell erzeugt ein zweiter Aufruf null
    /// Handles. Kosten proportional zur Anzahl *neuer* Punkte
    /// (Membership-Check statt globalem Diff). Gibt die Anzahl erzeugter
    /// Handles zurück.
    pub fn sync<B, F>(&mut self, track: &TrackModel, backend: &mut B, factory: &mut F) -> usize
    where
        B: SceneBackend<Anchor = A>,
        F: EntityFactory<Visual = V>,
    {
        let mut created = 0;
        for point in track.points() {
            if self.handles.contains_key(&point.id) {
                continue;
            }

            let anchor = backend.add_anchor(&PointTransform::from(point));
            let visual = factory.create_visual(point.id);
            self.handles.insert(point.id, TrackHandle { anchor, visual });
            created += 1;
        }

        if created > 0 {
            log::info!("SceneReconciler: {created} neue Handles angelegt");
        }
        created
    }

    /// Wendet eine `VisualOnly`-Änderung auf bestehende Handles an:
    /// Transform neu setzen und Hervorhebung gemäß Modell-Selektion umschalten.
    ///
    /// Verändert die Tabellen-Mitgliedschaft nie. `Structural`- und
    /// `None`-Änderungen werden ignoriert; IDs ohne Handle werden
    /// übersprungen (LookupFailure-Policy: No-op).
    pub fn apply_visual_update<B, F>(
        &mut self,
        track: &TrackModel,
        change: &TrackChange,
        backend: &mut B,
        factory: &mut F,
    ) where
        B: SceneBackend<Anchor = A>,
        F: EntityFactory<Visual = V>,
    {
        let TrackChange::VisualOnly { ids } = change else {
            return;
        };

        for &id in ids {
            let Some(point) = track.point(id) else {
                log::warn!("apply_visual_update: Punkt {id} nicht im Modell");
                continue;
            };
            let Some(handle) = self.handles.get_mut(&id) else {
                log::warn!("apply_visual_update: kein Handle für Punkt {id} (sync ausstehend?)");
                continue;
            };

            backend.update_transform(&mut handle.anchor, &PointTransform::from(point));
            factory.set_highlight(&mut handle.visual, track.selected_id() == Some(id));
        }
    }

    /// Anzahl der Handles in der Tabelle.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn für die ID ein Handle existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.handles.contains_key(&id)
    }

    /// Handle per Punkt-ID (read-only).
    pub fn handle(&self, id: u64) -> Option<&TrackHandle<A, V>> {
        self.handles.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;
    use glam::Vec3;

    /// Anchor mit Seriennummer, um Handle-Identität über sync-Aufrufe
    /// hinweg prüfen zu können.
    #[derive(Debug, Clone, PartialEq)]
    struct FakeAnchor {
        serial: u32,
        transform: PointTransform,
    }

    #[derive(Default)]
    struct FakeBackend {
        next_serial: u32,
        update_calls: u32,
    }

    impl SceneBackend for FakeBackend {
        type Anchor = FakeAnchor;

        fn add_anchor(&mut self, transform: &PointTransform) -> FakeAnchor {
            self.next_serial += 1;
            FakeAnchor {
                serial: self.next_serial,
                transform: *transform,
            }
        }

        fn update_transform(&mut self, anchor: &mut FakeAnchor, transform: &PointTransform) {
            anchor.transform = *transform;
            self.update_calls += 1;
        }

        fn hit_test(&self, _screen_point: [f32; 2]) -> Option<u64> {
            None
        }
    }

    #[derive(Debug, PartialEq)]
    struct FakeVisual {
        point_id: u64,
        selected: bool,
    }

    #[derive(Default)]
    struct FakeFactory {
        created_ids: Vec<u64>,
    }

    impl EntityFactory for FakeFactory {
        type Visual = FakeVisual;

        fn create_visual(&mut self, point_id: u64) -> FakeVisual {
            self.created_ids.push(point_id);
            FakeVisual {
                point_id,
                selected: false,
            }
        }

        fn set_highlight(&mut self, visual: &mut FakeVisual, selected: bool) {
            visual.selected = selected;
        }
    }

    fn setup(n: usize) -> (TrackModel, FakeBackend, FakeFactory) {
        let mut model = TrackModel::new();
        for i in 0..n {
            model.add_point(Vec3::new(i as f32 * 0.3, 0.0, -0.6));
        }
        (model, FakeBackend::default(), FakeFactory::default())
    }

    #[test]
    fn sync_creates_one_handle_per_point_in_model_order() {
        let (model, mut backend, mut factory) = setup(3);
        let mut reconciler = SceneReconciler::new();

        let created = reconciler.sync(&model, &mut backend, &mut factory);
        assert_eq!(created, 3);
        assert_eq!(reconciler.handle_count(), 3);

        let ids: Vec<u64> = model.points().iter().map(|p| p.id).collect();
        assert_eq!(factory.created_ids, ids);
    }

    #[test]
    fn sync_is_idempotent_for_unchanged_model() {
        let (model, mut backend, mut factory) = setup(3);
        let mut reconciler = SceneReconciler::new();

        reconciler.sync(&model, &mut backend, &mut factory);
        let created = reconciler.sync(&model, &mut backend, &mut factory);
        assert_eq!(created, 0);
        assert_eq!(reconciler.handle_count(), 3);
    }

    #[test]
    fn sync_after_adding_points_creates_exactly_the_new_handles() {
        let (mut model, mut backend, mut factory) = setup(3);
        let mut reconciler = SceneReconciler::new();
        reconciler.sync(&model, &mut backend, &mut factory);

        let old_id = model.points()[0].id;
        let old_serial = reconciler.handle(old_id).unwrap().anchor.serial;
        let old_transform = reconciler.handle(old_id).unwrap().anchor.transform;

        model.add_point(Vec3::new(0.9, 0.0, -0.6));
        model.add_point(Vec3::new(1.2, 0.0, -0.6));

        let created = reconciler.sync(&model, &mut backend, &mut factory);
        assert_eq!(created, 2);
        assert_eq!(reconciler.handle_count(), 5);

        // Bestehende Handles bleiben unangetastet: gleiche Identität, gleicher Transform
        let handle = reconciler.handle(old_id).unwrap();
        assert_eq!(handle.anchor.serial, old_serial);
        assert_eq!(handle.anchor.transform, old_transform);
    }

    #[test]
    fn visual_update_retransforms_without_recreating() {
        let (mut model, mut backend, mut factory) = setup(2);
        let mut reconciler = SceneReconciler::new();
        reconciler.sync(&model, &mut backend, &mut factory);

        let id = model.points()[0].id;
        let serial = reconciler.handle(id).unwrap().anchor.serial;

        let change = model.update_position(id, Axis::X, 5.0);
        reconciler.apply_visual_update(&model, &change, &mut backend, &mut factory);

        let handle = reconciler.handle(id).unwrap();
        assert_eq!(handle.anchor.serial, serial);
        assert_eq!(handle.anchor.transform.position, Vec3::new(5.0, 0.0, -0.6));
        assert_eq!(reconciler.handle_count(), 2);
        assert_eq!(backend.update_calls, 1);
    }

    #[test]
    fn selection_change_toggles_highlight_only_for_affected_ids() {
        let (mut model, mut backend, mut factory) = setup(3);
        let mut reconciler = SceneReconciler::new();
        reconciler.sync(&model, &mut backend, &mut factory);

        let first = model.points()[0].id;
        let second = model.points()[1].id;

        let change = model.select_point(first);
        reconciler.apply_visual_update(&model, &change, &mut backend, &mut factory);
        assert!(reconciler.handle(first).unwrap().visual.selected);

        // Wechsel auf second: first wird abgewählt, second hervorgehoben
        let change = model.select_point(second);
        reconciler.apply_visual_update(&model, &change, &mut backend, &mut factory);
        assert!(!reconciler.handle(first).unwrap().visual.selected);
        assert!(reconciler.handle(second).unwrap().visual.selected);
        // Nur alte + neue Selektion wurden angefasst
        assert_eq!(backend.update_calls, 3);
    }

    #[test]
    fn structural_and_none_changes_are_ignored_by_visual_update() {
        let (mut model, mut backend, mut factory) = setup(1);
        let mut reconciler = SceneReconciler::new();
        reconciler.sync(&model, &mut backend, &mut factory);

        let (_, structural) = model.add_point(Vec3::ZERO);
        reconciler.apply_visual_update(&model, &structural, &mut backend, &mut factory);
        reconciler.apply_visual_update(&model, &TrackChange::None, &mut backend, &mut factory);

        assert_eq!(backend.update_calls, 0);
        // Der neue Punkt bekommt sein Handle erst beim nächsten sync
        assert_eq!(reconciler.handle_count(), 1);
    }

    #[test]
    fn visual_update_skips_ids_without_handle() {
        let (mut model, mut backend, mut factory) = setup(1);
        let mut reconciler = SceneReconciler::new();
        reconciler.sync(&model, &mut backend, &mut factory);

        // Punkt existiert im Modell, hat aber noch kein Handle
        let (id, _) = model.add_point(Vec3::ONE);
        let change = model.update_position(id, Axis::Y, 1.0);
        reconciler.apply_visual_update(&model, &change, &mut backend, &mut factory);

        assert_eq!(backend.update_calls, 0);
        assert!(!reconciler.contains(id));
    }
}
