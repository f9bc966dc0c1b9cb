//! Render-Schicht: Backend-Traits und inkrementeller Szenen-Abgleich.

pub mod backend;
pub mod reconciler;

pub use backend::{EntityFactory, SceneBackend};
pub use reconciler::{SceneReconciler, TrackHandle};
