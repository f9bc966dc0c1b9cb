//! Quaternion Coaster — Editor-Kern für AR-Streckenpunkte.
//!
//! Kontrollpunkte einer Achterbahn-Strecke platzieren und bearbeiten,
//! inkrementell mit einem externen AR-/Render-Backend abgleichen und
//! Orientierungen wahlweise per Quaternion-SLERP oder Euler-LERP
//! interpolieren. Core-Funktionalität als Library exportiert für Tests
//! und Host-Einbettung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    hit_channel, AppCommand, AppController, AppState, CommandLog, HitQueue, HitSender,
    SelectionCoordinator, SelectionPhase,
};
pub use core::{
    interpolation, Axis, OrientationComponent, RotationMode, TrackChange, TrackModel, TrackPoint,
};
pub use render::{EntityFactory, SceneBackend, SceneReconciler, TrackHandle};
pub use shared::{EditorOptions, PointTransform};
