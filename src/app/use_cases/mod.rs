//! Use-Cases: fachliche Operationen auf dem AppState,
//! aufgerufen vom Controller.

pub mod editing;
pub mod selection;
