//! Deep work session domain entities.

pub mod model;

pub use model::DeepWorkSession;
