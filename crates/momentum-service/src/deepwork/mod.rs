//! Deep work session tracking.

pub mod service;

pub use service::DeepWorkService;
