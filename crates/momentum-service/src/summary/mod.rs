//! Periodic summary retrieval and daily rebuild.

pub mod service;

pub use service::SummaryService;
