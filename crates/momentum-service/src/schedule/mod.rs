//! Schedule management.

pub mod service;

pub use service::ScheduleService;
