//! Memoir (daily reflection) management.

pub mod service;

pub use service::MemoirService;
