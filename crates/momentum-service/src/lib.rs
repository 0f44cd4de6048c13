//! # momentum-service
//!
//! Business logic service layer for Momentum. Each service orchestrates
//! repositories and authentication to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod deepwork;
pub mod memoir;
pub mod notification;
pub mod schedule;
pub mod summary;

pub use auth::AuthService;
pub use context::RequestContext;
pub use deepwork::DeepWorkService;
pub use memoir::MemoirService;
pub use notification::NotificationService;
pub use schedule::ScheduleService;
pub use summary::SummaryService;
