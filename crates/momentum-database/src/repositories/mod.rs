//! Repository implementations for all Momentum entities.

pub mod deepwork;
pub mod memoir;
pub mod notification;
pub mod schedule;
pub mod summary;
pub mod user;

pub use deepwork::DeepWorkRepository;
pub use memoir::MemoirRepository;
pub use notification::NotificationRepository;
pub use schedule::ScheduleRepository;
pub use summary::SummaryRepository;
pub use user::UserRepository;
