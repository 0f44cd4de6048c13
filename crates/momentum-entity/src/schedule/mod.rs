//! Schedule domain entities.

pub mod category;
pub mod model;
pub mod notify;
pub mod status;

pub use category::ScheduleCategory;
pub use model::{CreateSchedule, Schedule, UpdateSchedule};
pub use notify::NotifyMinutes;
pub use status::ScheduleStatus;
