//! Periodic aggregate summary entities.

pub mod daily;
pub mod day_of_week;
pub mod monthly;
pub mod weekly;

pub use daily::{ComputedDailySummary, DailySummary};
pub use day_of_week::DayOfWeek;
pub use monthly::MonthlySummary;
pub use weekly::WeeklySummary;
