//! Memoir (daily reflection) domain entities.

pub mod model;
pub mod rating;

pub use model::{CreateMemoir, Memoir, UpdateMemoir};
pub use rating::{Concentration, Satisfaction};
