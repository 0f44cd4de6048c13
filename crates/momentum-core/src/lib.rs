//! # momentum-core
//!
//! Core crate for the Momentum productivity backend. Contains configuration
//! schemas, the enumerated error-code system, and the cursor pagination
//! types shared by every other crate.
//!
//! This crate has **no** internal dependencies on other Momentum crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorCode};
pub use result::AppResult;
