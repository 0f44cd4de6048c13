//! # momentum-api
//!
//! HTTP API layer for Momentum built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, tracing),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
