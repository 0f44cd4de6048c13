//! Route handlers organized by domain.

pub mod auth;
pub mod deepwork;
pub mod health;
pub mod memoir;
pub mod notification;
pub mod schedule;
pub mod summary;
