//! # momentum-entity
//!
//! Domain entity models for Momentum. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod deepwork;
pub mod memoir;
pub mod notification;
pub mod schedule;
pub mod summary;
pub mod user;
