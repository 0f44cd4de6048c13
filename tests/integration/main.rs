//! Integration tests for the Momentum HTTP API.
//!
//! All tests run against an in-process router built over a lazy pool, so
//! no database is required. Requests that would reach the database assert
//! on the database-error envelope instead of real rows.

mod helpers;

mod auth_flow_test;
mod routing_test;
