//! Shared value types.

pub mod cursor;
pub mod response;

pub use cursor::{Cursor, CursorPage};
