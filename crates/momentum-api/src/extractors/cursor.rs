//! Cursor pagination query parameter extractor.

use serde::{Deserialize, Serialize};

/// Query parameters for cursor-paginated endpoints.
///
/// `cursor` is the opaque string from a previous page's `next_cursor`;
/// a malformed value silently restarts from the beginning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorParams {
    /// Resume position, absent for the first page.
    pub cursor: Option<String>,
    /// Requested page size (default 20, clamped to 1..=100).
    pub size: Option<usize>,
}

impl CursorParams {
    /// Default page size when the client sends none.
    pub const DEFAULT_SIZE: usize = 20;
    /// Upper bound on the page size.
    pub const MAX_SIZE: usize = 100;

    /// The effective page size after defaulting and clamping.
    pub fn page_size(&self) -> usize {
        self.size
            .unwrap_or(Self::DEFAULT_SIZE)
            .clamp(1, Self::MAX_SIZE)
    }

    /// The cursor string, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let params = CursorParams::default();
        assert_eq!(params.page_size(), 20);
    }

    #[test]
    fn test_clamps_size() {
        let params = CursorParams {
            cursor: None,
            size: Some(500),
        };
        assert_eq!(params.page_size(), 100);

        let params = CursorParams {
            cursor: None,
            size: Some(0),
        };
        assert_eq!(params.page_size(), 1);
    }

    #[test]
    fn test_in_range_size_kept() {
        let params = CursorParams {
            cursor: None,
            size: Some(37),
        };
        assert_eq!(params.page_size(), 37);
    }
}
