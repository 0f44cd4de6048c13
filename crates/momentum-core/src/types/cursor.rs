//! Cursor-based pagination.
//!
//! A [`Cursor`] combines the last-seen row id and timestamp so a sorted scan
//! can resume at a stable position. [`CursorPage`] assembles a page from an
//! over-fetched (`requested_size + 1`) row set.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Timestamp layout inside the encoded cursor (ISO-8601 local, seconds).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Opaque pagination position: the id and timestamp of the last row shown.
///
/// Constructed fresh per page boundary and never persisted. Both fields
/// round-trip exactly through [`Cursor::encode`] / [`Cursor::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Id of the last row returned to the client.
    pub last_id: i64,
    /// Creation timestamp of that row, second precision.
    pub last_timestamp: NaiveDateTime,
}

impl Cursor {
    /// Create a cursor for the given position.
    pub fn new(last_id: i64, last_timestamp: NaiveDateTime) -> Self {
        Self {
            last_id,
            last_timestamp,
        }
    }

    /// Encode the cursor as a URL-safe base64 string.
    ///
    /// Format: `base64url("<id>:<ISO-8601 local datetime>")`, e.g.
    /// `"123:2025-12-23T10:30:00"` → `"MTIzOjIwMjUtMTItMjNUMTA6MzA6MDA="`.
    /// The result is opaque to clients but deliberately not confidential.
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.last_id,
            self.last_timestamp.format(TIMESTAMP_FORMAT)
        );
        URL_SAFE.encode(raw.as_bytes())
    }

    /// Decode a client-supplied cursor string.
    ///
    /// Returns `None` for any malformed input: bad base64, non-UTF-8 bytes,
    /// missing separator, non-positive id, or an unparseable timestamp.
    /// Callers interpret `None` as "start from the beginning" — a garbled
    /// cursor never fails the request.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = URL_SAFE.decode(encoded).ok()?;
        let raw = String::from_utf8(bytes).ok()?;

        let (id_part, ts_part) = raw.split_once(':')?;

        let last_id: i64 = id_part.parse().ok()?;
        if last_id <= 0 {
            return None;
        }

        let last_timestamp = NaiveDateTime::parse_from_str(ts_part, TIMESTAMP_FORMAT).ok()?;

        Some(Self {
            last_id,
            last_timestamp,
        })
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    /// The rows on this page.
    pub content: Vec<T>,
    /// Whether more rows exist past this page.
    pub has_next: bool,
    /// Encoded cursor for the next request, absent on the last page.
    pub next_cursor: Option<String>,
    /// Number of rows actually returned.
    pub size: usize,
}

impl<T> CursorPage<T> {
    /// Assemble a page from rows fetched with the over-fetch-by-one pattern.
    ///
    /// `rows` must have been fetched with `LIMIT requested_size + 1`; the
    /// extra row only signals that more data exists and is never returned.
    /// The emitted cursor always describes the last *shown* row.
    ///
    /// Fails with [`ErrorCode::InvalidCursorContentSize`] if `rows` holds
    /// more than `requested_size + 1` entries — that is a caller bug, not
    /// a user error.
    pub fn of(
        mut rows: Vec<T>,
        requested_size: usize,
        cursor_fn: impl Fn(&T) -> Cursor,
    ) -> Result<Self, AppError> {
        if rows.len() > requested_size + 1 {
            return Err(AppError::new(ErrorCode::InvalidCursorContentSize));
        }

        let has_next = rows.len() > requested_size;
        if has_next {
            rows.truncate(requested_size);
        }

        let next_cursor = if has_next {
            rows.last().map(|row| cursor_fn(row).encode())
        } else {
            None
        };

        let size = rows.len();

        Ok(Self {
            content: rows,
            has_next,
            next_cursor,
            size,
        })
    }

    /// Map the page content to another type, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CursorPage<U> {
        CursorPage {
            content: self.content.into_iter().map(f).collect(),
            has_next: self.has_next,
            next_cursor: self.next_cursor,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_encode_known_vector() {
        let cursor = Cursor::new(123, ts("2025-12-23T10:30:00"));
        assert_eq!(cursor.encode(), "MTIzOjIwMjUtMTItMjNUMTA6MzA6MDA=");
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            Cursor::new(1, ts("1970-01-01T00:00:00")),
            Cursor::new(123, ts("2025-12-23T10:30:00")),
            Cursor::new(i64::MAX, ts("2099-12-31T23:59:59")),
        ];
        for cursor in cases {
            assert_eq!(Cursor::decode(&cursor.encode()), Some(cursor));
        }
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        // Not base64 at all
        assert_eq!(Cursor::decode("!!!not-base64!!!"), None);
        // Valid base64 but not UTF-8
        assert_eq!(Cursor::decode(&URL_SAFE.encode([0xff, 0xfe, 0xfd])), None);
        // No separator
        assert_eq!(Cursor::decode(&URL_SAFE.encode("123")), None);
        // Non-numeric id
        assert_eq!(Cursor::decode(&URL_SAFE.encode("abc:2025-12-23T10:30:00")), None);
        // Zero and negative ids
        assert_eq!(Cursor::decode(&URL_SAFE.encode("0:2025-12-23T10:30:00")), None);
        assert_eq!(Cursor::decode(&URL_SAFE.encode("-5:2025-12-23T10:30:00")), None);
        // Bad timestamp
        assert_eq!(Cursor::decode(&URL_SAFE.encode("123:yesterday")), None);
        assert_eq!(Cursor::decode(&URL_SAFE.encode("123:2025-13-45T99:99:99")), None);
        // Empty input
        assert_eq!(Cursor::decode(""), None);
    }

    #[test]
    fn test_decode_extra_colons_go_to_timestamp() {
        // Split happens on the first colon only; the remainder must then
        // fail timestamp parsing if it is not a clean datetime.
        assert_eq!(Cursor::decode(&URL_SAFE.encode("1:2:3")), None);
    }

    fn row(id: i64, day: u32) -> (i64, NaiveDateTime) {
        let t = NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        (id, t)
    }

    #[test]
    fn test_encode_drops_subsecond_fraction() {
        // Stored created_at values are second precision; a cursor built
        // from anything finer must land on the containing second.
        let fractional = ts("2025-12-23T10:30:00")
            .with_nanosecond(500_000_000)
            .unwrap();
        let decoded = Cursor::decode(&Cursor::new(5, fractional).encode()).unwrap();
        assert_eq!(decoded.last_timestamp, ts("2025-12-23T10:30:00"));
    }

    #[test]
    fn test_same_second_rows_resume_after_page_boundary() {
        // Several rows created within one second: the keyset predicate
        // (created_at, id) < (cursor_ts, cursor_id) must yield exactly
        // the unshown rows on the next page.
        let t = ts("2025-06-02T10:30:00");
        let rows = vec![(5_i64, t), (4, t), (3, t)];

        let page = CursorPage::of(rows.clone(), 2, |r| Cursor::new(r.0, r.1)).unwrap();
        let cursor = Cursor::decode(page.next_cursor.as_deref().unwrap()).unwrap();

        let remaining: Vec<i64> = rows
            .iter()
            .filter(|r| (r.1, r.0) < (cursor.last_timestamp, cursor.last_id))
            .map(|r| r.0)
            .collect();
        assert_eq!(remaining, vec![3]);
    }

    #[test]
    fn test_page_with_more_rows() {
        let rows = vec![row(3, 3), row(2, 2), row(1, 1)];
        let page = CursorPage::of(rows, 2, |r| Cursor::new(r.0, r.1)).unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].0, 3);
        assert_eq!(page.content[1].0, 2);
        assert!(page.has_next);
        assert_eq!(page.size, 2);
        // Cursor describes the last shown row (id 2), not the dropped row.
        let expected = Cursor::new(2, row(2, 2).1).encode();
        assert_eq!(page.next_cursor, Some(expected));
    }

    #[test]
    fn test_last_page() {
        let rows = vec![row(2, 2), row(1, 1)];
        let page = CursorPage::of(rows, 2, |r| Cursor::new(r.0, r.1)).unwrap();

        assert_eq!(page.content.len(), 2);
        assert!(!page.has_next);
        assert_eq!(page.next_cursor, None);
        assert_eq!(page.size, 2);
    }

    #[test]
    fn test_empty_page() {
        let page = CursorPage::of(Vec::<(i64, NaiveDateTime)>::new(), 2, |r| {
            Cursor::new(r.0, r.1)
        })
        .unwrap();

        assert!(page.content.is_empty());
        assert!(!page.has_next);
        assert_eq!(page.next_cursor, None);
        assert_eq!(page.size, 0);
    }

    #[test]
    fn test_oversized_fetch_is_a_contract_violation() {
        let rows = vec![row(4, 4), row(3, 3), row(2, 2), row(1, 1)];
        let err = CursorPage::of(rows, 2, |r| Cursor::new(r.0, r.1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCursorContentSize);
    }
}
