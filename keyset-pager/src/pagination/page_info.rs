//! Page and PageInfo returned by a pagination call.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;

/// Boundary information for a page.
///
/// Serializes with the camelCase keys callers usually expect on the wire:
///
/// ```
/// # use keyset_pager::PageInfo;
/// let info = PageInfo {
///     has_next: true,
///     has_previous: false,
///     before: Some("WzFd".into()),
///     after: Some("WzJd".into()),
/// };
/// let json = serde_json::to_string(&info).unwrap();
/// assert_eq!(
///     json,
///     r#"{"hasNext":true,"hasPrevious":false,"before":"WzFd","after":"WzJd"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether a page exists after this one.
    pub has_next: bool,
    /// Whether a page exists before this one.
    pub has_previous: bool,
    /// Cursor of the first row; pass as `before` to fetch the previous page.
    pub before: Option<String>,
    /// Cursor of the last row; pass as `after` to fetch the next page.
    pub after: Option<String>,
}

impl PageInfo {
    /// Decode the `before` cursor.
    #[must_use]
    pub fn before_cursor(&self) -> Option<Cursor> {
        self.before.as_deref().and_then(|t| Cursor::decode(t).ok())
    }

    /// Decode the `after` cursor.
    #[must_use]
    pub fn after_cursor(&self) -> Option<Cursor> {
        self.after.as_deref().and_then(|t| Cursor::decode(t).ok())
    }
}

/// One page of rows plus its boundary information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    /// Rows in display order (`desc` as requested), at most `limit` of them.
    pub results: Vec<R>,
    /// Has-next/has-previous flags and the before/after cursors.
    pub cursors: PageInfo,
}

impl<R> Page<R> {
    /// Number of rows on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the page holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Map every row, keeping the cursors.
    pub fn map<T, F>(self, f: F) -> Page<T>
    where
        F: FnMut(R) -> T,
    {
        Page {
            results: self.results.into_iter().map(f).collect(),
            cursors: self.cursors,
        }
    }
}
