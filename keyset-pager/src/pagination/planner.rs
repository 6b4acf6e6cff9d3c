//! Query construction and page assembly around a single fetch.
//!
//! ```
//! use keyset_pager::{PaginateConfig, PaginationRequest, Planner, SortDir};
//!
//! let config = PaginateConfig::default();
//! let request = PaginationRequest::new(2).paginate_by("score");
//! let planner = Planner::new(&config, &request).unwrap();
//! let query = planner.build_query(&request);
//!
//! assert_eq!(query.limit, 3); // one lookahead row
//! assert_eq!(query.sort[0].field, "score");
//! assert_eq!(query.sort[1].field, "id"); // tie-break key
//! assert_eq!(query.sort[1].dir, SortDir::Asc);
//! ```

use tracing::trace;

use crate::config::PaginateConfig;
use crate::error::PaginateError;
use crate::filter::{SortDir, SortField, and};
use crate::record::Record;
use crate::request::PaginationRequest;
use crate::source::FetchQuery;
use crate::value::Value;

use super::cursor::{Cursor, decode_cursor};
use super::keyset::{CursorDirection, KeysetPredicate};
use super::page_info::{Page, PageInfo};

/// Resolved plan for one pagination request.
///
/// Built once per request; turns the request into a [`FetchQuery`] and the
/// fetched rows into a [`Page`].
#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
    pagination_field: String,
    primary_key: String,
    limit: u32,
    direction: Option<CursorDirection>,
    predicate: Option<KeysetPredicate>,
    scan_desc: bool,
}

impl Planner {
    /// Resolve direction, decode the effective cursor and check arguments.
    ///
    /// `before` takes precedence; `after` is then ignored without being
    /// decoded.
    pub fn new(
        config: &PaginateConfig,
        request: &PaginationRequest,
    ) -> Result<Self, PaginateError> {
        if request.limit == 0 {
            return Err(PaginateError::invalid("limit must be a positive integer"));
        }

        let primary_key = config.primary_key_field.as_str();
        let pagination_field = request.pagination_field.as_deref().unwrap_or(primary_key);
        if primary_key.is_empty() || pagination_field.is_empty() {
            return Err(PaginateError::invalid("pagination field and primary key must be named"));
        }

        let (direction, cursor) = match decode_cursor(request.before.as_deref())? {
            Some(cursor) => (Some(CursorDirection::Before), Some(cursor)),
            None => match decode_cursor(request.after.as_deref())? {
                Some(cursor) => (Some(CursorDirection::After), Some(cursor)),
                None => (None, None),
            },
        };

        // Paging backward scans against the display order.
        let scan_desc = if direction == Some(CursorDirection::Before) {
            !request.desc
        } else {
            request.desc
        };

        let predicate = cursor
            .map(|c| KeysetPredicate::new(&c, pagination_field, primary_key, scan_desc))
            .transpose()?;

        Ok(Self {
            pagination_field: pagination_field.to_string(),
            primary_key: primary_key.to_string(),
            limit: request.limit,
            direction,
            predicate,
            scan_desc,
        })
    }

    /// Direction of the effective cursor, `None` for a first page.
    #[must_use]
    pub const fn direction(&self) -> Option<CursorDirection> {
        self.direction
    }

    /// Whether the pagination field is the primary key itself.
    #[must_use]
    pub fn pagination_field_is_unique(&self) -> bool {
        self.pagination_field == self.primary_key
    }

    /// Keyset predicate of the effective cursor.
    #[must_use]
    pub const fn predicate(&self) -> Option<&KeysetPredicate> {
        self.predicate.as_ref()
    }

    /// Build the fetch for this request.
    ///
    /// Asks for `limit + 1` rows; the extra row only signals that more data
    /// exists. When the pagination field is not unique the primary key is
    /// added as a secondary sort key so ties come back in key order.
    #[must_use]
    pub fn build_query(&self, request: &PaginationRequest) -> FetchQuery {
        let filter = match (self.predicate.as_ref(), request.filter.clone()) {
            (Some(p), Some(base)) => Some(and(vec![p.to_filter_expr(), base])),
            (Some(p), None) => Some(p.to_filter_expr()),
            (None, base) => base,
        };

        let dir = if self.scan_desc { SortDir::Desc } else { SortDir::Asc };
        let mut sort = vec![SortField::new(self.pagination_field.as_str(), dir)];
        if !self.pagination_field_is_unique() {
            sort.push(SortField::new(self.primary_key.as_str(), dir));
        }

        let mut attributes = request.attributes.clone();
        if !attributes.is_empty() {
            for field in [&self.pagination_field, &self.primary_key] {
                if !attributes.contains(field) {
                    attributes.push(field.clone());
                }
            }
        }

        let query = FetchQuery {
            filter,
            sort,
            limit: self.limit.saturating_add(1),
            include: request.include.clone(),
            attributes,
            raw: request.raw,
            sub_query: request.sub_query,
        };
        trace!(?query, "built fetch query");
        query
    }

    /// Assemble the page from the fetched rows (at most `limit + 1`).
    pub fn build_page<R: Record>(&self, mut rows: Vec<R>) -> Result<Page<R>, PaginateError> {
        let has_more = rows.len() > self.limit as usize;
        if has_more {
            rows.truncate(self.limit as usize);
        }

        let before_present = self.direction == Some(CursorDirection::Before);
        let after_present = self.direction == Some(CursorDirection::After);
        if before_present {
            rows.reverse();
        }

        let (before, after) = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (
                Some(self.cursor_for(first)?.encode()),
                Some(self.cursor_for(last)?.encode()),
            ),
            _ => (None, None),
        };

        Ok(Page {
            results: rows,
            cursors: PageInfo {
                has_next: before_present || has_more,
                has_previous: after_present || (before_present && has_more),
                before,
                after,
            },
        })
    }

    /// Cursor pointing at `row`.
    pub fn cursor_for<R: Record + ?Sized>(&self, row: &R) -> Result<Cursor, PaginateError> {
        let value = Self::read(row, &self.pagination_field)?;
        if self.pagination_field_is_unique() {
            Ok(Cursor::Single(value))
        } else {
            Ok(Cursor::Composite(value, Self::read(row, &self.primary_key)?))
        }
    }

    fn read<R: Record + ?Sized>(row: &R, field: &str) -> Result<Value, PaginateError> {
        row.field(field)
            .ok_or_else(|| PaginateError::invalid(format!("row has no field `{field}`")))
    }
}
