//! Keyset predicate generation.

use crate::filter::{FilterExpr, Operator, and, or, simple};
use crate::value::Value;

use super::cursor::{Cursor, CursorError};

/// Which side of the cursor a page is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    /// Paginate forward (after the cursor).
    After,
    /// Paginate backward (before the cursor).
    Before,
}

/// Strict comparison that excludes the cursor row itself.
#[inline]
#[must_use]
pub const fn comparison_operator(descending: bool) -> Operator {
    if descending { Operator::Lt } else { Operator::Gt }
}

/// Keyset predicate selecting the rows strictly past a cursor.
///
/// The shape is decided once per request: a unique pagination field needs a
/// single comparison, anything else needs the primary key as tie-breaker.
#[derive(Debug, Clone, PartialEq)]
pub enum KeysetPredicate {
    /// `field op value`
    Simple {
        field: String,
        op: Operator,
        value: Value,
    },
    /// `(field op value) OR (field = value AND key op tiebreak)`
    TieBreak {
        field: String,
        key: String,
        op: Operator,
        value: Value,
        tiebreak: Value,
    },
}

impl KeysetPredicate {
    /// Build the predicate for `cursor`.
    ///
    /// `descending` is the scan direction of the fetch, which for `before`
    /// requests is the inverse of the display order. Fails when the cursor
    /// arity does not match the pagination field (a tie-break cursor handed to
    /// a primary key pagination, or the reverse).
    pub fn new(
        cursor: &Cursor,
        field: &str,
        primary_key: &str,
        descending: bool,
    ) -> Result<Self, CursorError> {
        let op = comparison_operator(descending);
        let unique = field == primary_key;

        match (unique, cursor) {
            (true, Cursor::Single(value)) => Ok(Self::Simple {
                field: field.to_string(),
                op,
                value: value.clone(),
            }),
            (false, Cursor::Composite(value, tiebreak)) => Ok(Self::TieBreak {
                field: field.to_string(),
                key: primary_key.to_string(),
                op,
                value: value.clone(),
                tiebreak: tiebreak.clone(),
            }),
            (unique, cursor) => Err(CursorError::ArityMismatch {
                expected: if unique { 1 } else { 2 },
                found: cursor.arity(),
            }),
        }
    }

    /// Convert to a filter expression.
    ///
    /// This follows the keyset pagination standard used by PostgreSQL, GraphQL Relay,
    /// and major ORMs. See: <https://use-the-index-luke.com/no-offset>
    #[must_use]
    pub fn to_filter_expr(&self) -> FilterExpr {
        match self {
            Self::Simple { field, op, value } => simple(field.as_str(), *op, value.clone()),
            Self::TieBreak {
                field,
                key,
                op,
                value,
                tiebreak,
            } => or(vec![
                simple(field.as_str(), *op, value.clone()),
                and(vec![
                    simple(field.as_str(), Operator::Eq, value.clone()),
                    simple(key.as_str(), *op, tiebreak.clone()),
                ]),
            ]),
        }
    }
}
