//! Cursor encoding/decoding for pagination.

use serde::{Deserialize, Serialize};

use crate::value::Value;

use super::encoding::{base64_decode, base64_encode};

/// Position of one row in the current sort order.
///
/// A `Single` cursor holds the pagination field value and is used when the
/// pagination field is the primary key. Otherwise the primary key rides along
/// as a tie-breaker in a `Composite` cursor.
///
/// The encoded form is base64 over a JSON array (`[20]` or `[20,2]`).
///
/// # Security Note
///
/// Cursors use simple base64 encoding, **not encryption**. The cursor content
/// is easily decoded by clients. This is intentional - cursors are opaque
/// pagination tokens, not security mechanisms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
#[must_use = "cursor must be encoded with .encode() to be handed to a caller"]
pub enum Cursor {
    /// `[pagination_value]`
    Single(Value),
    /// `[pagination_value, primary_key_value]`
    Composite(Value, Value),
}

impl Cursor {
    /// Number of values in the tuple (1 or 2).
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Composite(..) => 2,
        }
    }

    /// The pagination field value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Single(v) | Self::Composite(v, _) => v,
        }
    }

    /// The primary key tie-breaker, if any.
    #[must_use]
    pub const fn tiebreak(&self) -> Option<&Value> {
        match self {
            Self::Single(_) => None,
            Self::Composite(_, key) => Some(key),
        }
    }

    /// Encode the cursor to a base64 token.
    ///
    /// Note: This uses simple base64, not encryption. See [`Cursor`] security note.
    #[must_use]
    pub fn encode(&self) -> String {
        // Scalar arrays always serialize; non-finite floats become `null`.
        #[allow(clippy::expect_used)]
        let json = serde_json::to_vec(self).expect("cursor values serialize to JSON");
        base64_encode(&json)
    }

    /// Decode a cursor from a base64 token.
    ///
    /// Accepts every token [`Cursor::encode`] produces, whatever its length.
    /// Returns an error if the token is not base64 or does not hold a JSON
    /// array of one or two scalars.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let json = base64_decode(token.trim()).map_err(|_| CursorError::InvalidBase64)?;
        serde_json::from_slice(&json).map_err(|_| CursorError::InvalidFormat)
    }
}

impl From<Cursor> for Vec<Value> {
    fn from(cursor: Cursor) -> Self {
        match cursor {
            Cursor::Single(v) => vec![v],
            Cursor::Composite(v, key) => vec![v, key],
        }
    }
}

impl TryFrom<Vec<Value>> for Cursor {
    type Error = CursorError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        if !values.iter().all(Value::is_scalar) {
            return Err(CursorError::InvalidFormat);
        }
        let mut values = values.into_iter();
        match (values.next(), values.next(), values.next()) {
            (Some(v), None, None) => Ok(Self::Single(v)),
            (Some(v), Some(key), None) => Ok(Self::Composite(v, key)),
            _ => Err(CursorError::InvalidFormat),
        }
    }
}

/// Encode a cursor into an opaque token.
#[must_use]
pub fn encode_cursor(cursor: &Cursor) -> String {
    cursor.encode()
}

/// Decode an optional token.
///
/// A missing or empty token means "no cursor" and yields `Ok(None)`. A token
/// that is present but broken is an error, never silently ignored.
pub fn decode_cursor(token: Option<&str>) -> Result<Option<Cursor>, CursorError> {
    match token {
        None => Ok(None),
        Some(t) if t.is_empty() => Ok(None),
        Some(t) => Cursor::decode(t).map(Some),
    }
}

/// Errors that can occur when parsing a cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CursorError {
    /// The base64 encoding is invalid.
    #[error("invalid base64 encoding in cursor")]
    InvalidBase64,
    /// The decoded payload is not a JSON array of one or two scalars.
    #[error("invalid cursor format (expected JSON array of 1 or 2 values)")]
    InvalidFormat,
    /// The cursor was built for a different pagination field shape.
    #[error("cursor holds {found} value(s), expected {expected}")]
    ArityMismatch {
        /// Values required by the current pagination field.
        expected: usize,
        /// Values found in the cursor.
        found: usize,
    },
}

impl CursorError {
    /// Returns `true` if this is an encoding/format error.
    ///
    /// Includes `InvalidBase64` and `InvalidFormat`.
    #[inline]
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidBase64 | Self::InvalidFormat)
    }
}
