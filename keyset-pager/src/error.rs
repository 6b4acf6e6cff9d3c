//! Errors returned by a pagination call.

use std::convert::Infallible;

use crate::pagination::CursorError;

/// Pagination failure.
///
/// `E` is the data source's own error type. Planning alone cannot fail with a
/// store error, so planner results use the default `Infallible`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PaginateError<E = Infallible> {
    /// A `before`/`after` token failed to decode.
    #[error("malformed cursor: {0}")]
    MalformedCursor(#[from] CursorError),
    /// The request cannot be planned (zero limit, unknown pagination field).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The data source failed; the error is passed through as-is.
    #[error(transparent)]
    DataSource(E),
}

impl<E> PaginateError<E> {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` for [`PaginateError::MalformedCursor`].
    #[inline]
    #[must_use]
    pub const fn is_malformed_cursor(&self) -> bool {
        matches!(self, Self::MalformedCursor(_))
    }

    /// Returns `true` for [`PaginateError::InvalidArgument`].
    #[inline]
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns the data source error, if that is what failed.
    #[must_use]
    pub fn into_data_source(self) -> Option<E> {
        match self {
            Self::DataSource(e) => Some(e),
            _ => None,
        }
    }
}

impl PaginateError<Infallible> {
    /// Re-type a planner error for a data source with error type `E`.
    #[must_use]
    pub fn lift<E>(self) -> PaginateError<E> {
        match self {
            Self::MalformedCursor(e) => PaginateError::MalformedCursor(e),
            Self::InvalidArgument(msg) => PaginateError::InvalidArgument(msg),
            Self::DataSource(never) => match never {},
        }
    }
}
