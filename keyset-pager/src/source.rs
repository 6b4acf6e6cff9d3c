//! The data source collaborator.

use async_trait::async_trait;

use crate::filter::{FilterExpr, SortField};
use crate::record::Record;

/// Everything a data source needs to fetch one page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchQuery {
    /// Rows must match this predicate; `None` matches everything.
    pub filter: Option<FilterExpr>,
    /// Order of the returned rows, most significant key first.
    pub sort: Vec<SortField>,
    /// Maximum rows to return. Already includes the lookahead row.
    pub limit: u32,
    /// Associations to expand.
    pub include: Vec<String>,
    /// Attribute projection; empty means all.
    pub attributes: Vec<String>,
    /// Raw-result hint.
    pub raw: bool,
    /// Sub-query hint.
    pub sub_query: bool,
}

/// A store able to fetch filtered, sorted, limited rows.
///
/// Returned rows must be ordered exactly as `query.sort` says. Errors are
/// handed back to the caller untouched; retries are the store's business.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Row type produced by the store.
    type Row: Record + Send;
    /// Store-specific failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the rows matching `query`.
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<Self::Row>, Self::Error>;
}
