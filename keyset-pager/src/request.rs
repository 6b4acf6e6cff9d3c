//! Caller-supplied pagination parameters.

use crate::filter::FilterExpr;

/// Parameters of one pagination call.
///
/// `before` wins over `after` when both are set. Empty tokens count as absent.
///
/// ```
/// use keyset_pager::{Operator, PaginationRequest, simple};
///
/// let request = PaginationRequest::new(20)
///     .filter(simple("published", Operator::Eq, true))
///     .paginate_by("created_at")
///     .desc(true);
/// assert_eq!(request.limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationRequest {
    /// Base filter combined with the keyset predicate.
    pub filter: Option<FilterExpr>,
    /// Associations to expand, passed to the data source verbatim.
    pub include: Vec<String>,
    /// Attribute projection; empty selects everything.
    pub attributes: Vec<String>,
    /// Page size. Must be positive.
    pub limit: u32,
    /// Token of the row to page backward from.
    pub before: Option<String>,
    /// Token of the row to page forward from.
    pub after: Option<String>,
    /// Display order of the page.
    pub desc: bool,
    /// Ordering field; defaults to the configured primary key.
    pub pagination_field: Option<String>,
    /// Ask the data source for raw rows, passed through verbatim.
    pub raw: bool,
    /// Sub-query hint, passed through verbatim.
    pub sub_query: bool,
}

impl PaginationRequest {
    /// Create a request for the first page of `limit` rows.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            filter: None,
            include: Vec::new(),
            attributes: Vec::new(),
            limit,
            before: None,
            after: None,
            desc: false,
            pagination_field: None,
            raw: false,
            sub_query: false,
        }
    }

    /// Set the base filter.
    #[must_use]
    pub fn filter(mut self, expr: FilterExpr) -> Self {
        self.filter = Some(expr);
        self
    }

    /// Set the associations to include.
    #[must_use]
    pub fn include(mut self, include: &[&str]) -> Self {
        self.include = include.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set the attribute projection.
    #[must_use]
    pub fn attributes(mut self, attributes: &[&str]) -> Self {
        self.attributes = attributes.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Page backward from `token`.
    #[must_use]
    pub fn before(mut self, token: impl Into<String>) -> Self {
        self.before = Some(token.into());
        self
    }

    /// Page forward from `token`.
    #[must_use]
    pub fn after(mut self, token: impl Into<String>) -> Self {
        self.after = Some(token.into());
        self
    }

    /// Set the display order.
    #[must_use]
    pub const fn desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    /// Order and bound pages by `field`.
    #[must_use]
    pub fn paginate_by(mut self, field: impl Into<String>) -> Self {
        self.pagination_field = Some(field.into());
        self
    }

    /// Request raw rows.
    #[must_use]
    pub const fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Set the sub-query hint.
    #[must_use]
    pub const fn sub_query(mut self, sub_query: bool) -> Self {
        self.sub_query = sub_query;
        self
    }
}
