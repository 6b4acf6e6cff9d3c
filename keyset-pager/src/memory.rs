//! In-memory data source.

use std::convert::Infallible;

use async_trait::async_trait;
use tracing::trace;

use crate::record::Record;
use crate::source::{DataSource, FetchQuery};

/// A [`DataSource`] over rows held in a `Vec`.
///
/// Applies the query's filter, sort and limit. Projection, includes and the
/// raw/sub-query hints do not apply to in-memory rows and are ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<R> {
    rows: Vec<R>,
}

impl<R> MemoryStore<R> {
    /// Create a store holding `rows` in insertion order.
    #[must_use]
    pub const fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Number of rows held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }
}

impl<R> FromIterator<R> for MemoryStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Record + Clone> MemoryStore<R> {
    /// Run `query` synchronously.
    #[must_use]
    pub fn query(&self, query: &FetchQuery) -> Vec<R> {
        let mut rows: Vec<R> = self
            .rows
            .iter()
            .filter(|row| query.filter.as_ref().is_none_or(|f| f.matches(*row)))
            .cloned()
            .collect();

        // Stable sort: rows equal on every key keep insertion order.
        rows.sort_by(|a, b| {
            query
                .sort
                .iter()
                .map(|key| key.compare_rows(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(query.limit as usize);
        rows
    }
}

#[async_trait]
impl<R> DataSource for MemoryStore<R>
where
    R: Record + Clone + Send + Sync,
{
    type Row = R;
    type Error = Infallible;

    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<R>, Infallible> {
        let rows = self.query(query);
        trace!(matched = rows.len(), "memory store fetch");
        Ok(rows)
    }
}
