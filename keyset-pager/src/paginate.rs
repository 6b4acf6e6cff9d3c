//! The paginate operation.

use tracing::debug;

use crate::config::PaginateConfig;
use crate::error::PaginateError;
use crate::pagination::{Page, Planner};
use crate::request::PaginationRequest;
use crate::source::DataSource;

/// Runs keyset pagination against a [`DataSource`].
///
/// Holds the source by shared reference, so any number of paginators can
/// run against the same store at once.
///
/// ```
/// use keyset_pager::{MemoryStore, PaginateConfig, PaginationRequest, Paginator};
/// use serde_json::json;
///
/// # block_on(async {
/// let store = MemoryStore::new((1..=5).map(|id| json!({ "id": id })).collect());
/// let config = PaginateConfig::default();
/// let paginator = Paginator::new(&store, &config);
///
/// let page = paginator.paginate(PaginationRequest::new(2)).await.unwrap();
/// assert_eq!(page.len(), 2);
/// assert!(page.cursors.has_next);
/// # });
/// # fn block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct Paginator<'a, S: ?Sized> {
    source: &'a S,
    config: &'a PaginateConfig,
}

impl<'a, S: DataSource + ?Sized> Paginator<'a, S> {
    /// Create a paginator over `source`.
    #[must_use]
    pub const fn new(source: &'a S, config: &'a PaginateConfig) -> Self {
        Self { source, config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PaginateConfig {
        self.config
    }

    /// Fetch one page.
    ///
    /// Issues exactly one `fetch` against the source. Cursor and argument
    /// errors are raised before the source is touched.
    pub async fn paginate(
        &self,
        request: PaginationRequest,
    ) -> Result<Page<S::Row>, PaginateError<S::Error>> {
        let planner = Planner::new(self.config, &request).map_err(|e| e.lift())?;
        let query = planner.build_query(&request);

        debug!(
            method = %self.config.method_name,
            limit = request.limit,
            direction = ?planner.direction(),
            "fetching page"
        );

        let rows = self
            .source
            .fetch(&query)
            .await
            .map_err(PaginateError::DataSource)?;
        let fetched = rows.len();
        let page = planner.build_page(rows).map_err(|e| e.lift())?;

        debug!(
            method = %self.config.method_name,
            fetched,
            returned = page.len(),
            has_next = page.cursors.has_next,
            has_previous = page.cursors.has_previous,
            "page assembled"
        );
        Ok(page)
    }
}

/// Fetch one page from `source`.
///
/// Shorthand for `Paginator::new(source, config).paginate(request)`.
pub async fn paginate<S: DataSource + ?Sized>(
    source: &S,
    config: &PaginateConfig,
    request: PaginationRequest,
) -> Result<Page<S::Row>, PaginateError<S::Error>> {
    Paginator::new(source, config).paginate(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{Value as Json, json};

    use super::*;
    use crate::memory::MemoryStore;
    use crate::pagination::Cursor;
    use crate::source::FetchQuery;
    use crate::value::Value;

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DataSource for CountingStore {
        type Row = Json;
        type Error = Offline;

        async fn fetch(&self, _query: &FetchQuery) -> Result<Vec<Json>, Offline> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Offline)
        }
    }

    fn scores() -> MemoryStore<Json> {
        MemoryStore::new(vec![
            json!({ "id": 1, "score": 10 }),
            json!({ "id": 2, "score": 20 }),
            json!({ "id": 3, "score": 20 }),
            json!({ "id": 4, "score": 30 }),
        ])
    }

    fn ids(page: &Page<Json>) -> Vec<i64> {
        page.results.iter().filter_map(|r| r["id"].as_i64()).collect()
    }

    #[tokio::test]
    async fn test_tie_break_walk() {
        let store = scores();
        let config = PaginateConfig::default();

        let first = paginate(&store, &config, PaginationRequest::new(2).paginate_by("score"))
            .await
            .unwrap();
        assert_eq!(ids(&first), vec![1, 2]);
        assert!(first.cursors.has_next);
        assert_eq!(
            first.cursors.after_cursor(),
            Some(Cursor::Composite(Value::Int(20), Value::Int(2)))
        );

        let after = first.cursors.after.unwrap();
        let second = paginate(
            &store,
            &config,
            PaginationRequest::new(2).paginate_by("score").after(after),
        )
        .await
        .unwrap();
        assert_eq!(ids(&second), vec![3, 4]);
        assert!(!second.cursors.has_next);
        assert!(second.cursors.has_previous);
    }

    #[tokio::test]
    async fn test_store_error_passes_through() {
        let store = CountingStore::default();
        let config = PaginateConfig::default();

        let err = paginate(&store, &config, PaginationRequest::new(3))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "store offline");
        assert!(matches!(err.into_data_source(), Some(Offline)));
    }

    #[tokio::test]
    async fn test_bad_request_never_reaches_store() {
        let store = CountingStore::default();
        let config = PaginateConfig::default();
        let paginator = Paginator::new(&store, &config);

        let err = paginator
            .paginate(PaginationRequest::new(3).after("@@"))
            .await
            .unwrap_err();
        assert!(err.is_malformed_cursor());

        let err = paginator.paginate(PaginationRequest::new(0)).await.unwrap_err();
        assert!(err.is_invalid_argument());

        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_custom_primary_key() {
        let store = MemoryStore::new(vec![
            json!({ "uuid": "b" }),
            json!({ "uuid": "a" }),
            json!({ "uuid": "c" }),
        ]);
        let config = PaginateConfig::new().primary_key_field("uuid");

        let page = paginate(&store, &config, PaginationRequest::new(2).desc(true))
            .await
            .unwrap();
        let keys: Vec<_> = page.results.iter().filter_map(|r| r["uuid"].as_str()).collect();
        assert_eq!(keys, vec!["c", "b"]);
        assert_eq!(page.cursors.after_cursor(), Some(Cursor::Single(Value::from("b"))));
    }
}
