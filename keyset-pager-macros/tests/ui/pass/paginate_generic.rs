use keyset_pager::{DataSource, FetchQuery, MemoryStore, Paginate, PaginationRequest, Record};

#[derive(Paginate)]
#[paginate(method = "list")]
struct Store<R> {
    inner: MemoryStore<R>,
}

#[keyset_pager::async_trait]
impl<R: Record + Clone + Send + Sync> DataSource for Store<R> {
    type Row = R;
    type Error = std::convert::Infallible;

    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<R>, Self::Error> {
        self.inner.fetch(query).await
    }
}

async fn first_page(store: &Store<serde_json::Value>) -> usize {
    store.list(PaginationRequest::new(10)).await.map_or(0, |page| page.len())
}

fn main() {
    let _ = first_page;
}
