// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
#![allow(clippy::format_push_string)] // String building style preference
#![allow(clippy::cast_possible_truncation)] // u32 limits widened to usize and back

//! # keyset-pager - Cursor Pagination over Keyset Predicates
//!
//! Stable, forward/backward cursor pagination for any store that can
//! filter, sort and limit rows.
//!
//! A page request names an ordering field, a page size and optionally an
//! opaque `before`/`after` token. The pager turns that into a strict keyset
//! predicate (with the primary key as tie-breaker when the ordering field is
//! not unique), fetches one extra row to learn whether more data exists, and
//! hands back the rows plus tokens for the neighbouring pages.
//!
//! ## Quick Start
//!
//! ```
//! use keyset_pager::{MemoryStore, PaginateConfig, PaginationRequest, paginate};
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::new(vec![
//!     json!({ "id": 1, "score": 10 }),
//!     json!({ "id": 2, "score": 20 }),
//!     json!({ "id": 3, "score": 20 }),
//!     json!({ "id": 4, "score": 30 }),
//! ]);
//! let config = PaginateConfig::default();
//!
//! let first = paginate(&store, &config, PaginationRequest::new(2).paginate_by("score"))
//!     .await
//!     .unwrap();
//! assert_eq!(first.results[1]["id"], 2);
//! assert!(first.cursors.has_next);
//!
//! let after = first.cursors.after.clone().unwrap();
//! let second = paginate(
//!     &store,
//!     &config,
//!     PaginationRequest::new(2).paginate_by("score").after(after),
//! )
//! .await
//! .unwrap();
//! assert_eq!(second.results[0]["id"], 3);
//! assert!(!second.cursors.has_next);
//! # });
//! ```
//!
//! ## Deriving
//!
//! `#[derive(Record)]` gives a struct by-name field access;
//! `#[derive(Paginate)]` adds an inherent paginate method to a data source:
//!
//! ```
//! use keyset_pager::{DataSource, FetchQuery, MemoryStore, Paginate, PaginationRequest, Record};
//!
//! #[derive(Clone, Record)]
//! struct Post {
//!     id: i64,
//!     #[record(rename = "createdAt")]
//!     created_at: String,
//! }
//!
//! #[derive(Paginate)]
//! #[paginate(method = "page_posts")]
//! struct Posts {
//!     rows: MemoryStore<Post>,
//! }
//!
//! #[keyset_pager::async_trait]
//! impl DataSource for Posts {
//!     type Row = Post;
//!     type Error = std::convert::Infallible;
//!
//!     async fn fetch(&self, query: &FetchQuery) -> Result<Vec<Post>, Self::Error> {
//!         self.rows.fetch(query).await
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let posts = Posts {
//!     rows: MemoryStore::new(vec![
//!         Post { id: 1, created_at: "2024-01-01".into() },
//!         Post { id: 2, created_at: "2024-01-02".into() },
//!     ]),
//! };
//! let page = posts
//!     .page_posts(PaginationRequest::new(1).paginate_by("createdAt").desc(true))
//!     .await
//!     .unwrap();
//! assert_eq!(page.results[0].id, 2);
//! # });
//! ```
//!
//! ## SQL
//!
//! [`sql::postgres`] and [`sql::sqlite`] render the planned fetch as a
//! parameterized `SELECT`:
//!
//! ```
//! use keyset_pager::{Cursor, PaginateConfig, PaginationRequest, Planner, Value, sql};
//!
//! let after = Cursor::Composite(Value::Int(20), Value::Int(2)).encode();
//! let request = PaginationRequest::new(2).paginate_by("score").after(after);
//! let planner = Planner::new(&PaginateConfig::default(), &request).unwrap();
//!
//! let result = sql::sqlite("scores", &planner.build_query(&request)).unwrap();
//! assert_eq!(
//!     result.sql,
//!     "SELECT * FROM scores WHERE (score > ?1 OR (score = ?2 AND id > ?3)) \
//!      ORDER BY score ASC, id ASC LIMIT 3"
//! );
//! ```

extern crate self as keyset_pager;

mod config;
mod dialect;
mod error;
mod filter;
mod memory;
mod paginate;
mod pagination;
mod record;
mod request;
mod source;
mod validate;
mod value;

pub mod sql;

pub use config::{ConfigError, DEFAULT_METHOD_NAME, DEFAULT_PRIMARY_KEY_FIELD, PaginateConfig};
pub use dialect::{Dialect, Postgres, Sqlite};
pub use error::PaginateError;
pub use filter::{
    CompoundFilter, Filter, FilterExpr, LogicalOp, Operator, SortDir, SortField, and, not, or,
    simple,
};
pub use memory::MemoryStore;
pub use paginate::{Paginator, paginate};
pub use pagination::{
    Cursor, CursorDirection, CursorError, KeysetPredicate, Page, PageInfo, Planner,
    comparison_operator, decode_cursor, encode_cursor,
};
pub use record::Record;
pub use request::PaginationRequest;
pub use source::{DataSource, FetchQuery};
pub use validate::is_valid_sql_identifier;
pub use value::Value;

/// Attribute for implementing [`DataSource`].
pub use async_trait::async_trait;

// Derive macros share names with the traits they implement.
pub use keyset_pager_macros::{Paginate, Record};

/// Prelude module for convenient imports.
///
/// ```
/// use keyset_pager::prelude::*;
///
/// let request = PaginationRequest::new(10).filter(simple("active", Operator::Eq, true));
/// assert_eq!(request.limit, 10);
/// ```
pub mod prelude {
    pub use crate::{
        Cursor, DataSource, FetchQuery, FilterExpr, MemoryStore, Operator, Page, PageInfo,
        Paginate, PaginateConfig, PaginateError, PaginationRequest, Paginator, Record, SortDir,
        Value, and, async_trait, not, or, paginate, simple,
    };
}
