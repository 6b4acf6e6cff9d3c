//! Cursor codec and keyset planning.
//!
//! A page is fetched in three steps: the [`Planner`] turns a request into a
//! [`FetchQuery`](crate::FetchQuery), the data source runs it, and the
//! planner turns the returned rows into a [`Page`].
//!
//! ```
//! use keyset_pager::{Cursor, PaginateConfig, PaginationRequest, Planner, Value};
//!
//! let token = Cursor::Composite(Value::Int(20), Value::Int(2)).encode();
//! let request = PaginationRequest::new(2).paginate_by("score").after(token);
//! let planner = Planner::new(&PaginateConfig::default(), &request).unwrap();
//!
//! let query = planner.build_query(&request);
//! assert!(query.filter.is_some());
//! ```
//!
//! Tokens are checked strictly: a `before`/`after` that is present but does
//! not decode fails the request with a malformed cursor error.

mod cursor;
mod encoding;
mod keyset;
mod page_info;
mod planner;

pub use cursor::{Cursor, CursorError, decode_cursor, encode_cursor};
pub use keyset::{CursorDirection, KeysetPredicate, comparison_operator};
pub use page_info::{Page, PageInfo};
pub use planner::Planner;
