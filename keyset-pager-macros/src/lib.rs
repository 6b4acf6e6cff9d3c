//! Derive macros for keyset-pager.
//!
//! - `#[derive(Record)]` gives a struct by-name field access for cursor
//!   building and in-memory filtering.
//! - `#[derive(Paginate)]` adds an inherent async paginate method to a
//!   `DataSource` type.

use proc_macro::TokenStream;

mod debug;
mod derive;

/// Implement `keyset_pager::Record` for a struct with named fields.
///
/// Every field type must be `Clone` and convert into `keyset_pager::Value`.
///
/// Field attributes:
/// - `#[record(rename = "createdAt")]` - expose the field under another name
/// - `#[record(skip)]` - hide the field
///
/// # Example
/// ```ignore
/// #[derive(Clone, Record)]
/// struct Post {
///     id: i64,
///     #[record(rename = "createdAt")]
///     created_at: String,
///     #[record(skip)]
///     body: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    derive::derive_record_impl(input)
}

/// Add a paginate method to a `keyset_pager::DataSource` implementor.
///
/// Container attributes (both optional):
/// - `#[paginate(method = "page_posts")]` - method name, default `paginate`
/// - `#[paginate(primary_key = "uuid")]` - tie-break field, default `id`
///
/// # Example
/// ```ignore
/// #[derive(Paginate)]
/// #[paginate(method = "page_posts", primary_key = "post_id")]
/// struct Posts { pool: Pool }
///
/// let page = posts.page_posts(PaginationRequest::new(20)).await?;
/// ```
#[proc_macro_derive(Paginate, attributes(paginate))]
pub fn derive_paginate(input: TokenStream) -> TokenStream {
    derive::derive_paginate_impl(input)
}
