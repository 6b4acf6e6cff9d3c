//! Derive implementations.

mod paginate_derive;
mod record_derive;

use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields};

pub use paginate_derive::derive_paginate_impl;
pub use record_derive::derive_record_impl;

/// Extract named fields, or a spanned error explaining what is supported.
pub(crate) fn extract_named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<&'a Punctuated<Field, Comma>, syn::Error> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!(
                    "{derive} derive only supports structs with named fields. \
                     Example: `struct Post {{ id: i64, title: String }}`"
                ),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{derive} derive only supports structs."),
        )),
    }
}
