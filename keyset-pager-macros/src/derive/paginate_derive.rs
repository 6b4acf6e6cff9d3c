//! #[derive(Paginate)] implementation.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Ident, LitStr, parse_macro_input};

use crate::debug::debug_tokens;

// Defaults mirror `keyset_pager::PaginateConfig::default()`.
const DEFAULT_METHOD: &str = "paginate";
const DEFAULT_PRIMARY_KEY: &str = "id";

struct PaginateAttrs {
    method: Ident,
    primary_key: String,
}

fn parse_attrs(input: &DeriveInput) -> syn::Result<PaginateAttrs> {
    let mut method = Ident::new(DEFAULT_METHOD, Span::call_site());
    let mut primary_key = DEFAULT_PRIMARY_KEY.to_string();

    for attr in &input.attrs {
        if !attr.path().is_ident("paginate") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("method") {
                let lit: LitStr = meta.value()?.parse()?;
                method = lit
                    .parse::<Ident>()
                    .map_err(|_| syn::Error::new(lit.span(), "`method` must be a valid identifier"))?;
            } else if meta.path.is_ident("primary_key") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().trim().is_empty() {
                    return Err(syn::Error::new(lit.span(), "`primary_key` must not be empty"));
                }
                primary_key = lit.value();
            } else {
                return Err(
                    meta.error("unknown paginate attribute, expected `method` or `primary_key`")
                );
            }
            Ok(())
        })?;
    }

    Ok(PaginateAttrs {
        method,
        primary_key,
    })
}

pub fn derive_paginate_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => {
            debug_tokens("Paginate", &tokens);
            tokens.into()
        },
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let PaginateAttrs {
        method,
        primary_key,
    } = parse_attrs(input)?;
    let method_name = method.to_string();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Fetch one page of rows with keyset pagination.
            pub async fn #method(
                &self,
                request: ::keyset_pager::PaginationRequest,
            ) -> ::core::result::Result<
                ::keyset_pager::Page<<Self as ::keyset_pager::DataSource>::Row>,
                ::keyset_pager::PaginateError<<Self as ::keyset_pager::DataSource>::Error>,
            >
            where
                Self: ::keyset_pager::DataSource,
            {
                let config = ::keyset_pager::PaginateConfig::new()
                    .method_name(#method_name)
                    .primary_key_field(#primary_key);
                ::keyset_pager::paginate(self, &config, request).await
            }
        }
    })
}
