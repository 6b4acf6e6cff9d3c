//! #[derive(Record)] implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, DeriveInput, LitStr, parse_macro_input};

use super::extract_named_fields;
use crate::debug::debug_tokens;

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("`rename` must not be empty"));
                }
                result.rename = Some(lit.value());
            } else if meta.path.is_ident("skip") {
                result.skip = true;
            } else {
                return Err(meta.error("unknown record attribute, expected `rename` or `skip`"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => {
            debug_tokens("Record", &tokens);
            tokens.into()
        },
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut arms = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for field in extract_named_fields(input, "Record")? {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let key = attrs.rename.unwrap_or_else(|| ident.to_string());
        if seen.contains(&key) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate record field name `{key}`"),
            ));
        }

        arms.push(quote! {
            #key => ::core::option::Option::Some(
                ::core::convert::Into::<::keyset_pager::Value>::into(
                    ::core::clone::Clone::clone(&self.#ident)
                )
            ),
        });
        seen.push(key);
    }

    Ok(quote! {
        impl #impl_generics ::keyset_pager::Record for #name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<::keyset_pager::Value> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
