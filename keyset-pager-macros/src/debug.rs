//! Expansion dump for macro development.
//!
//! Build with `--features debug-expand` to see the generated impls.

use proc_macro2::TokenStream;

/// Print the pretty-formatted expansion of `name` to stderr.
#[cfg(feature = "debug-expand")]
pub(crate) fn debug_tokens(name: &str, tokens: &TokenStream) {
    eprintln!("\n=== DERIVE EXPAND: {name} ===");
    if let Ok(file) = syn::parse2::<syn::File>(tokens.clone()) {
        eprintln!("{}", prettyplease::unparse(&file));
    } else {
        eprintln!("{tokens}");
    }
    eprintln!("=== END {name} ===\n");
}

/// No-op when debug-expand feature is disabled.
#[cfg(not(feature = "debug-expand"))]
#[inline]
pub(crate) const fn debug_tokens(_name: &str, _tokens: &TokenStream) {}
