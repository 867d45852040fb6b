//! Procedural macro `#[derive(Describe)]` for openapi-schema-rs.
//!
//! Named-field structs describe as objects. Each field is documented under
//! the name given by `#[openapi(rename = "...")]` or `#[serde(rename = "...")]`;
//! fields with neither, or marked `#[openapi(skip)]` / `#[serde(skip)]`, are
//! left out. Newtype and `#[serde(transparent)]` structs describe as their
//! inner field, and enums of unit variants describe as strings.
//!
//! Container attributes such as `#[serde(rename_all = "...")]` do not name
//! fields. A field renamed only through `rename_all` is left out; give it its
//! own `rename` to document it.

mod expand;
mod field_name;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(Describe, attributes(openapi, serde))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input as DeriveInput);
    expand::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
