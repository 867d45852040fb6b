//! Wire-name resolution for struct fields.
//!
//! A field's property key is taken from its serialization attributes only.
//! Fields without a rename are not documented; the Rust identifier is never
//! used as a fallback.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

/// Consumes the value of a nested meta item that is not interpreted, so that
/// parsing can continue with the next item.
///
/// Handles `key`, `key = value` and `key(...)`.
pub fn skip_meta_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta_value(&nested))?;
    }
    Ok(())
}

/// Returns true if the container carries `#[serde(transparent)]`.
pub fn is_transparent(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut transparent: bool = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("transparent") {
                transparent = true;
                Ok(())
            } else {
                skip_meta_value(&meta)
            }
        })?;
    }
    Ok(transparent)
}

/// Serialization attributes found on one field.
#[derive(Debug, Default)]
struct FieldAttrs {
    openapi_rename: Option<String>,
    serde_rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = Self::default();
        for attr in attrs {
            if attr.path().is_ident("openapi") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let name: LitStr = meta.value()?.parse()?;
                        found.openapi_rename = Some(name.value());
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        found.skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported openapi attribute, expected `rename` or `skip`"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| found.parse_serde_meta(&meta))?;
            }
        }
        Ok(found)
    }

    fn parse_serde_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if meta.input.peek(Token![=]) {
                let name: LitStr = meta.value()?.parse()?;
                self.serde_rename = Some(name.value());
            } else {
                // rename(serialize = "..", deserialize = "..")
                meta.parse_nested_meta(|nested| {
                    if nested.path.is_ident("serialize") {
                        let name: LitStr = nested.value()?.parse()?;
                        self.serde_rename = Some(name.value());
                        Ok(())
                    } else {
                        skip_meta_value(&nested)
                    }
                })?;
            }
            Ok(())
        } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            self.skip = true;
            Ok(())
        } else {
            skip_meta_value(meta)
        }
    }
}

/// Resolves the wire name of a field from its attributes.
///
/// `#[openapi(rename)]` wins over `#[serde(rename)]`. Returns `None` when the
/// field is skipped, has no rename, or is renamed to `""` or `"-"`.
pub fn resolve(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let found: FieldAttrs = FieldAttrs::parse(attrs)?;
    if found.skip {
        return Ok(None);
    }

    let name: Option<String> = found.openapi_rename.or(found.serde_rename);
    Ok(name.filter(|name| !name.is_empty() && name != "-"))
}
