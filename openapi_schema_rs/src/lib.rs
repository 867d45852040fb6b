//! Generate OpenAPI Schema Objects from Rust data-transfer types.
//!
//! The schema is inferred from a value's type, never from the data it holds:
//! empty collections, `None` fields and default-constructed values all
//! describe the same way as populated ones.
//!
//! ```
//! use std::collections::HashMap;
//! use openapi_schema_rs::Describe;
//!
//! #[derive(Describe)]
//! struct Tag {
//!     #[serde(rename = "name")]
//!     name: String,
//! }
//!
//! #[derive(Describe)]
//! struct Example {
//!     #[serde(rename = "id")]
//!     id: String,
//!     #[serde(rename = "tags")]
//!     tags: Vec<Tag>,
//!     #[serde(rename = "props")]
//!     properties: HashMap<String, String>,
//! }
//!
//! let yaml = openapi_schema_rs::generate(&Example {
//!     id: String::new(),
//!     tags: Vec::new(),
//!     properties: HashMap::new(),
//! })?;
//! assert!(yaml.starts_with("schema:\n  type: object\n"));
//! # Ok::<(), openapi_schema_rs::OpenApiSchemaError>(())
//! ```

mod describe;
mod error;
mod json_pointer;
mod primitive;
mod reflect;
mod schema;
mod settings;

pub use describe::{Describe, IntegerWidth, Reflector, StructReflector};
pub use error::{OpenApiSchemaError, UnsupportedType, UnsupportedTypesError};
pub use reflect::{schema_document, schema_for};
pub use schema::{Format, MAP_EXAMPLE_KEY, ROOT_KEY, Schema, SchemaDocument, SchemaType};
pub use settings::GenerateSettings;

#[cfg(feature = "derive")]
pub use openapi_schema_rs_macro::Describe;

use std::io::Write;

/// Generate the YAML schema document for the type of `value`.
///
/// Only the type is inspected; `value` may be empty, default-constructed or
/// `None`. Unsupported types are left out of the document.
///
/// # Errors
///
/// Returns `OpenApiSchemaError::YamlError` if the document cannot be encoded.
pub fn generate<T>(value: &T) -> Result<String, OpenApiSchemaError>
where
    T: Describe + ?Sized,
{
    generate_with_settings(value, &GenerateSettings::default())
}

/// Generate the YAML schema document for the type of `value` using `settings`.
///
/// # Errors
///
/// Returns `OpenApiSchemaError` if `settings.deny_unsupported_types` is set and
/// unsupported types were found, or if the document cannot be encoded.
pub fn generate_with_settings<T>(
    _value: &T,
    settings: &GenerateSettings,
) -> Result<String, OpenApiSchemaError>
where
    T: Describe + ?Sized,
{
    let document: SchemaDocument = schema_document::<T>(settings)?;
    Ok(serde_yaml::to_string(&document)?)
}

/// Generate the YAML schema document for the type of `value` and write it to
/// `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`,
/// or `Stdout`.
///
/// # Errors
///
/// Returns `OpenApiSchemaError` if unsupported types were found under
/// `settings.deny_unsupported_types`, or if encoding or writing fails.
pub fn generate_to_writer<T, W>(
    value: &T,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), OpenApiSchemaError>
where
    T: Describe + ?Sized,
    W: Write,
{
    let yaml: String = generate_with_settings(value, settings)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Generate the same schema document as [`generate_with_settings`], encoded
/// as pretty-printed JSON.
///
/// # Errors
///
/// Returns `OpenApiSchemaError` if unsupported types were found under
/// `settings.deny_unsupported_types`, or if the document cannot be encoded.
pub fn generate_json<T>(
    _value: &T,
    settings: &GenerateSettings,
) -> Result<String, OpenApiSchemaError>
where
    T: Describe + ?Sized,
{
    let document: SchemaDocument = schema_document::<T>(settings)?;
    Ok(serde_json::to_string_pretty(&document)?)
}
