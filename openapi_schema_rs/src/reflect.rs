//! Builds the schema tree for a [`Describe`] type.

use crate::describe::{Describe, IntegerWidth, Reflector, StructReflector};
use crate::error::{OpenApiSchemaError, UnsupportedType, UnsupportedTypesError};
use crate::json_pointer;
use crate::schema::{Format, MAP_EXAMPLE_KEY, ROOT_KEY, Schema, SchemaDocument, SchemaType};
use crate::settings::GenerateSettings;
use indexmap::IndexMap;

/// Reflector producing the schema of one type, positioned at `path` in the
/// document. `None` means the type has no documentable shape.
struct SchemaReflector<'a> {
    path: String,
    unsupported: &'a mut Vec<UnsupportedType>,
}

impl SchemaReflector<'_> {
    fn child(&mut self, token: &str) -> SchemaReflector<'_> {
        SchemaReflector {
            path: json_pointer::child(&self.path, token),
            unsupported: &mut *self.unsupported,
        }
    }
}

impl<'a> Reflector for SchemaReflector<'a> {
    type Output = Option<Schema>;
    type Struct = SchemaStructReflector<'a>;

    fn reflect_string(self) -> Option<Schema> {
        Some(Schema::string())
    }

    fn reflect_bool(self) -> Option<Schema> {
        Some(Schema::boolean())
    }

    fn reflect_integer(self, width: IntegerWidth) -> Option<Schema> {
        let schema: Schema = Schema::integer();
        Some(match width {
            IntegerWidth::Unsized => schema,
            IntegerWidth::Bits32 => schema.with_format(Format::Int32),
            IntegerWidth::Bits64 => schema.with_format(Format::Int64),
        })
    }

    fn reflect_float(self) -> Option<Schema> {
        Some(Schema::number().with_format(Format::Float))
    }

    fn reflect_date_time(self) -> Option<Schema> {
        Some(Schema::string().with_format(Format::DateTime))
    }

    fn reflect_pointer<T>(self) -> Option<Schema>
    where
        T: Describe + ?Sized,
    {
        T::describe(self)
    }

    fn reflect_seq<T>(mut self) -> Option<Schema>
    where
        T: Describe,
    {
        // Only the element is left out; the array itself is still documented.
        let items: Option<Schema> = T::describe(self.child("items"));
        Some(Schema {
            items: items.map(Box::new),
            ..Schema::new(SchemaType::Array)
        })
    }

    fn reflect_map<V>(mut self) -> Option<Schema>
    where
        V: Describe,
    {
        let mut properties: SchemaReflector<'_> = self.child("properties");
        let value: Option<Schema> = V::describe(properties.child(MAP_EXAMPLE_KEY));
        Some(Schema::map(value))
    }

    fn reflect_struct(self, name: &'static str) -> SchemaStructReflector<'a> {
        tracing::trace!(path = %self.path, struct_name = name, "describing struct");
        SchemaStructReflector {
            properties_path: json_pointer::child(&self.path, "properties"),
            unsupported: self.unsupported,
            properties: IndexMap::new(),
        }
    }

    fn reflect_unsupported(self, type_name: &'static str) -> Option<Schema> {
        tracing::debug!(
            path = %self.path,
            type_name,
            "omitting type with no documentable shape"
        );
        self.unsupported.push(UnsupportedType {
            path: self.path,
            type_name,
        });
        None
    }
}

/// Collects the properties of a struct being described.
struct SchemaStructReflector<'a> {
    properties_path: String,
    unsupported: &'a mut Vec<UnsupportedType>,
    properties: IndexMap<String, Schema>,
}

impl StructReflector for SchemaStructReflector<'_> {
    type Output = Option<Schema>;

    fn field<T>(&mut self, wire_name: &str)
    where
        T: Describe + ?Sized,
    {
        if wire_name.is_empty() {
            return;
        }

        let field: Option<Schema> = T::describe(SchemaReflector {
            path: json_pointer::child(&self.properties_path, wire_name),
            unsupported: &mut *self.unsupported,
        });
        if let Some(schema) = field {
            self.properties.insert(wire_name.to_string(), schema);
        }
    }

    fn end(self) -> Option<Schema> {
        Some(Schema {
            properties: self.properties,
            ..Schema::object()
        })
    }
}

fn describe_root<T>(unsupported: &mut Vec<UnsupportedType>) -> Option<Schema>
where
    T: Describe + ?Sized,
{
    T::describe(SchemaReflector {
        path: json_pointer::child("", ROOT_KEY),
        unsupported,
    })
}

/// Describes `T` and returns its schema, or `None` if `T` has no documentable
/// shape. Unsupported nested types are silently left out.
#[must_use]
pub fn schema_for<T>() -> Option<Schema>
where
    T: Describe + ?Sized,
{
    describe_root::<T>(&mut Vec::new())
}

/// Builds the `{"schema": ...}` document for `T`.
///
/// # Errors
///
/// Returns `OpenApiSchemaError::UnsupportedTypes` if `deny_unsupported_types`
/// is set and any part of `T` has no documentable shape.
pub fn schema_document<T>(
    settings: &GenerateSettings,
) -> Result<SchemaDocument, OpenApiSchemaError>
where
    T: Describe + ?Sized,
{
    let mut unsupported: Vec<UnsupportedType> = Vec::new();
    let schema: Option<Schema> = describe_root::<T>(&mut unsupported);
    tracing::trace!(
        type_name = std::any::type_name::<T>(),
        omitted = unsupported.len(),
        "described type"
    );

    if settings.deny_unsupported_types && !unsupported.is_empty() {
        return Err(UnsupportedTypesError {
            issues: unsupported,
        }
        .into());
    }

    Ok(SchemaDocument { schema })
}
