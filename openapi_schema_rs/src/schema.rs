use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` keyword of an OpenAPI Schema Object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Boolean,
    Integer,
    Number,
    Object,
    Array,
}

/// The `format` keyword, refining `type` for the kinds that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "date-time")]
    DateTime,
}

/// An OpenAPI Schema Object, restricted to the shape keywords.
///
/// <https://github.com/OAI/OpenAPI-Specification/blob/master/versions/3.0.3.md#schema-object>
///
/// Properties keep insertion order, which for derived structs is field
/// declaration order. Unset keywords are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The data type.
    pub r#type: SchemaType,

    /// Refinement of the data type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Element schema of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Property schemas of an object, keyed by wire name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Set on objects derived from maps, whose key set is open.
    #[serde(
        default,
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,

    /// Example value for documentation. Never set by the reflector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl Schema {
    #[must_use]
    pub fn new(r#type: SchemaType) -> Self {
        Self {
            r#type,
            format: None,
            items: None,
            properties: IndexMap::new(),
            additional_properties: None,
            example: None,
        }
    }

    #[must_use]
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    #[must_use]
    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    /// An object with no properties yet; add them with [`Schema::with_property`].
    #[must_use]
    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array)
        }
    }

    /// An open-ended object whose values are described by `value`, sampled
    /// under the key `example`.
    #[must_use]
    pub fn map(value: Option<Self>) -> Self {
        let mut schema = Self::object();
        if let Some(value) = value {
            schema.properties.insert(MAP_EXAMPLE_KEY.to_string(), value);
        }
        schema.additional_properties = Some(true);
        schema
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, schema: Self) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<serde_json::Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Key under which map value schemas are sampled.
pub const MAP_EXAMPLE_KEY: &str = "example";

/// Key of the single entry in a [`SchemaDocument`].
pub const ROOT_KEY: &str = "schema";

/// The generated document: a mapping whose only entry is `schema`.
///
/// When the root type has no documentable shape the entry is absent and the
/// document encodes as an empty mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}
