use std::error;
use std::fmt;

/// A location in the document where a type with no documentable shape was
/// left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedType {
    /// JSON Pointer into the generated document, e.g. `/schema/properties/callback`.
    pub path: String,

    /// Rust type name as reported by `std::any::type_name`.
    pub type_name: &'static str,
}

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unsupported type `{}`", self.path, self.type_name)
    }
}

/// Every unsupported type found while generating with
/// `deny_unsupported_types` enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedTypesError {
    pub issues: Vec<UnsupportedType>,
}

impl error::Error for UnsupportedTypesError {}

impl fmt::Display for UnsupportedTypesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unsupported type(s):", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

/// Error type for schema generation.
#[derive(Debug)]
pub enum OpenApiSchemaError {
    /// The schema tree could not be rendered as YAML.
    YamlError(serde_yaml::Error),

    /// The schema tree could not be rendered as JSON.
    JsonError(serde_json::Error),

    /// Writing the rendered document failed.
    IoError(std::io::Error),

    /// Unsupported types were found and `deny_unsupported_types` is set.
    UnsupportedTypes(UnsupportedTypesError),
}

impl error::Error for OpenApiSchemaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::YamlError(yaml_error) => Some(yaml_error),
            Self::JsonError(json_error) => Some(json_error),
            Self::IoError(io_error) => Some(io_error),
            Self::UnsupportedTypes(unsupported) => Some(unsupported),
        }
    }
}

impl fmt::Display for OpenApiSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YamlError(yaml_error) => fmt::Display::fmt(yaml_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::UnsupportedTypes(unsupported) => fmt::Display::fmt(unsupported, f),
        }
    }
}

impl From<serde_yaml::Error> for OpenApiSchemaError {
    fn from(yaml_error: serde_yaml::Error) -> Self {
        Self::YamlError(yaml_error)
    }
}

impl From<serde_json::Error> for OpenApiSchemaError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}

impl From<std::io::Error> for OpenApiSchemaError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<UnsupportedTypesError> for OpenApiSchemaError {
    fn from(unsupported: UnsupportedTypesError) -> Self {
        Self::UnsupportedTypes(unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_types_display_lists_each_issue() {
        let error = UnsupportedTypesError {
            issues: vec![
                UnsupportedType {
                    path: "/schema/properties/callback".to_string(),
                    type_name: "fn()",
                },
                UnsupportedType {
                    path: "/schema/properties/extra".to_string(),
                    type_name: "serde_json::value::Value",
                },
            ],
        };
        let actual: String = OpenApiSchemaError::from(error).to_string();
        let expected: &str = "2 unsupported type(s):\n  \
            /schema/properties/callback: unsupported type `fn()`\n  \
            /schema/properties/extra: unsupported type `serde_json::value::Value`";
        assert_eq!(expected, actual);
    }
}
