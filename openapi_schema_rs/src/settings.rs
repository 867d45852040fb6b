//! Settings for schema generation.

/// Settings that control schema generation behavior.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    /// When true, fail instead of omitting types that have no documentable
    /// shape (function pointers, channels, raw pointers, `serde_json::Value`,
    /// and similar). Collects every location and returns them together.
    ///
    /// **Default: false (disabled).** Unsupported types are left out of the
    /// document and logged at debug level.
    pub deny_unsupported_types: bool,
}
