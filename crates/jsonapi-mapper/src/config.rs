use crate::Result;

use serde::Deserialize;
use serde_json::Value;

/// Construction-time configuration of a [`Mapper`](crate::Mapper).
///
/// ```
/// let config = jsonapi_mapper::MapperConfig::from_json(
///     r#"{"baseUrl": "https://api.example.com", "pluralizeType": true}"#,
/// )
/// .unwrap();
///
/// assert!(config.pluralize_type);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MapperConfig {
    /// Root of every generated link
    pub base_url: String,

    /// Pluralize the resource type in generated links
    #[serde(default)]
    pub pluralize_type: bool,

    /// Top-level `meta` member added to every document
    #[serde(default)]
    pub meta: Option<Value>,
}

impl MapperConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}
