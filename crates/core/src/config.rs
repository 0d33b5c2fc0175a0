//! Site configuration loading and the highlighter defaults accessor.

use crate::options::OptionsMap;
use serde_json::Value as JsonValue;
use std::path::Path;
use thiserror::Error;

/// Key under which site-wide highlighter defaults live in the site configuration.
pub const PYGMENTS_OPTIONS_KEY: &str = "pygments_options";

/// The site-wide configuration store.
///
/// Loaded once per site build and shared read-only by every page and tag
/// rendered during that build. The highlighter defaults under
/// [`PYGMENTS_OPTIONS_KEY`] are extracted and shape-checked at load time, so
/// reading them during rendering cannot fail.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    value: JsonValue,
    highlight_defaults: OptionsMap,
}

/// Errors emitted while loading or validating site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML failed to parse.
    #[error("Configuration parse error: {0}")]
    Parse(String),
    /// Top-level node was not a mapping.
    #[error("Site configuration must be a mapping at the top level")]
    InvalidRootType,
    /// `pygments_options` was present but not a mapping of scalar values.
    #[error("Invalid `pygments_options` entry: {0}")]
    InvalidOptions(String),
}

impl SiteConfig {
    /// Configuration with no entries.
    pub fn empty() -> Self {
        Self {
            value: JsonValue::Object(Default::default()),
            highlight_defaults: OptionsMap::default(),
        }
    }

    /// Parse a YAML site configuration document.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::empty());
        }

        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let json_value =
            serde_json::to_value(yaml_value).map_err(|err| ConfigError::Parse(err.to_string()))?;

        Self::from_json_value(json_value)
    }

    /// Read and parse a YAML site configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Adopt an already-loaded configuration value.
    ///
    /// The top level must be a mapping; a null document counts as empty.
    pub fn from_json_value(value: JsonValue) -> Result<Self, ConfigError> {
        let value = match value {
            JsonValue::Null => JsonValue::Object(Default::default()),
            JsonValue::Object(_) => value,
            _ => return Err(ConfigError::InvalidRootType),
        };
        let highlight_defaults = extract_highlight_defaults(&value)?;

        Ok(Self {
            value,
            highlight_defaults,
        })
    }

    /// Raw access to a top-level configuration entry.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.value.get(key)
    }

    /// Site-wide highlighter defaults.
    ///
    /// Empty when the configuration carries no [`PYGMENTS_OPTIONS_KEY`] entry.
    pub fn highlight_defaults(&self) -> &OptionsMap {
        &self.highlight_defaults
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::empty()
    }
}

fn extract_highlight_defaults(config: &JsonValue) -> Result<OptionsMap, ConfigError> {
    match config.get(PYGMENTS_OPTIONS_KEY) {
        None | Some(JsonValue::Null) => Ok(OptionsMap::default()),
        Some(table @ JsonValue::Object(_)) => serde_json::from_value(table.clone())
            .map_err(|err| ConfigError::InvalidOptions(err.to_string())),
        Some(other) => Err(ConfigError::InvalidOptions(format!(
            "expected a mapping, found {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptValue;

    #[test]
    fn parses_highlight_defaults() {
        let config = SiteConfig::from_yaml_str(
            "title: Example\npygments_options:\n  startinline: true\n  linenostart: 42\n  linenos: table\n",
        )
        .unwrap();

        let defaults = config.highlight_defaults();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults.get("startinline"), Some(&OptValue::Bool(true)));
        assert_eq!(defaults.get("linenostart"), Some(&OptValue::Int(42)));
        assert_eq!(defaults.get("linenos"), Some(&OptValue::Str("table".into())));
    }

    #[test]
    fn missing_key_defaults_to_empty() {
        let config = SiteConfig::from_yaml_str("title: Example\n").unwrap();
        assert!(config.highlight_defaults().is_empty());
    }

    #[test]
    fn null_key_defaults_to_empty() {
        let config = SiteConfig::from_yaml_str("pygments_options:\n").unwrap();
        assert!(config.highlight_defaults().is_empty());
    }

    #[test]
    fn empty_document_is_empty_config() {
        let config = SiteConfig::from_yaml_str("   \n").unwrap();
        assert!(config.highlight_defaults().is_empty());
        assert_eq!(config.get("title"), None);
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = SiteConfig::from_yaml_str("just a string").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRootType), "{err:?}");
    }

    #[test]
    fn sequence_options_are_rejected() {
        let err = SiteConfig::from_yaml_str("pygments_options:\n  - linenos\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions(_)), "{err:?}");
    }

    #[test]
    fn nested_option_values_are_rejected() {
        let err =
            SiteConfig::from_yaml_str("pygments_options:\n  linenos:\n    style: table\n")
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions(_)), "{err:?}");
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = SiteConfig::from_yaml_str("title: [unterminated\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
    }

    #[test]
    fn raw_entries_stay_reachable() {
        let config =
            SiteConfig::from_yaml_str("title: Example\npygments_options:\n  linenos: table\n")
                .unwrap();

        assert_eq!(
            config.get("title").and_then(JsonValue::as_str),
            Some("Example")
        );
        assert!(config.get(PYGMENTS_OPTIONS_KEY).is_some());
    }

    #[test]
    fn adopts_json_value() {
        let config = SiteConfig::from_json_value(serde_json::json!({
            "pygments_options": { "encoding": "utf-8" }
        }))
        .unwrap();

        assert_eq!(
            config.highlight_defaults().get("encoding"),
            Some(&OptValue::Str("utf-8".into()))
        );
    }
}
