// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML boundary adapter.
//!
//! This module turns YAML documents into [`ConfigMap`]s. Nested structure is preserved,
//! so options read sequences and mappings as they were written.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use std::collections::BTreeMap;

/// Maximum accepted size of YAML content (10MB)
const MAX_YAML_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Renders a scalar mapping key as a string.
fn key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => key_to_string(&tagged.value),
        _ => None,
    }
}

fn mapping_to_map(mapping: serde_yaml::Mapping) -> BTreeMap<String, ConfigValue> {
    let mut result = BTreeMap::new();
    for (key, value) in mapping {
        match key_to_string(&key) {
            Some(key) => {
                result.insert(key, ConfigValue::from(value));
            }
            None => {
                tracing::warn!("Dropping YAML entry with non-scalar key: {:?}", key);
            }
        }
    }
    result
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ConfigValue::Null,
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_yaml::Value::String(s) => ConfigValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(ConfigValue::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => ConfigValue::Mapping(mapping_to_map(mapping)),
            serde_yaml::Value::Tagged(tagged) => ConfigValue::from(tagged.value),
        }
    }
}

/// Parses YAML content into a [`ConfigMap`].
///
/// # Examples
///
/// ```rust
/// use config_option::adapters::YamlParser;
/// use config_option::domain::ConfigValue;
///
/// let map = YamlParser::new().parse("batch.size: 42\nhosts: [a, b]").unwrap();
/// assert_eq!(map.get("batch.size"), Some(&ConfigValue::Integer(42)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Parses a YAML document whose top level is a mapping.
    ///
    /// An empty document yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the content is too large, is not valid YAML,
    /// or its top level is not a mapping.
    pub fn parse(&self, content: &str) -> Result<ConfigMap> {
        if content.len() > MAX_YAML_CONTENT_SIZE {
            return Err(ConfigError::ParseError {
                message: format!(
                    "Configuration content too large: {} bytes (max {} bytes)",
                    content.len(),
                    MAX_YAML_CONTENT_SIZE
                ),
                source: None,
            });
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Null => Ok(ConfigMap::new()),
            serde_yaml::Value::Mapping(mapping) => Ok(mapping_to_map(mapping).into_iter().collect()),
            other => Err(ConfigError::ParseError {
                message: format!(
                    "Expected a mapping at the top level, found {}",
                    ConfigValue::from(other).type_name()
                ),
                source: None,
            }),
        }
    }
}
