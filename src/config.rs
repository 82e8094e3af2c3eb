//! Stage configuration parsing and validation
//!
//! Turns a raw configuration mapping into an immutable [`TranslateConfig`]
//! descriptor. Required properties are checked before any dictionary content
//! is inspected, and every rejection names the offending property.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, TranslateError};

/// Immutable descriptor for one translate stage.
///
/// Never mutated after construction; a single descriptor may back concurrent
/// invocations on distinct documents.
#[derive(Debug, Clone, Serialize)]
pub struct TranslateConfig {
    field: String,
    target_field: String,
    ignore_missing: bool,
    default_value: Option<String>,
    dictionary: HashMap<String, String>,
}

impl TranslateConfig {
    /// Validate a raw configuration mapping and build the descriptor.
    ///
    /// Required properties: `field`, `target_field`, `dictionary`. Optional:
    /// `ignore_missing` (default `true`) and `default` (default absent; an
    /// empty string is a valid default distinct from absent).
    pub fn from_config(config: &Map<String, Value>) -> Result<Self> {
        let field = read_string_property(config, "field")?;
        let target_field = read_string_property(config, "target_field")?;
        let ignore_missing = read_bool_property(config, "ignore_missing", true)?;
        let default_value = read_optional_string_property(config, "default")?;
        let dictionary = read_dictionary(config)?;

        debug!(
            field = field.as_str(),
            target_field = target_field.as_str(),
            entries = dictionary.len(),
            "translate stage configured"
        );

        Ok(Self {
            field,
            target_field,
            ignore_missing,
            default_value,
            dictionary,
        })
    }

    /// Parse a JSON object and validate it as stage configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| TranslateError::config(format!("invalid JSON configuration: {e}")))?;
        Self::from_value(value)
    }

    /// Parse a YAML mapping and validate it as stage configuration.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(raw)
            .map_err(|e| TranslateError::config(format!("invalid YAML configuration: {e}")))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_config(&map),
            other => Err(TranslateError::config(format!(
                "configuration isn't a map, but of type [{}]",
                json_type_name(&other)
            ))),
        }
    }

    /// Source field path to read.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Target field path to write. May equal [`field`](Self::field).
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    /// Whether an absent or null source field is a no-op rather than an error.
    pub fn ignore_missing(&self) -> bool {
        self.ignore_missing
    }

    /// Fallback for dictionary misses. `None` means the translated value is null.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The static lookup dictionary.
    pub fn dictionary(&self) -> &HashMap<String, String> {
        &self.dictionary
    }
}

/// JSON type name used in configuration error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

fn missing_property(name: &str) -> TranslateError {
    TranslateError::config(format!("[{name}] required property is missing"))
}

fn read_string_property(config: &Map<String, Value>, name: &str) -> Result<String> {
    let value = config.get(name).ok_or_else(|| missing_property(name))?;
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::String(_) => Err(TranslateError::config(format!("[{name}] property is empty"))),
        other => Err(TranslateError::config(format!(
            "[{name}] property isn't a string, but of type [{}]",
            json_type_name(other)
        ))),
    }
}

fn read_optional_string_property(
    config: &Map<String, Value>,
    name: &str,
) -> Result<Option<String>> {
    match config.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(TranslateError::config(format!(
            "[{name}] property isn't a string, but of type [{}]",
            json_type_name(other)
        ))),
    }
}

fn read_bool_property(config: &Map<String, Value>, name: &str, default: bool) -> Result<bool> {
    match config.get(name) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(TranslateError::config(format!(
            "[{name}] property isn't a boolean, but of type [{}]",
            json_type_name(other)
        ))),
    }
}

fn read_dictionary(config: &Map<String, Value>) -> Result<HashMap<String, String>> {
    let value = config
        .get("dictionary")
        .ok_or_else(|| missing_property("dictionary"))?;
    let entries = match value {
        Value::Object(map) => map,
        other => {
            return Err(TranslateError::config(format!(
                "[dictionary] property isn't a map, but of type [{}]",
                json_type_name(other)
            )))
        }
    };
    if entries.is_empty() {
        return Err(TranslateError::config("\"dictionary\" is empty"));
    }

    // Duplicate keys in the raw text already collapsed last-write-wins
    // during parsing; insertion order is irrelevant from here on.
    let mut dictionary = HashMap::with_capacity(entries.len());
    for (key, entry) in entries {
        match entry {
            Value::String(s) => {
                dictionary.insert(key.clone(), s.clone());
            }
            other => {
                return Err(TranslateError::config(format!(
                    "[dictionary] entry [{key}] isn't a string, but of type [{}]",
                    json_type_name(other)
                )))
            }
        }
    }
    Ok(dictionary)
}
