//! The translate stage executor
//!
//! [`TranslateProcessor`] performs the extract → map → write sequence on one
//! document at a time. It holds only the immutable [`TranslateConfig`], so a
//! single instance can serve concurrent callers on distinct documents.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::TranslateConfig;
use crate::error::{Result, TranslateError};
use crate::field_path;

/// Stateless executor for one configured translate stage.
#[derive(Debug, Clone)]
pub struct TranslateProcessor {
    config: TranslateConfig,
}

impl TranslateProcessor {
    pub fn new(config: TranslateConfig) -> Self {
        Self { config }
    }

    /// The descriptor this processor was built from.
    pub fn config(&self) -> &TranslateConfig {
        &self.config
    }

    /// Translate the source field of `document` in place.
    ///
    /// An absent or null source field is a no-op when `ignore_missing` is
    /// enabled and a [`TranslateError::FieldMissing`] otherwise. Array values
    /// are translated element by element, all-or-nothing: the target field is
    /// only written once the whole output value has been computed.
    pub fn execute(&self, document: &mut Value) -> Result<()> {
        let old_value = match field_path::get(document, self.config.field()) {
            None | Some(Value::Null) => {
                if self.config.ignore_missing() {
                    trace!(
                        field = self.config.field(),
                        "source field missing, skipping"
                    );
                    return Ok(());
                }
                return Err(TranslateError::FieldMissing(self.config.field().to_string()));
            }
            Some(value) => value,
        };

        let new_value = match old_value {
            Value::Array(items) => {
                let mut translated = Vec::with_capacity(items.len());
                for item in items {
                    translated.push(self.translate(item)?);
                }
                Value::Array(translated)
            }
            value => self.translate(value)?,
        };

        debug!(
            field = self.config.field(),
            target_field = self.config.target_field(),
            "field translated"
        );
        field_path::set(document, self.config.target_field(), new_value);
        Ok(())
    }

    fn translate(&self, value: &Value) -> Result<Value> {
        translate_value(
            value,
            self.config.dictionary(),
            self.config.default_value(),
            self.config.field(),
        )
    }
}

/// Map a single value through `dictionary`.
///
/// A dictionary miss falls back to `default_value`; no default means the
/// result is null. A non-string input is a hard failure, never a skip or a
/// coercion; `field` names the source path in the error.
pub fn translate_value(
    value: &Value,
    dictionary: &HashMap<String, String>,
    default_value: Option<&str>,
    field: &str,
) -> Result<Value> {
    match value {
        Value::String(key) => Ok(dictionary
            .get(key)
            .map(|mapped| Value::String(mapped.clone()))
            .or_else(|| default_value.map(|d| Value::String(d.to_string())))
            .unwrap_or(Value::Null)),
        _ => Err(TranslateError::NonStringValue(field.to_string())),
    }
}
