//! # ingest-translate
//!
//! A single document-field transformation stage for ingest pipelines: read a
//! value at a configured source field path, map it (or each element of it,
//! when it is an array) through a static string-to-string dictionary, and
//! write the mapped result to a target field path.
//!
//! The stage is built once from a raw configuration mapping and is stateless
//! afterwards, so one [`TranslateProcessor`] can be shared across threads and
//! invoked concurrently on distinct documents.
//!
//! ## Modules
//!
//! - `config` - Raw configuration validation and the immutable stage descriptor
//! - `error` - Typed errors for construction and execution
//! - `field_path` - Dot-notation get/set over JSON documents
//! - `processor` - The translate stage executor
//!
//! ## Example
//!
//! ```
//! use ingest_translate::{TranslateConfig, TranslateProcessor};
//! use serde_json::json;
//!
//! let config = TranslateConfig::from_yaml(
//!     r#"
//! field: source_field
//! target_field: target_field
//! dictionary:
//!   "10": success
//!   "20": fail
//! "#,
//! )?;
//!
//! let processor = TranslateProcessor::new(config);
//! let mut document = json!({"source_field": "10"});
//! processor.execute(&mut document)?;
//!
//! assert_eq!(document, json!({"source_field": "10", "target_field": "success"}));
//! # Ok::<(), ingest_translate::TranslateError>(())
//! ```

pub mod config;
pub mod error;
pub mod field_path;
pub mod processor;

pub use config::TranslateConfig;
pub use error::{Result, TranslateError};
pub use processor::{translate_value, TranslateProcessor};
