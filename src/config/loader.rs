//! Dialog definition loading from JSON and YAML documents

use crate::config::options::DialogOptions;
use crate::error::{Error, Result};
use crate::types::DialogKind;
use serde_json::Value;
use std::path::Path;

/// A dialog described by a document: its kind plus the dialog options.
///
/// ```yaml
/// kind: confirm
/// message: Delete the file?
/// buttons:
///   confirm:
///     label: Delete
///     className: btn-danger
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DialogDocument {
    pub kind: DialogKind,
    pub options: DialogOptions,
}

impl DialogDocument {
    /// Loads a document, picking the format from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        match extension {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(Error::Other(anyhow::anyhow!(
                "Unsupported dialog document extension '{other}' for '{}'. Expected json, yaml or yml.",
                path.display()
            ))),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(content)?)
    }

    /// Splits `kind` (default `dialog`) off an object and reads the rest as options.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let Value::Object(map) = &mut value else {
            return Err(Error::MissingOptionsError);
        };
        let kind = match map.remove("kind") {
            Some(kind) => serde_json::from_value(kind)?,
            None => DialogKind::Dialog,
        };

        log::debug!("Loaded {kind} dialog document");
        Ok(Self { kind, options: DialogOptions::from_value(value)? })
    }
}
