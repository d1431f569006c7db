//! Caller-facing dialog options

use crate::callback::{ButtonCallback, ReplyCallback};
use crate::config::types::{Backdrop, Content, Size};
use crate::error::{Error, Result};
use crate::form::FieldSpec;
use indexmap::IndexMap;
use serde::Deserialize;

/// A footer button.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonSpec {
    /// Text of the button, the button key when absent
    pub label: Option<String>,
    /// Style class, assigned by sanitization when absent
    pub class_name: Option<String>,
    #[serde(skip)]
    pub callback: Option<ButtonCallback>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Default::default() }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_callback(mut self, callback: ButtonCallback) -> Self {
        self.callback = Some(callback);
        self
    }
}

/// A button as supplied by the caller: a bare callback or a full spec.
///
/// `Invalid` holds anything else found in an untyped document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ButtonInput {
    Full(ButtonSpec),
    #[serde(skip)]
    Callback(ButtonCallback),
    Invalid(serde_json::Value),
}

impl From<ButtonSpec> for ButtonInput {
    fn from(spec: ButtonSpec) -> Self {
        ButtonInput::Full(spec)
    }
}

impl From<ButtonCallback> for ButtonInput {
    fn from(callback: ButtonCallback) -> Self {
        ButtonInput::Callback(callback)
    }
}

/// Options of a dialog.
///
/// Every field is optional as supplied; after sanitization `message` and
/// `buttons` are present, buttons are all [`ButtonInput::Full`] with a label
/// and a class, and every field backed by a default is filled in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogOptions {
    pub message: Option<Content>,
    pub title: Option<String>,
    pub buttons: Option<IndexMap<String, ButtonInput>>,
    pub class_name: Option<String>,
    pub size: Option<Size>,
    pub backdrop: Option<Backdrop>,
    pub animate: Option<bool>,
    pub close_button: Option<bool>,
    pub show: Option<bool>,
    pub container: Option<String>,
    pub locale: Option<String>,
    #[serde(skip)]
    pub on_escape: Option<ButtonCallback>,
    pub submit_on_enter: Option<bool>,
    pub propagate_keys: Option<bool>,
    /// Caller callback of the shorthand kinds
    #[serde(skip)]
    pub callback: Option<ReplyCallback>,
    /// Fields of a form dialog
    pub inputs: Option<Vec<FieldSpec>>,
    /// Field of a prompt dialog
    pub input: Option<FieldSpec>,
    /// Name of the generated form
    pub name: Option<String>,
}

impl DialogOptions {
    pub fn new(message: impl Into<Content>) -> Self {
        Self { message: Some(message.into()), ..Default::default() }
    }

    /// Options read from an untyped document, which must be an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::MissingOptionsError);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_button(mut self, key: &str, button: impl Into<ButtonInput>) -> Self {
        self.buttons.get_or_insert_with(IndexMap::new).insert(key.to_string(), button.into());
        self
    }

    pub fn with_callback(mut self, callback: impl Into<ReplyCallback>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    pub fn with_on_escape(mut self, callback: ButtonCallback) -> Self {
        self.on_escape = Some(callback);
        self
    }

    pub fn with_input(mut self, input: FieldSpec) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<FieldSpec>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Sanitized buttons in declaration order, skipping anything not yet normalized.
    pub fn button_specs(&self) -> impl Iterator<Item = (&str, &ButtonSpec)> {
        self.buttons.iter().flatten().filter_map(|(key, button)| match button {
            ButtonInput::Full(spec) => Some((key.as_str(), spec)),
            _ => None,
        })
    }
}
