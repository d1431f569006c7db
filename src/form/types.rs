//! Basic types of form fields and their values

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Textarea,
    Email,
    Select,
    Checkbox,
    Radio,
    Boolean,
    Date,
    Time,
    Number,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Textarea => "textarea",
            InputType::Email => "email",
            InputType::Select => "select",
            InputType::Checkbox => "checkbox",
            InputType::Radio => "radio",
            InputType::Boolean => "boolean",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::Number => "number",
            InputType::Password => "password",
        }
    }
}

impl FromStr for InputType {
    type Err = Error;

    fn from_str(input_type: &str) -> Result<Self> {
        Ok(match input_type {
            "text" => InputType::Text,
            "textarea" => InputType::Textarea,
            "email" => InputType::Email,
            "select" => InputType::Select,
            "checkbox" => InputType::Checkbox,
            "radio" => InputType::Radio,
            "boolean" => InputType::Boolean,
            "date" => InputType::Date,
            "time" => InputType::Time,
            "number" => InputType::Number,
            "password" => InputType::Password,
            other => {
                return Err(Error::UnknownInputTypeError { input_type: other.to_string() })
            }
        })
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One choice of a select, checkbox or radio field.
///
/// A plain string in a document stands for a choice whose text and value are
/// both that string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "InputOptionRepr")]
pub struct InputOption {
    pub text: Option<String>,
    pub value: Option<Value>,
    /// Select only: name of the group the option is listed under
    pub group: Option<String>,
}

impl InputOption {
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { text: Some(text.into()), value: Some(value.into()), group: None }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl From<&str> for InputOption {
    fn from(text: &str) -> Self {
        Self::new(text, text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputOptionRepr {
    Plain(String),
    Full {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        value: Option<Value>,
        #[serde(default)]
        group: Option<String>,
    },
}

impl From<InputOptionRepr> for InputOption {
    fn from(repr: InputOptionRepr) -> Self {
        match repr {
            InputOptionRepr::Plain(text) => InputOption::from(text.as_str()),
            InputOptionRepr::Full { text, value, group } => InputOption { text, value, group },
        }
    }
}

/// Free-text control offered by a select when a sentinel option is chosen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomInput {
    /// Kind of the free-text control, `textarea` when absent
    pub input_type: Option<String>,
    /// Option value that reveals the control
    pub value: Value,
    pub placeholder: Option<String>,
    pub maxlength: Option<usize>,
}

impl CustomInput {
    pub fn new(value: impl Into<Value>) -> Self {
        Self { value: value.into(), ..Default::default() }
    }
}

/// Value extracted from a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Unparsable number input is kept as NaN
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    /// Result of a caller-supplied parse transform
    Parsed(Value),
    /// Nothing selected
    Missing,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

/// Values of a submitted form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormResult {
    /// The single field of a prompt
    Single(FieldValue),
    /// Every field, in declaration order
    Many(Vec<FieldValue>),
}

/// String form of a value as a form control would hold it.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Truthiness of a value when used as a checked state.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
