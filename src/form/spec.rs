//! Declarative description of a form field

use crate::callback::impl_shared_fn;
use crate::config::Content;
use crate::constants::DEFAULT_INPUT_TYPE;
use crate::form::control::{Control, ValidationSlot};
use crate::form::types::{CustomInput, FieldValue, InputOption};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use std::rc::Rc;

/// Event delivered to a field's handlers.
pub struct FieldEvent<'a> {
    pub name: &'a str,
    /// Key of a keyboard event
    pub key: Option<char>,
    pub control: &'a Control,
    /// Value the field would submit right now
    pub value: FieldValue,
    pub validation: Option<&'a mut ValidationSlot>,
}

/// Caller handler bound to a field event.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut FieldEvent<'_>)>);

impl_shared_fn!(EventHandler);

impl EventHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut FieldEvent<'_>) + 'static,
    {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &mut FieldEvent<'_>) {
        (self.0)(event)
    }
}

/// Transform applied to the raw text of a field on extraction.
#[derive(Clone)]
pub struct ParseFn(Rc<dyn Fn(&str) -> Value>);

impl_shared_fn!(ParseFn);

impl ParseFn {
    pub fn new<F>(parse: F) -> Self
    where
        F: Fn(&str) -> Value + 'static,
    {
        Self(Rc::new(parse))
    }

    pub fn call(&self, raw: &str) -> Value {
        (self.0)(raw)
    }
}

/// One field of a form or prompt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSpec {
    pub input_type: String,
    pub value: Value,
    pub input_options: Option<Vec<InputOption>>,
    pub placeholder: Option<String>,
    pub pattern: Option<String>,
    pub maxlength: Option<usize>,
    pub custom_input: Option<CustomInput>,
    #[serde(skip)]
    pub event_handlers: IndexMap<String, EventHandler>,
    pub use_number_shortcuts: bool,
    pub message_before: Option<Content>,
    pub message_after: Option<Content>,
    /// Label of the field, unused by the prompt shorthand
    pub title: Option<String>,
    pub name: Option<String>,
    pub has_validation: bool,
    #[serde(skip)]
    pub parse: Option<ParseFn>,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            input_type: DEFAULT_INPUT_TYPE.to_string(),
            value: json!(""),
            input_options: None,
            placeholder: None,
            pattern: None,
            maxlength: None,
            custom_input: None,
            event_handlers: IndexMap::new(),
            use_number_shortcuts: false,
            message_before: None,
            message_after: None,
            title: None,
            name: None,
            has_validation: false,
            parse: None,
        }
    }
}

impl FieldSpec {
    pub fn new(input_type: impl Into<String>) -> Self {
        Self { input_type: input_type.into(), ..Default::default() }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<InputOption>,
    {
        self.input_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    pub fn with_custom_input(mut self, custom_input: CustomInput) -> Self {
        self.custom_input = Some(custom_input);
        self
    }

    pub fn with_number_shortcuts(mut self) -> Self {
        self.use_number_shortcuts = true;
        self
    }

    pub fn with_validation(mut self) -> Self {
        self.has_validation = true;
        self
    }

    pub fn with_message_before(mut self, content: impl Into<Content>) -> Self {
        self.message_before = Some(content.into());
        self
    }

    pub fn with_message_after(mut self, content: impl Into<Content>) -> Self {
        self.message_after = Some(content.into());
        self
    }

    /// Binds `handler` to the event `name`, replacing any previous one.
    pub fn on<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&mut FieldEvent<'_>) + 'static,
    {
        self.event_handlers.insert(name.to_string(), EventHandler::new(handler));
        self
    }

    pub fn with_parse<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Value + 'static,
    {
        self.parse = Some(ParseFn::new(parse));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_text_field() {
        let spec = FieldSpec::default();
        assert_eq!(spec.input_type, "text");
        assert_eq!(spec.value, json!(""));
        assert!(!spec.has_validation);
    }

    #[test]
    fn deserializes_camel_case_document() {
        let spec: FieldSpec = serde_json::from_value(json!({
            "inputType": "radio",
            "value": "b",
            "inputOptions": ["a", "b"],
            "useNumberShortcuts": true,
            "messageBefore": "Pick one",
            "hasValidation": true
        }))
        .unwrap();

        assert_eq!(spec.input_type, "radio");
        assert_eq!(spec.input_options.as_ref().map(Vec::len), Some(2));
        assert!(spec.use_number_shortcuts);
        assert_eq!(spec.message_before, Some(Content::from("Pick one")));
        assert!(spec.has_validation);
    }

    #[test]
    fn missing_input_type_defaults_to_text() {
        let spec: FieldSpec = serde_json::from_value(json!({"title": "Name"})).unwrap();
        assert_eq!(spec.input_type, "text");
        assert_eq!(spec.value, json!(""));
    }

    #[test]
    fn handlers_replace_by_name() {
        let spec = FieldSpec::default().on("input", |_| {}).on("input", |_| {});
        assert_eq!(spec.event_handlers.len(), 1);
    }

    #[test]
    fn parse_fn_is_called_with_raw_text() {
        let spec = FieldSpec::default().with_parse(|raw| json!(raw.len()));
        assert_eq!(spec.parse.unwrap().call("abcd"), json!(4));
    }
}
