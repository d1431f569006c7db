//! Rendering of a single field into an interactive control
//!
//! A [`FieldSpec`] is first resolved into a closed [`Field`] variant, which
//! validates everything that can fail. Rendering then produces the control
//! state together with the closure that reads the submitted value out of it.

use crate::constants::DEFAULT_CUSTOM_INPUT_TYPE;
use crate::error::{Error, Result};
use crate::form::control::{
    Attributes, Choice, ChoiceGroup, ChoiceList, Control, CustomControl, InputControl,
    SelectControl, ToggleControl, ValidationSlot,
};
use crate::form::spec::{EventHandler, FieldEvent, FieldSpec, ParseFn};
use crate::form::types::{is_truthy, value_to_string, CustomInput, FieldValue, InputType};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Reads the submitted value out of a control.
pub type ExtractValue = Box<dyn Fn(&Control) -> FieldValue>;

#[derive(Debug, Clone)]
pub struct TextField {
    pub input_type: InputType,
    pub value: String,
    pub parse: Option<ParseFn>,
}

#[derive(Debug, Clone)]
pub struct NumberField {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct BooleanField {
    pub checked: bool,
}

/// A validated option of a choice field.
#[derive(Debug, Clone)]
pub struct FieldOption {
    pub text: String,
    pub value: Value,
    pub group: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SelectField {
    pub options: Vec<FieldOption>,
    pub value: String,
    pub custom: Option<(InputType, CustomInput)>,
    pub parse: Option<ParseFn>,
}

#[derive(Debug, Clone)]
pub struct CheckboxField {
    pub options: Vec<FieldOption>,
    pub values: Vec<Value>,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RadioField {
    pub options: Vec<FieldOption>,
    pub value: Value,
    pub name: String,
    pub numbered: bool,
}

/// A field resolved from its spec.
#[derive(Debug, Clone)]
pub enum Field {
    Text(TextField),
    Number(NumberField),
    Boolean(BooleanField),
    Select(SelectField),
    Checkbox(CheckboxField),
    Radio(RadioField),
}

impl Field {
    /// Resolves the field at `index` of the form named `form_name`.
    pub fn from_spec(spec: &FieldSpec, index: usize, form_name: &str) -> Result<Field> {
        let input_type: InputType = spec.input_type.parse()?;
        let field = match input_type {
            InputType::Text
            | InputType::Textarea
            | InputType::Email
            | InputType::Date
            | InputType::Time
            | InputType::Password => Field::Text(TextField {
                input_type,
                value: value_to_string(&spec.value),
                parse: spec.parse.clone(),
            }),
            InputType::Number => Field::Number(NumberField { value: value_to_string(&spec.value) }),
            InputType::Boolean => Field::Boolean(BooleanField { checked: is_truthy(&spec.value) }),
            InputType::Select => {
                let custom = match &spec.custom_input {
                    Some(custom) => {
                        let custom_type = custom
                            .input_type
                            .as_deref()
                            .unwrap_or(DEFAULT_CUSTOM_INPUT_TYPE)
                            .parse()?;
                        Some((custom_type, custom.clone()))
                    }
                    None => None,
                };
                Field::Select(SelectField {
                    options: validated_options(spec, input_type)?,
                    value: value_to_string(&spec.value),
                    custom,
                    parse: spec.parse.clone(),
                })
            }
            InputType::Checkbox => Field::Checkbox(CheckboxField {
                options: validated_options(spec, input_type)?,
                values: match &spec.value {
                    Value::Array(values) => values.clone(),
                    value => vec![value.clone()],
                },
                name: spec.name.clone(),
            }),
            InputType::Radio => Field::Radio(RadioField {
                options: validated_options(spec, input_type)?,
                value: spec.value.clone(),
                name: spec.name.clone().unwrap_or_else(|| format!("{form_name}_input_{index}")),
                numbered: spec.use_number_shortcuts,
            }),
        };
        Ok(field)
    }

    pub fn input_type(&self) -> InputType {
        match self {
            Field::Text(text) => text.input_type,
            Field::Number(_) => InputType::Number,
            Field::Boolean(_) => InputType::Boolean,
            Field::Select(_) => InputType::Select,
            Field::Checkbox(_) => InputType::Checkbox,
            Field::Radio(_) => InputType::Radio,
        }
    }

    /// Builds the initial control and the extraction closure.
    pub fn render(self, attributes: Attributes) -> (Control, ExtractValue) {
        match self {
            Field::Text(field) => render_text(field, attributes),
            Field::Number(field) => render_number(field, attributes),
            Field::Boolean(field) => render_boolean(field, attributes),
            Field::Select(field) => render_select(field, attributes),
            Field::Checkbox(field) => render_checkbox(field, attributes),
            Field::Radio(field) => render_radio(field, attributes),
        }
    }
}

fn validated_options(spec: &FieldSpec, input_type: InputType) -> Result<Vec<FieldOption>> {
    let options = spec.input_options.as_deref().unwrap_or_default();
    if options.is_empty() {
        return Err(Error::MissingInputOptionsError { input_type: input_type.to_string() });
    }

    options
        .iter()
        .map(|option| match (&option.text, &option.value) {
            (Some(text), Some(value)) => Ok(FieldOption {
                text: text.clone(),
                value: value.clone(),
                group: option.group.clone(),
            }),
            _ => Err(Error::MissingOptionFieldsError),
        })
        .collect()
}

fn text_value(raw: &str, parse: Option<&ParseFn>) -> FieldValue {
    match parse {
        Some(parse) => FieldValue::Parsed(parse.call(raw)),
        None => FieldValue::Text(raw.to_string()),
    }
}

fn render_text(field: TextField, attributes: Attributes) -> (Control, ExtractValue) {
    let control = Control::Input(InputControl {
        input_type: field.input_type,
        value: field.value,
        attributes,
        hidden: false,
    });
    let parse = field.parse;
    let extract: ExtractValue = Box::new(move |control| match control {
        Control::Input(input) => text_value(&input.value, parse.as_ref()),
        _ => FieldValue::Missing,
    });
    (control, extract)
}

fn render_number(field: NumberField, attributes: Attributes) -> (Control, ExtractValue) {
    let control = Control::Input(InputControl {
        input_type: InputType::Number,
        value: field.value,
        attributes,
        hidden: false,
    });
    let extract: ExtractValue = Box::new(|control| match control {
        Control::Input(input) => FieldValue::Number(parse_float(&input.value)),
        _ => FieldValue::Missing,
    });
    (control, extract)
}

fn render_boolean(field: BooleanField, attributes: Attributes) -> (Control, ExtractValue) {
    let control = Control::Boolean(ToggleControl { checked: field.checked, attributes });
    let extract: ExtractValue = Box::new(|control| match control {
        Control::Boolean(toggle) => FieldValue::Bool(toggle.checked),
        _ => FieldValue::Missing,
    });
    (control, extract)
}

fn choice(option: &FieldOption, text: String, checked: bool) -> Choice {
    Choice { value: value_to_string(&option.value), text, checked }
}

fn render_select(field: SelectField, attributes: Attributes) -> (Control, ExtractValue) {
    let mut choices = Vec::new();
    let mut groups: Vec<ChoiceGroup> = Vec::new();
    for option in &field.options {
        let entry = choice(option, option.text.clone(), false);
        match &option.group {
            None => choices.push(entry),
            Some(label) => match groups.iter_mut().find(|group| &group.label == label) {
                Some(group) => group.choices.push(entry),
                None => groups.push(ChoiceGroup { label: label.clone(), choices: vec![entry] }),
            },
        }
    }

    let custom = field.custom.as_ref().map(|(input_type, custom)| CustomControl {
        trigger: value_to_string(&custom.value),
        input: InputControl {
            input_type: *input_type,
            value: String::new(),
            attributes: Attributes {
                placeholder: custom.placeholder.clone(),
                pattern: None,
                maxlength: custom.maxlength,
            },
            hidden: true,
        },
    });

    let mut select = SelectControl { choices, groups, attributes, custom };
    if !select.select(&field.value) {
        debug!("select value {:?} matches no option", field.value);
    }
    select.sync_custom();

    // A caller parse only applies to plain selects
    let parse = if field.custom.is_some() { None } else { field.parse };
    let extract: ExtractValue = Box::new(move |control| match control {
        Control::Select(select) => match (&select.custom, select.selected()) {
            (Some(custom), _) if select.custom_selected() => {
                FieldValue::Text(custom.input.value.clone())
            }
            (_, Some(selected)) => text_value(&selected.value, parse.as_ref()),
            (_, None) => FieldValue::Missing,
        },
        _ => FieldValue::Missing,
    });
    (Control::Select(select), extract)
}

fn render_checkbox(field: CheckboxField, attributes: Attributes) -> (Control, ExtractValue) {
    let choices = field
        .options
        .iter()
        .map(|option| choice(option, option.text.clone(), field.values.contains(&option.value)))
        .collect();
    let control =
        Control::Checkbox(ChoiceList { name: field.name, choices, numbered: false, attributes });
    let extract: ExtractValue = Box::new(|control| match control {
        Control::Checkbox(list) => FieldValue::List(list.checked_values()),
        _ => FieldValue::Missing,
    });
    (control, extract)
}

fn render_radio(field: RadioField, attributes: Attributes) -> (Control, ExtractValue) {
    let choices = field
        .options
        .iter()
        .enumerate()
        .map(|(position, option)| {
            let text = if field.numbered {
                format!("{}.\u{a0}{}", position + 1, option.text)
            } else {
                option.text.clone()
            };
            choice(option, text, option.value == field.value)
        })
        .collect();
    let control = Control::Radio(ChoiceList {
        name: Some(field.name),
        choices,
        numbered: field.numbered,
        attributes,
    });
    let extract: ExtractValue = Box::new(|control| match control {
        Control::Radio(list) => match list.choices.iter().find(|c| c.checked) {
            Some(checked) => FieldValue::Text(checked.value.clone()),
            None => FieldValue::Missing,
        },
        _ => FieldValue::Missing,
    });
    (control, extract)
}

/// Leading float of `text`, NaN when there is none.
pub fn parse_float(text: &str) -> f64 {
    static LEADING_FLOAT: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = LEADING_FLOAT.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))").ok()
    });

    pattern
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// What the form should do after a field event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldReaction {
    /// Option to move focus to
    pub focus: Option<usize>,
    pub prevent_default: bool,
}

/// A field rendered into the form.
pub struct RenderedField {
    input_type: InputType,
    control: Control,
    validation: Option<ValidationSlot>,
    handlers: IndexMap<String, EventHandler>,
    extract: ExtractValue,
}

impl std::fmt::Debug for RenderedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedField")
            .field("input_type", &self.input_type)
            .field("control", &self.control)
            .field("validation", &self.validation)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl RenderedField {
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    pub fn validation(&self) -> Option<&ValidationSlot> {
        self.validation.as_ref()
    }

    /// Value the field submits in its current state.
    pub fn value(&self) -> FieldValue {
        (self.extract)(&self.control)
    }

    /// Runs the built-in behavior of `event`, then the caller's handler.
    pub fn dispatch(&mut self, event: &str, key: Option<char>) -> FieldReaction {
        let mut reaction = FieldReaction::default();
        match (&mut self.control, event) {
            (Control::Select(select), "change") => select.sync_custom(),
            (Control::Radio(list), "keypress") if list.numbered => {
                let position = key.and_then(|key| key.to_digit(10)).unwrap_or(0) as usize;
                if position >= 1 && list.check_exclusive(position - 1) {
                    reaction.focus = Some(position - 1);
                    reaction.prevent_default = true;
                }
            }
            _ => {}
        }

        if let Some(handler) = self.handlers.get(event).cloned() {
            let mut field_event = FieldEvent {
                name: event,
                key,
                control: &self.control,
                value: (self.extract)(&self.control),
                validation: self.validation.as_mut(),
            };
            handler.call(&mut field_event);
        }
        reaction
    }
}

/// Resolves and renders the field at `index` of the form named `form_name`.
pub fn render_field(spec: &FieldSpec, index: usize, form_name: &str) -> Result<RenderedField> {
    let field = Field::from_spec(spec, index, form_name)?;
    let input_type = field.input_type();
    let attributes = Attributes {
        placeholder: spec.placeholder.clone(),
        pattern: spec.pattern.clone(),
        maxlength: spec.maxlength,
    };
    let (control, extract) = field.render(attributes);
    debug!("rendered {input_type} field #{index} of {form_name}");

    Ok(RenderedField {
        input_type,
        control,
        validation: spec.has_validation.then(ValidationSlot::default),
        handlers: spec.event_handlers.clone(),
        extract,
    })
}
