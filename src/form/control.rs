//! Interactive state of rendered form controls

use crate::form::types::InputType;
use serde::Serialize;

/// Markup attributes shared by every control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub placeholder: Option<String>,
    pub pattern: Option<String>,
    pub maxlength: Option<usize>,
}

/// A single-value input or textarea.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputControl {
    pub input_type: InputType,
    pub value: String,
    pub attributes: Attributes,
    pub hidden: bool,
}

/// A lone checkbox holding a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub checked: bool,
    pub attributes: Attributes,
}

/// One option of a select, or one box of a checkbox or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub text: String,
    /// Selected, for select options
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceGroup {
    pub label: String,
    pub choices: Vec<Choice>,
}

/// Free-text input revealed when the select holds `trigger`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomControl {
    pub trigger: String,
    pub input: InputControl,
}

/// A drop-down list. Grouped options follow the ungrouped ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectControl {
    pub choices: Vec<Choice>,
    pub groups: Vec<ChoiceGroup>,
    pub attributes: Attributes,
    pub custom: Option<CustomControl>,
}

impl SelectControl {
    /// Options in markup order.
    pub fn options(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().chain(self.groups.iter().flat_map(|group| group.choices.iter()))
    }

    fn options_mut(&mut self) -> impl Iterator<Item = &mut Choice> {
        self.choices
            .iter_mut()
            .chain(self.groups.iter_mut().flat_map(|group| group.choices.iter_mut()))
    }

    pub fn selected(&self) -> Option<&Choice> {
        self.options().find(|choice| choice.checked)
    }

    /// Selects the option holding `value`; nothing stays selected when none does.
    pub fn select(&mut self, value: &str) -> bool {
        let mut found = false;
        for choice in self.options_mut() {
            choice.checked = !found && choice.value == value;
            found |= choice.checked;
        }
        found
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        let mut found = false;
        for (position, choice) in self.options_mut().enumerate() {
            choice.checked = position == index;
            found |= choice.checked;
        }
        found
    }

    /// Whether the custom input sentinel is selected.
    pub fn custom_selected(&self) -> bool {
        match (&self.custom, self.selected()) {
            (Some(custom), Some(choice)) => choice.value == custom.trigger,
            _ => false,
        }
    }

    /// Shows the custom input exactly while its sentinel is selected.
    pub fn sync_custom(&mut self) {
        let visible = self.custom_selected();
        if let Some(custom) = &mut self.custom {
            custom.input.hidden = !visible;
        }
    }
}

/// A group of checkboxes or radio buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceList {
    /// Shared input name (radio groups)
    pub name: Option<String>,
    pub choices: Vec<Choice>,
    /// Labels are prefixed with their position and digit keys pick them
    pub numbered: bool,
    pub attributes: Attributes,
}

impl ChoiceList {
    pub fn checked_values(&self) -> Vec<String> {
        self.choices.iter().filter(|c| c.checked).map(|c| c.value.clone()).collect()
    }

    /// Checks one radio button, unchecking the others.
    pub fn check_exclusive(&mut self, index: usize) -> bool {
        if index >= self.choices.len() {
            return false;
        }
        for (position, choice) in self.choices.iter_mut().enumerate() {
            choice.checked = position == index;
        }
        true
    }
}

/// The interactive part of a rendered field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Control {
    Input(InputControl),
    Boolean(ToggleControl),
    Select(SelectControl),
    Checkbox(ChoiceList),
    Radio(ChoiceList),
}

impl Control {
    /// Types into an input, or into the custom input of a select.
    pub fn set_text(&mut self, text: &str) -> bool {
        match self {
            Control::Input(input) => input.value = text.to_string(),
            Control::Select(SelectControl { custom: Some(custom), .. }) => {
                custom.input.value = text.to_string()
            }
            _ => return false,
        }
        true
    }

    /// Sets a boolean checkbox.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        match self {
            Control::Boolean(toggle) => toggle.checked = checked,
            _ => return false,
        }
        true
    }

    /// Checks or unchecks the option at `index`.
    ///
    /// Checking a radio button or select option clears the others.
    pub fn set_option(&mut self, index: usize, checked: bool) -> bool {
        match self {
            Control::Checkbox(list) => match list.choices.get_mut(index) {
                Some(choice) => {
                    choice.checked = checked;
                    true
                }
                None => false,
            },
            Control::Radio(list) if checked => list.check_exclusive(index),
            Control::Radio(list) => match list.choices.get_mut(index) {
                Some(choice) => {
                    choice.checked = false;
                    true
                }
                None => false,
            },
            Control::Select(select) if checked => select.select_index(index),
            _ => false,
        }
    }

    /// Picks the option holding `value` in a select or radio group.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self {
            Control::Select(select) => select.select(value),
            Control::Radio(list) => match list.choices.iter().position(|c| c.value == value) {
                Some(index) => list.check_exclusive(index),
                None => false,
            },
            _ => false,
        }
    }

    /// Number of options, zero for single-value controls.
    pub fn option_count(&self) -> usize {
        match self {
            Control::Select(select) => select.options().count(),
            Control::Checkbox(list) | Control::Radio(list) => list.choices.len(),
            Control::Input(_) | Control::Boolean(_) => 0,
        }
    }
}

/// Message slot shown after a field declaring `hasValidation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSlot {
    message: Option<String>,
}

impl ValidationSlot {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
