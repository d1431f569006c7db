//! Pure interfaces for prompting without external dependencies
//!
//! Each form control kind maps onto one prompt kind; footer buttons are
//! offered through [`ActionPrompter`].

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone, PartialEq)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    /// Hide the typed text
    pub secret: bool,
    /// Pattern the whole answer must match
    pub pattern: Option<String>,
    pub maxlength: Option<usize>,
}

/// Configuration for single choice selection
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Configuration for picking a dialog action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionConfig {
    pub prompt: String,
    pub actions: Vec<String>,
    pub default_index: Option<usize>,
}

pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}

pub trait MultipleChoicePrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig) -> Result<Vec<usize>>;
}

pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Abstract interface for picking an action; `None` means the user escaped.
pub trait ActionPrompter {
    fn prompt_action(&self, config: &ActionConfig) -> Result<Option<usize>>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider:
    TextPrompter + SingleChoicePrompter + MultipleChoicePrompter + ConfirmationPrompter + ActionPrompter
{
}

impl<T> PromptProvider for T where
    T: TextPrompter
        + SingleChoicePrompter
        + MultipleChoicePrompter
        + ConfirmationPrompter
        + ActionPrompter
{
}
