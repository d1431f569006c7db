//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ActionConfig, ActionPrompter, ConfirmationConfig, ConfirmationPrompter,
    MultipleChoiceConfig, MultipleChoicePrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use log::warn;
use regex::Regex;

/// Terminal prompts through dialoguer
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles `pattern` so that it must match the whole answer.
fn anchored(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Ignoring invalid pattern '{pattern}': {e}");
            None
        }
    }
}

/// Checks an answer against the field constraints.
pub(crate) fn check_answer(
    answer: &str,
    pattern: Option<&Regex>,
    maxlength: Option<usize>,
) -> std::result::Result<(), String> {
    if let Some(max) = maxlength {
        if answer.chars().count() > max {
            return Err(format!("At most {max} characters are allowed"));
        }
    }
    match pattern {
        Some(regex) if !answer.is_empty() && !regex.is_match(answer) => {
            Err(format!("Value must match {}", regex.as_str()))
        }
        _ => Ok(()),
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        if config.secret {
            return Ok(Password::new().with_prompt(&config.prompt).allow_empty_password(true).interact()?);
        }

        let pattern = config.pattern.as_deref().and_then(anchored);
        let maxlength = config.maxlength;
        let mut input = Input::<String>::new().with_prompt(&config.prompt).allow_empty(true);
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        Ok(input
            .validate_with(move |answer: &String| check_answer(answer, pattern.as_ref(), maxlength))
            .interact_text()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        Ok(select.interact()?)
    }
}

impl MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig) -> Result<Vec<usize>> {
        let indices = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact()?;

        Ok(indices)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result =
            Confirm::new().with_prompt(&config.prompt).default(config.default).interact()?;

        Ok(result)
    }
}

impl ActionPrompter for DialoguerPrompter {
    fn prompt_action(&self, config: &ActionConfig) -> Result<Option<usize>> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.actions);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        // Esc or q leave the selection empty
        Ok(select.interact_opt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_must_match_whole_answer() {
        let regex = anchored("[0-9]+");
        assert!(check_answer("123", regex.as_ref(), None).is_ok());
        assert!(check_answer("12a", regex.as_ref(), None).is_err());
        assert!(check_answer("", regex.as_ref(), None).is_ok());
    }

    #[test]
    fn maxlength_counts_characters() {
        assert!(check_answer("héllo", None, Some(5)).is_ok());
        assert!(check_answer("héllo!", None, Some(5)).is_err());
    }

    #[test]
    fn invalid_pattern_is_ignored() {
        assert!(anchored("(").is_none());
    }
}
