//! Prompt provider answering from predefined responses
//!
//! Used by `run --non-interactive` and by tests: every prompt is answered
//! without user interaction, from the responses keyed by prompt text or
//! from the prompt's own default.

use super::interface::*;
use crate::error::{Error, Result};
use log::info;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
    multiple_choice_responses: HashMap<String, Vec<usize>>,
    confirmation_responses: HashMap<String, bool>,
    /// Action labels; a label that is not offered escapes the dialog
    action_responses: HashMap<String, String>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads responses from a JSON object keyed by prompt.
    ///
    /// Strings answer text and action prompts, integers single choices,
    /// booleans confirmations and arrays of integers multiple choices.
    pub fn from_answers(answers: &Value) -> Result<Self> {
        let Value::Object(answers) = answers else {
            return Err(Error::InvalidArgumentError("answers must be a JSON object".into()));
        };

        let mut prompter = Self::new();
        for (prompt, answer) in answers {
            prompter = match answer {
                Value::String(text) => {
                    prompter.with_text_response(prompt, text).with_action_response(prompt, text)
                }
                Value::Bool(b) => prompter.with_confirmation_response(prompt, *b),
                Value::Number(n) => match n.as_u64() {
                    Some(index) => prompter.with_choice_response(prompt, index as usize),
                    None => return Err(invalid_answer(prompt, answer)),
                },
                Value::Array(items) => {
                    let indices = items
                        .iter()
                        .map(|item| item.as_u64().map(|i| i as usize))
                        .collect::<Option<Vec<_>>>()
                        .ok_or_else(|| invalid_answer(prompt, answer))?;
                    prompter.with_multiple_choice_response(prompt, indices)
                }
                _ => return Err(invalid_answer(prompt, answer)),
            };
        }
        Ok(prompter)
    }

    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }

    pub fn with_multiple_choice_response(mut self, prompt: &str, indices: Vec<usize>) -> Self {
        self.multiple_choice_responses.insert(prompt.to_string(), indices);
        self
    }

    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    pub fn with_action_response(mut self, prompt: &str, action: &str) -> Self {
        self.action_responses.insert(prompt.to_string(), action.to_string());
        self
    }
}

fn invalid_answer(prompt: &str, answer: &Value) -> Error {
    Error::InvalidArgumentError(format!("unsupported answer {answer} for '{prompt}'"))
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        info!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let response = self
            .choice_responses
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .unwrap_or(0);

        info!(
            "Auto-answering choice prompt '{}' with option {}: '{}'",
            config.prompt,
            response,
            config.choices.get(response).map(String::as_str).unwrap_or("<invalid>")
        );
        Ok(response)
    }
}

impl MultipleChoicePrompter for AutomaticPrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig) -> Result<Vec<usize>> {
        let response =
            self.multiple_choice_responses.get(&config.prompt).cloned().unwrap_or_else(|| {
                config
                    .defaults
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| selected.then_some(i))
                    .collect()
            });

        info!("Auto-answering multiple choice prompt '{}' with options: {:?}", config.prompt, response);
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let response =
            self.confirmation_responses.get(&config.prompt).copied().unwrap_or(config.default);

        info!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}

impl ActionPrompter for AutomaticPrompter {
    fn prompt_action(&self, config: &ActionConfig) -> Result<Option<usize>> {
        let response = match self.action_responses.get(&config.prompt) {
            Some(label) => config.actions.iter().position(|action| action == label),
            None => config.default_index,
        };

        match response.and_then(|i| config.actions.get(i)) {
            Some(action) => info!("Auto-answering '{}' with: '{}'", config.prompt, action),
            None => info!("Auto-answering '{}' by escaping", config.prompt),
        }
        Ok(response)
    }
}
