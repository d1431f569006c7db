//! Drives an open dialog from the terminal
//!
//! Each round fills every form control through the prompt provider, then asks
//! for a footer action and dispatches it, until the dialog is gone.

use super::interface::{
    ActionConfig, ConfirmationConfig, MultipleChoiceConfig, PromptProvider, SingleChoiceConfig,
    TextPromptConfig,
};
use crate::constants::terminal;
use crate::dialogs::DialogBox;
use crate::error::Result;
use crate::form::{Control, InputType};
use crate::form::control::InputControl;
use crate::shell::{Dialog, DialogEvent, Key, KeyEvent, ModalWidget};
use crate::types::DialogId;
use log::{debug, warn};

pub struct DialogDriver<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> DialogDriver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Runs rounds of input until the dialog closes.
    pub fn drive<W: ModalWidget>(&self, dialogs: &mut DialogBox<W>, id: DialogId) -> Result<()> {
        for round in 1..=terminal::MAX_ROUNDS {
            let Some(dialog) = dialogs.get_mut(id) else {
                return Ok(());
            };
            debug!("{id}: round {round}");

            let filled = self.fill_form(dialog)?;
            for index in 0..filled {
                let change = DialogEvent::Field { index, event: "change".into(), key: None };
                dialogs.dispatch(id, change)?;
            }

            let Some(dialog) = dialogs.get(id) else {
                return Ok(());
            };
            let action = self.ask_action(dialog)?;
            dialogs.dispatch(id, action)?;
        }

        if dialogs.is_open(id) {
            warn!("{id} is still open after {} rounds", terminal::MAX_ROUNDS);
        }
        Ok(())
    }

    /// Prompts for every field of the dialog's form; returns the field count.
    fn fill_form(&self, dialog: &mut Dialog) -> Result<usize> {
        let title = dialog.title().map(str::to_string);
        let Some(form) = dialog.form_mut() else {
            return Ok(0);
        };
        let scalar = form.is_scalar();

        for index in 0..form.len() {
            let label = form.entries()[index]
                .title
                .clone()
                .or_else(|| title.clone().filter(|_| scalar))
                .unwrap_or_else(|| format!("{} {}", terminal::FIELD_PROMPT, index + 1));
            if let Some(field) = form.field_mut(index) {
                self.fill_control(&label, field.control_mut())?;
            }
        }
        Ok(form.len())
    }

    fn fill_control(&self, label: &str, control: &mut Control) -> Result<()> {
        let has_choices = matches!(control, Control::Input(_) | Control::Boolean(_))
            || control.option_count() > 0;
        if !has_choices {
            return Ok(());
        }

        match control {
            Control::Input(input) => {
                input.value = self.provider.prompt_text(&text_config(label, input))?;
            }
            Control::Boolean(toggle) => {
                let config = ConfirmationConfig { prompt: label.to_string(), default: toggle.checked };
                toggle.checked = self.provider.prompt_confirmation(&config)?;
            }
            Control::Select(select) => {
                let choices: Vec<String> = select.options().map(|c| c.text.clone()).collect();
                let config = SingleChoiceConfig {
                    prompt: label.to_string(),
                    default_index: select.options().position(|c| c.checked),
                    choices,
                };
                select.select_index(self.provider.prompt_single_choice(&config)?);
                select.sync_custom();

                if select.custom_selected() {
                    if let Some(custom) = &mut select.custom {
                        let prompt = format!("{label} {}", terminal::CUSTOM_VALUE_SUFFIX);
                        custom.input.value =
                            self.provider.prompt_text(&text_config(&prompt, &custom.input))?;
                    }
                }
            }
            Control::Checkbox(list) => {
                let config = MultipleChoiceConfig {
                    prompt: label.to_string(),
                    choices: list.choices.iter().map(|c| c.text.clone()).collect(),
                    defaults: list.choices.iter().map(|c| c.checked).collect(),
                };
                let picked = self.provider.prompt_multiple_choice(&config)?;
                for (index, choice) in list.choices.iter_mut().enumerate() {
                    choice.checked = picked.contains(&index);
                }
            }
            Control::Radio(list) => {
                let config = SingleChoiceConfig {
                    prompt: label.to_string(),
                    choices: list.choices.iter().map(|c| c.text.clone()).collect(),
                    default_index: list.choices.iter().position(|c| c.checked),
                };
                list.check_exclusive(self.provider.prompt_single_choice(&config)?);
            }
        }
        Ok(())
    }

    /// Offers the footer buttons plus the close button; escaping presses Escape.
    ///
    /// The prompt is the dialog title, else its message as plain text.
    fn ask_action(&self, dialog: &Dialog) -> Result<DialogEvent> {
        let mut events = Vec::new();
        let mut actions = Vec::new();
        for (key, spec) in dialog.buttons() {
            actions.push(spec.label.clone().unwrap_or_else(|| key.to_string()));
            events.push(DialogEvent::ButtonClick(key.to_string()));
        }
        if dialog.has_close_button() {
            actions.push(terminal::CLOSE_ACTION.to_string());
            events.push(DialogEvent::CloseClick);
        }

        let default_index = dialog
            .primary_button()
            .and_then(|primary| dialog.buttons().position(|(key, _)| key == primary));
        let message = dialog.message().plain_text();
        let prompt = match dialog.title() {
            Some(title) => title.to_string(),
            None if !message.is_empty() => message,
            None => terminal::ACTION_PROMPT.to_string(),
        };
        let config = ActionConfig { prompt, actions, default_index };

        let picked = self.provider.prompt_action(&config)?;
        Ok(match picked.and_then(|index| events.get(index)) {
            Some(event) => event.clone(),
            None => DialogEvent::Key(KeyEvent::up(Key::Escape)),
        })
    }
}

fn text_config(label: &str, input: &InputControl) -> TextPromptConfig {
    TextPromptConfig {
        prompt: label.to_string(),
        default: Some(input.value.clone()).filter(|value| !value.is_empty()),
        secret: input.input_type == InputType::Password,
        pattern: input.attributes.pattern.clone(),
        maxlength: input.attributes.maxlength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::Reply;
    use crate::config::DialogOptions;
    use crate::form::{FieldSpec, FieldValue, FormResult, InputOption};
    use crate::prompt::interface::{
        ActionPrompter, ConfirmationPrompter, MultipleChoicePrompter, SingleChoicePrompter,
        TextPrompter,
    };
    use crate::shell::HeadlessWidget;
    use crate::types::Outcome;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Mock provider for testing
    #[derive(Debug, Default)]
    struct MockProvider {
        text_responses: RefCell<Vec<String>>,
        single_choice_responses: RefCell<Vec<usize>>,
        multiple_choice_responses: RefCell<Vec<Vec<usize>>>,
        confirmation_responses: RefCell<Vec<bool>>,
        action_responses: RefCell<Vec<Option<usize>>>,

        // Track calls for verification
        text_calls: RefCell<Vec<TextPromptConfig>>,
        action_calls: RefCell<Vec<ActionConfig>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Default::default()
        }

        fn with_text_response(self, response: &str) -> Self {
            self.text_responses.borrow_mut().push(response.to_string());
            self
        }

        fn with_single_choice_response(self, response: usize) -> Self {
            self.single_choice_responses.borrow_mut().push(response);
            self
        }

        fn with_multiple_choice_response(self, response: Vec<usize>) -> Self {
            self.multiple_choice_responses.borrow_mut().push(response);
            self
        }

        fn with_confirmation_response(self, response: bool) -> Self {
            self.confirmation_responses.borrow_mut().push(response);
            self
        }

        fn with_action_response(self, response: Option<usize>) -> Self {
            self.action_responses.borrow_mut().push(response);
            self
        }
    }

    impl TextPrompter for MockProvider {
        fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
            self.text_calls.borrow_mut().push(config.clone());
            Ok(self.text_responses.borrow_mut().remove(0))
        }
    }

    impl SingleChoicePrompter for MockProvider {
        fn prompt_single_choice(&self, _config: &SingleChoiceConfig) -> Result<usize> {
            Ok(self.single_choice_responses.borrow_mut().remove(0))
        }
    }

    impl MultipleChoicePrompter for MockProvider {
        fn prompt_multiple_choice(&self, _config: &MultipleChoiceConfig) -> Result<Vec<usize>> {
            Ok(self.multiple_choice_responses.borrow_mut().remove(0))
        }
    }

    impl ConfirmationPrompter for MockProvider {
        fn prompt_confirmation(&self, _config: &ConfirmationConfig) -> Result<bool> {
            Ok(self.confirmation_responses.borrow_mut().remove(0))
        }
    }

    impl ActionPrompter for MockProvider {
        fn prompt_action(&self, config: &ActionConfig) -> Result<Option<usize>> {
            self.action_calls.borrow_mut().push(config.clone());
            Ok(self.action_responses.borrow_mut().remove(0))
        }
    }

    fn capture() -> (Rc<RefCell<Option<Reply>>>, DialogOptions) {
        let reply = Rc::new(RefCell::new(None));
        let sink = reply.clone();
        let options = DialogOptions::default().with_callback(move |r| {
            *sink.borrow_mut() = Some(r);
            Outcome::Dismiss
        });
        (reply, options)
    }

    fn dialog_box() -> DialogBox {
        DialogBox::with_widget(HeadlessWidget::new())
    }

    #[test]
    fn test_prompt_is_filled_and_submitted() {
        let (reply, options) = capture();
        let mut dialogs = dialog_box();
        let id = dialogs
            .prompt(options.with_title("Your name").with_input(FieldSpec::default().with_maxlength(8)))
            .unwrap();

        // cancel, confirm, close
        let provider = MockProvider::new().with_text_response("Ada").with_action_response(Some(1));
        let driver = DialogDriver::new(provider);
        driver.drive(&mut dialogs, id).unwrap();

        assert!(!dialogs.is_open(id));
        assert_eq!(
            *reply.borrow(),
            Some(Reply::Form(Some(FormResult::Single(FieldValue::Text("Ada".into())))))
        );

        let text_calls = driver.provider.text_calls.borrow();
        assert_eq!(text_calls[0].prompt, "Your name");
        assert_eq!(text_calls[0].maxlength, Some(8));

        let action_calls = driver.provider.action_calls.borrow();
        assert_eq!(action_calls[0].actions, vec!["Cancel", "OK", terminal::CLOSE_ACTION]);
        assert_eq!(action_calls[0].default_index, Some(1));
    }

    #[test]
    fn test_escape_cancels_confirm() {
        let (reply, options) = capture();
        let mut dialogs = dialog_box();
        let id = dialogs.confirm(DialogOptions { message: Some("Sure?".into()), ..options }).unwrap();

        let driver = DialogDriver::new(MockProvider::new().with_action_response(None));
        driver.drive(&mut dialogs, id).unwrap();

        assert_eq!(*reply.borrow(), Some(Reply::Confirmed(false)));
    }

    #[test]
    fn test_form_controls_are_filled_by_kind() {
        let (reply, options) = capture();
        let mut dialogs = dialog_box();
        let inputs = vec![
            FieldSpec::new("checkbox").with_title("Tags").with_options(["a", "b", "c"]),
            FieldSpec::new("boolean").with_title("Subscribe"),
            FieldSpec::new("radio").with_title("Size").with_options(["s", "m"]),
        ];
        let id = dialogs.form(options.with_title("Profile").with_inputs(inputs)).unwrap();

        let provider = MockProvider::new()
            .with_multiple_choice_response(vec![0, 2])
            .with_confirmation_response(true)
            .with_single_choice_response(1)
            .with_action_response(Some(1));
        DialogDriver::new(provider).drive(&mut dialogs, id).unwrap();

        assert_eq!(
            *reply.borrow(),
            Some(Reply::Form(Some(FormResult::Many(vec![
                FieldValue::List(vec!["a".into(), "c".into()]),
                FieldValue::Bool(true),
                FieldValue::Text("m".into()),
            ]))))
        );
    }

    #[test]
    fn test_select_custom_value_is_asked() {
        let (reply, options) = capture();
        let mut dialogs = dialog_box();
        let input = FieldSpec::new("select")
            .with_options([InputOption::new("Red", "red"), InputOption::new("Other", "other")])
            .with_custom_input(crate::form::CustomInput::new("other"));
        let id = dialogs.prompt(options.with_title("Color").with_input(input)).unwrap();

        let provider = MockProvider::new()
            .with_single_choice_response(1)
            .with_text_response("teal")
            .with_action_response(Some(1));
        let driver = DialogDriver::new(provider);
        driver.drive(&mut dialogs, id).unwrap();

        assert_eq!(
            driver.provider.text_calls.borrow()[0].prompt,
            format!("Color {}", terminal::CUSTOM_VALUE_SUFFIX)
        );
        assert_eq!(
            *reply.borrow(),
            Some(Reply::Form(Some(FormResult::Single(FieldValue::Text("teal".into())))))
        );
    }
}
