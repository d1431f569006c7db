//! Composition of the options of the shorthand dialog kinds
//!
//! Each kind starts from a base (a class name and localized default buttons),
//! merges the caller's options over it, checks the button keys and finally
//! wires its own callbacks, which the caller cannot override.

use crate::args::{map_arguments, Argument, Property};
use crate::callback::{ButtonCallback, Reply, ReplyCallback};
use crate::config::{ButtonInput, ButtonSpec, Content, DialogOptions};
use crate::constants::classes;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::locale::{Label, LocaleTable};
use crate::types::{DialogKind, Outcome};
use indexmap::IndexMap;

impl DialogKind {
    /// Buttons a kind is built with, in footer order.
    pub fn labels(&self) -> &'static [Label] {
        match self {
            DialogKind::Alert => &[Label::Ok],
            DialogKind::Confirm | DialogKind::Prompt | DialogKind::Form => {
                &[Label::Cancel, Label::Confirm]
            }
            DialogKind::Dialog => &[],
        }
    }

    fn leading_property(&self) -> Property {
        match self {
            DialogKind::Prompt | DialogKind::Form => Property::Title,
            _ => Property::Message,
        }
    }

    fn class_name(&self) -> Option<String> {
        let suffix = match self {
            DialogKind::Alert => "alert",
            DialogKind::Confirm => "confirm",
            DialogKind::Prompt | DialogKind::Form => "prompt",
            DialogKind::Dialog => return None,
        };
        Some(format!("{}{suffix}", classes::KIND_PREFIX))
    }
}

/// Default buttons keyed by lowercase name and labelled in `locale`.
pub fn create_labels(
    labels: &[Label],
    locales: &LocaleTable,
    locale: &str,
) -> IndexMap<String, ButtonInput> {
    labels
        .iter()
        .map(|label| {
            let spec = ButtonSpec::new(locales.translate(locale, *label));
            (label.button_key().to_string(), ButtonInput::Full(spec))
        })
        .collect()
}

/// Fails when `options` carries a button outside `allowed`.
pub fn validate_buttons(options: &DialogOptions, allowed: &[Label]) -> Result<()> {
    for key in options.buttons.iter().flat_map(|buttons| buttons.keys()) {
        if !allowed.iter().any(|label| label.button_key() == key) {
            let allowed: Vec<_> = allowed.iter().map(Label::button_key).collect();
            return Err(Error::UnknownButtonKeyError {
                key: key.clone(),
                allowed: allowed.join(", "),
            });
        }
    }
    Ok(())
}

/// Maps the call arguments and merges them over the base options of `kind`.
///
/// Labels use the caller's `locale` option when given, else `default_locale`.
pub fn merge_dialog_options(
    kind: DialogKind,
    args: Vec<Argument>,
    locales: &LocaleTable,
    default_locale: &str,
) -> Result<DialogOptions> {
    let caller = map_arguments(args, [kind.leading_property(), Property::Callback])?;
    let locale = caller.locale.as_deref().unwrap_or(default_locale);

    let base = DialogOptions {
        class_name: kind.class_name(),
        buttons: Some(create_labels(kind.labels(), locales, locale)),
        ..Default::default()
    };

    let merged = merge_options(base, caller);
    validate_buttons(&merged, kind.labels())?;
    Ok(merged)
}

fn merge_options(base: DialogOptions, mut caller: DialogOptions) -> DialogOptions {
    caller.class_name = caller.class_name.or(base.class_name);
    caller.buttons = Some(merge_buttons(base.buttons.unwrap_or_default(), caller.buttons));
    caller
}

fn merge_buttons(
    mut merged: IndexMap<String, ButtonInput>,
    caller: Option<IndexMap<String, ButtonInput>>,
) -> IndexMap<String, ButtonInput> {
    for (key, button) in caller.into_iter().flatten() {
        match (merged.get_mut(&key), button) {
            (Some(ButtonInput::Full(base)), ButtonInput::Full(spec)) => {
                if spec.label.is_some() {
                    base.label = spec.label;
                }
                if spec.class_name.is_some() {
                    base.class_name = spec.class_name;
                }
                if spec.callback.is_some() {
                    base.callback = spec.callback;
                }
            }
            (Some(ButtonInput::Full(base)), ButtonInput::Callback(callback)) => {
                base.callback = Some(callback);
            }
            (_, button) => {
                merged.insert(key, button);
            }
        }
    }
    merged
}

fn set_button_callback(options: &mut DialogOptions, key: &str, callback: ButtonCallback) {
    if let Some(ButtonInput::Full(spec)) =
        options.buttons.as_mut().and_then(|buttons| buttons.get_mut(key))
    {
        spec.callback = Some(callback);
    }
}

/// `ok` and escape acknowledge through the optional caller callback.
pub fn alert_options(mut options: DialogOptions) -> DialogOptions {
    let callback = options.callback.clone();
    let acknowledge = ButtonCallback::new(move |_| match &callback {
        Some(callback) => callback.call(Reply::Acknowledged),
        None => Outcome::Dismiss,
    });

    set_button_callback(&mut options, Label::Ok.button_key(), acknowledge.clone());
    options.on_escape = Some(acknowledge);
    options
}

/// `cancel` and escape answer `false`, `confirm` answers `true`.
pub fn confirm_options(mut options: DialogOptions) -> Result<DialogOptions> {
    let callback = require_callback(&options, DialogKind::Confirm)?;

    let answer = |value: bool| {
        let callback = callback.clone();
        ButtonCallback::new(move |_| callback.call(Reply::Confirmed(value)))
    };

    set_button_callback(&mut options, Label::Cancel.button_key(), answer(false));
    options.on_escape = Some(answer(false));
    set_button_callback(&mut options, Label::Confirm.button_key(), answer(true));
    Ok(options)
}

/// Moves the prompt's single field into `inputs` and wires it as a form.
pub fn prompt_options(mut options: DialogOptions) -> Result<DialogOptions> {
    require_title(&options, DialogKind::Prompt)?;
    require_callback(&options, DialogKind::Prompt)?;

    let input = options.input.take().unwrap_or_default();
    options.inputs = Some(vec![input]);
    form_options(options, DialogKind::Prompt)
}

/// `cancel` and escape answer `None`, `confirm` answers with the form's values.
pub fn form_options(mut options: DialogOptions, kind: DialogKind) -> Result<DialogOptions> {
    require_title(&options, kind)?;
    let callback = require_callback(&options, kind)?;

    let cancel = {
        let callback = callback.clone();
        ButtonCallback::new(move |_| callback.call(Reply::Form(None)))
    };
    let submit =
        ButtonCallback::new(move |ctx| callback.call(Reply::Form(ctx.form().map(Form::result))));

    set_button_callback(&mut options, Label::Cancel.button_key(), cancel.clone());
    options.on_escape = Some(cancel);
    set_button_callback(&mut options, Label::Confirm.button_key(), submit);
    options.message = Some(Content::Form);
    Ok(options)
}

fn require_title(options: &DialogOptions, kind: DialogKind) -> Result<()> {
    match options.title.as_deref() {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(Error::MissingTitleError { kind: kind.as_str() }),
    }
}

fn require_callback(options: &DialogOptions, kind: DialogKind) -> Result<ReplyCallback> {
    options.callback.clone().ok_or(Error::MissingCallbackError { kind: kind.as_str() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{CallbackContext, Trigger};
    use crate::types::DialogId;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn merge(kind: DialogKind, args: Vec<Argument>) -> Result<DialogOptions> {
        merge_dialog_options(kind, args, &LocaleTable::builtin(), "en")
    }

    fn recorder() -> (Rc<RefCell<Vec<Reply>>>, ReplyCallback) {
        let replies = Rc::new(RefCell::new(Vec::new()));
        let sink = replies.clone();
        let callback = ReplyCallback::new(move |reply| {
            sink.borrow_mut().push(reply);
            Outcome::Dismiss
        });
        (replies, callback)
    }

    fn press(options: &DialogOptions, key: &str) -> Outcome {
        let spec = options.button_specs().find(|(k, _)| *k == key).map(|(_, s)| s).unwrap();
        let ctx = CallbackContext::new(DialogId(1), Trigger::Button(key.into()), None);
        spec.callback.as_ref().unwrap().call(&ctx)
    }

    fn escape(options: &DialogOptions) -> Outcome {
        let ctx = CallbackContext::new(DialogId(1), Trigger::Escape, None);
        options.on_escape.as_ref().unwrap().call(&ctx)
    }

    fn labels(options: &DialogOptions) -> Vec<(String, String)> {
        options
            .button_specs()
            .map(|(key, spec)| (key.to_string(), spec.label.clone().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn alert_base_has_localized_ok_button() {
        let options = merge(DialogKind::Alert, vec!["Hi".into()]).unwrap();
        assert_eq!(options.class_name.as_deref(), Some("bootbox-alert"));
        assert_eq!(labels(&options), vec![("ok".to_string(), "OK".to_string())]);
    }

    #[test]
    fn confirm_labels_follow_locale() {
        let options =
            merge_dialog_options(DialogKind::Confirm, vec!["?".into()], &LocaleTable::builtin(), "de")
                .unwrap();
        assert_eq!(
            labels(&options),
            vec![
                ("cancel".to_string(), "Abbrechen".to_string()),
                ("confirm".to_string(), "Akzeptieren".to_string()),
            ]
        );
    }

    #[test]
    fn caller_locale_option_wins() {
        let options = DialogOptions { locale: Some("fr".into()), ..DialogOptions::new("?") };
        let options = merge(DialogKind::Confirm, vec![options.into()]).unwrap();
        assert_eq!(labels(&options)[0].1, "Annuler");
    }

    #[test]
    fn caller_overrides_label_and_class_only() {
        let options = DialogOptions::new("?")
            .with_button("confirm", ButtonSpec::new("Delete").with_class("btn-danger"));
        let options = merge(DialogKind::Confirm, vec![options.into()]).unwrap();

        let confirm = options.button_specs().find(|(k, _)| *k == "confirm").unwrap().1;
        assert_eq!(confirm.label.as_deref(), Some("Delete"));
        assert_eq!(confirm.class_name.as_deref(), Some("btn-danger"));
        assert_eq!(labels(&options)[0], ("cancel".to_string(), "Cancel".to_string()));
    }

    #[test]
    fn caller_class_name_replaces_kind_class() {
        let options = DialogOptions { class_name: Some("mine".into()), ..DialogOptions::new("x") };
        let options = merge(DialogKind::Alert, vec![options.into()]).unwrap();
        assert_eq!(options.class_name.as_deref(), Some("mine"));
    }

    #[test]
    fn unknown_button_key_is_rejected() {
        let options = DialogOptions::new("?").with_button("maybe", ButtonSpec::new("Maybe"));
        let result = merge(DialogKind::Confirm, vec![options.into()]);
        assert!(matches!(
            result,
            Err(Error::UnknownButtonKeyError { key, allowed })
                if key == "maybe" && allowed == "cancel, confirm"
        ));
    }

    #[test]
    fn alert_without_callback_dismisses() {
        let options = alert_options(merge(DialogKind::Alert, vec!["x".into()]).unwrap());
        assert_eq!(press(&options, "ok"), Outcome::Dismiss);
        assert_eq!(escape(&options), Outcome::Dismiss);
    }

    #[test]
    fn alert_callback_is_acknowledged() {
        let (replies, callback) = recorder();
        let options = merge(DialogKind::Alert, vec!["x".into(), callback.into()]).unwrap();
        let options = alert_options(options);

        press(&options, "ok");
        escape(&options);
        assert_eq!(*replies.borrow(), vec![Reply::Acknowledged, Reply::Acknowledged]);
    }

    #[test]
    fn alert_button_callback_cannot_be_overridden() {
        let custom = ButtonCallback::new(|_| Outcome::KeepOpen);
        let options = DialogOptions::new("x").with_button("ok", custom);
        let options = alert_options(merge(DialogKind::Alert, vec![options.into()]).unwrap());
        assert_eq!(press(&options, "ok"), Outcome::Dismiss);
    }

    #[test]
    fn confirm_requires_callback() {
        let options = merge(DialogKind::Confirm, vec!["x".into()]).unwrap();
        let result = confirm_options(options);
        assert!(matches!(result, Err(Error::MissingCallbackError { kind: "confirm" })));
    }

    #[test]
    fn confirm_answers_true_and_false() {
        let (replies, callback) = recorder();
        let options = merge(DialogKind::Confirm, vec!["x".into(), callback.into()]).unwrap();
        let options = confirm_options(options).unwrap();

        press(&options, "confirm");
        press(&options, "cancel");
        escape(&options);
        assert_eq!(
            *replies.borrow(),
            vec![Reply::Confirmed(true), Reply::Confirmed(false), Reply::Confirmed(false)]
        );
    }

    #[test]
    fn prompt_requires_title_then_callback() {
        let options = merge(DialogKind::Prompt, vec![DialogOptions::default().into()]).unwrap();
        assert!(matches!(
            prompt_options(options),
            Err(Error::MissingTitleError { kind: "prompt" })
        ));

        let options = merge(DialogKind::Prompt, vec!["Name?".into()]).unwrap();
        assert!(matches!(
            prompt_options(options),
            Err(Error::MissingCallbackError { kind: "prompt" })
        ));
    }

    #[test]
    fn prompt_moves_input_into_inputs() {
        let (_, callback) = recorder();
        let options = merge(DialogKind::Prompt, vec!["Name?".into(), callback.into()]).unwrap();
        let options = prompt_options(options).unwrap();

        assert_eq!(options.class_name.as_deref(), Some("bootbox-prompt"));
        assert_eq!(options.message, Some(Content::Form));
        let inputs = options.inputs.unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].input_type, "text");
        assert_eq!(inputs[0].value, serde_json::json!(""));
    }

    #[test]
    fn form_cancel_and_escape_answer_none() {
        let (replies, callback) = recorder();
        let options = DialogOptions::default().with_title("T").with_callback(callback);
        let options = merge(DialogKind::Form, vec![options.into()]).unwrap();
        let options = form_options(options, DialogKind::Form).unwrap();

        press(&options, "cancel");
        escape(&options);
        press(&options, "confirm");
        assert_eq!(
            *replies.borrow(),
            vec![Reply::Form(None), Reply::Form(None), Reply::Form(None)]
        );
    }
}
