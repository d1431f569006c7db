//! A displayed dialog and its event handling

use crate::callback::{ButtonCallback, CallbackContext, Trigger};
use crate::config::{Backdrop, ButtonInput, ButtonSpec, Content, DialogOptions};
use crate::constants::{classes, CONFIRM_BUTTON, KEY_EVENTS};
use crate::error::Result;
use crate::form::Form;
use crate::renderer::{ButtonView, DialogView, MarkupRenderer};
use crate::shell::widget::{EventTarget, ModalConfig, ModalEvent, ModalWidget, WidgetBackdrop};
use crate::types::{DialogId, Outcome};
use indexmap::IndexMap;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Press,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub phase: KeyPhase,
    pub key: Key,
}

impl KeyEvent {
    pub fn up(key: Key) -> Self {
        Self { phase: KeyPhase::Up, key }
    }
}

/// User interaction or widget notification delivered to a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A footer button, by key
    ButtonClick(String),
    CloseClick,
    /// A click on the dialog element; `on_backdrop` when the backdrop itself was hit
    BackdropClick { on_backdrop: bool },
    Key(KeyEvent),
    /// Submission of the dialog's form
    Submit,
    Lifecycle(ModalEvent),
    /// An event on a form field
    Field { index: usize, event: String, key: Option<char> },
}

/// How the event should be treated after the dialog handled it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResult {
    pub stop_propagation: bool,
    pub prevent_default: bool,
    /// The dialog has been hidden for good and should be removed
    pub detach: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Created,
    Visible,
    Hiding,
    Hidden,
}

/// Element holding the keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Button(String),
    Field(usize),
    Option { field: usize, option: usize },
}

/// A dialog built from sanitized options.
#[derive(Debug)]
pub struct Dialog {
    id: DialogId,
    title: Option<String>,
    message: Content,
    form: Option<Form>,
    buttons: IndexMap<String, ButtonSpec>,
    on_escape: Option<ButtonCallback>,
    classes: String,
    size: Option<&'static str>,
    close_button: bool,
    backdrop: Backdrop,
    container: String,
    submit_on_enter: bool,
    propagate_keys: bool,
    state: DialogState,
    listening: bool,
    focus: Option<Focus>,
    focus_inputs: bool,
}

impl Dialog {
    /// Builds a dialog from sanitized `options`, with `form` as its body if given.
    pub fn new(id: DialogId, options: DialogOptions, form: Option<Form>) -> Self {
        let mut class_list = classes::DIALOG.to_string();
        if options.animate.unwrap_or(true) {
            class_list.push(' ');
            class_list.push_str(classes::FADE);
        }
        if let Some(class_name) = options.class_name.as_deref().filter(|c| !c.is_empty()) {
            class_list.push(' ');
            class_list.push_str(class_name);
        }

        let buttons = options
            .buttons
            .into_iter()
            .flatten()
            .filter_map(|(key, button)| match button {
                ButtonInput::Full(spec) => Some((key, spec)),
                _ => None,
            })
            .collect();

        let focus_inputs = form.as_ref().is_some_and(|form| !form.is_empty());
        Self {
            id,
            title: options.title.filter(|title| !title.is_empty()),
            message: options.message.unwrap_or(Content::Form),
            form,
            buttons,
            on_escape: options.on_escape,
            classes: class_list,
            size: options.size.and_then(|size| size.class()),
            close_button: options.close_button.unwrap_or(true),
            backdrop: options.backdrop.unwrap_or_default(),
            container: options.container.unwrap_or_default(),
            submit_on_enter: options.submit_on_enter.unwrap_or(false),
            propagate_keys: options.propagate_keys.unwrap_or(false),
            state: DialogState::Created,
            listening: true,
            focus: None,
            focus_inputs,
        }
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> &Content {
        &self.message
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.form.as_mut()
    }

    /// Footer buttons in order.
    pub fn buttons(&self) -> impl Iterator<Item = (&str, &ButtonSpec)> {
        self.buttons.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    pub fn has_close_button(&self) -> bool {
        self.close_button
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Whether clicks and escape still reach the callbacks.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn focus(&self) -> Option<&Focus> {
        self.focus.as_ref()
    }

    /// Widget configuration: escape and showing are always left to the dialog.
    pub fn modal_config(&self) -> ModalConfig {
        let backdrop = if self.backdrop.is_shown() {
            WidgetBackdrop::Static
        } else {
            WidgetBackdrop::Disabled
        };
        ModalConfig { backdrop, keyboard: false, show: false }
    }

    /// Key of the first primary footer button.
    pub fn primary_button(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|(_, spec)| spec.class_name.as_deref() == Some(classes::PRIMARY_BUTTON))
            .map(|(key, _)| key.as_str())
    }

    pub fn markup(&self, renderer: &MarkupRenderer) -> Result<String> {
        let view = DialogView {
            id: self.id.to_string(),
            classes: self.classes.clone(),
            size: self.size,
            title: self.title.as_deref(),
            close_button: self.close_button,
            message: Some(&self.message),
            buttons: self
                .buttons
                .iter()
                .map(|(key, spec)| ButtonView {
                    key,
                    label: spec.label.as_deref().unwrap_or(key),
                    class_name: spec.class_name.as_deref().unwrap_or(classes::DEFAULT_BUTTON),
                })
                .collect(),
        };
        renderer.render_dialog(&view, self.form.as_ref())
    }

    /// Handles `event`, driving `widget` when the dialog has to hide.
    pub fn handle(&mut self, event: DialogEvent, widget: &mut dyn ModalWidget) -> EventResult {
        let mut result = EventResult::default();
        match event {
            DialogEvent::ButtonClick(key) => {
                if !self.listening {
                    warn!("{}: ignoring click on '{key}' while hiding", self.id);
                    return result;
                }
                let Some(spec) = self.buttons.get(&key) else {
                    warn!("{}: no button '{key}'", self.id);
                    return result;
                };
                let callback = spec.callback.clone();
                result.stop_propagation = true;
                result.prevent_default = true;
                self.process_callback(Trigger::Button(key), callback, widget);
            }
            DialogEvent::CloseClick => {
                if !self.listening {
                    return result;
                }
                result.stop_propagation = true;
                result.prevent_default = true;
                let callback = self.on_escape.clone();
                self.process_callback(Trigger::Escape, callback, widget);
            }
            DialogEvent::BackdropClick { on_backdrop } => {
                if on_backdrop && !self.backdrop.is_static() {
                    self.escape(widget);
                }
            }
            DialogEvent::Key(key) => {
                if key.phase == KeyPhase::Up {
                    match key.key {
                        Key::Escape => self.escape(widget),
                        Key::Enter if self.submit_on_enter => self.click_primary(widget),
                        _ => {}
                    }
                }
                result.stop_propagation = !self.propagate_keys;
            }
            DialogEvent::Submit => {
                result.stop_propagation = true;
                result.prevent_default = true;
                if self.form.is_some() && self.buttons.contains_key(CONFIRM_BUTTON) {
                    self.handle(DialogEvent::ButtonClick(CONFIRM_BUTTON.to_string()), widget);
                } else {
                    self.click_primary(widget);
                }
            }
            DialogEvent::Lifecycle(event) => result.detach = self.lifecycle(event),
            DialogEvent::Field { index, event, key } => {
                let Some(field) = self.form.as_mut().and_then(|form| form.field_mut(index)) else {
                    warn!("{}: no field #{index}", self.id);
                    return result;
                };
                let reaction = field.dispatch(&event, key);
                if let Some(option) = reaction.focus {
                    self.focus = Some(Focus::Option { field: index, option });
                }
                result.prevent_default = reaction.prevent_default;
                let keyboard = KEY_EVENTS.contains(&event.as_str());
                result.stop_propagation =
                    reaction.prevent_default || (keyboard && !self.propagate_keys);
            }
        }
        result
    }

    /// Escape key and backdrop clicks only act when an escape callback exists.
    fn escape(&mut self, widget: &mut dyn ModalWidget) {
        if !self.listening {
            return;
        }
        if let Some(callback) = self.on_escape.clone() {
            self.process_callback(Trigger::Escape, Some(callback), widget);
        }
    }

    fn click_primary(&mut self, widget: &mut dyn ModalWidget) {
        let Some(key) = self.primary_button().map(str::to_string) else {
            return;
        };
        self.handle(DialogEvent::ButtonClick(key), widget);
    }

    /// Runs `callback`; the dialog hides unless it answers [`Outcome::KeepOpen`].
    fn process_callback(
        &mut self,
        trigger: Trigger,
        callback: Option<ButtonCallback>,
        widget: &mut dyn ModalWidget,
    ) {
        let outcome = match callback {
            Some(callback) => {
                let context = CallbackContext::new(self.id, trigger, self.form.as_ref());
                callback.call(&context)
            }
            None => Outcome::Dismiss,
        };

        if outcome == Outcome::Dismiss {
            debug!("{}: dismissed", self.id);
            widget.hide(self.id);
        }
    }

    /// Returns whether the dialog should now be detached.
    fn lifecycle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::Show => {}
            ModalEvent::Shown => {
                self.state = DialogState::Visible;
                self.focus = if self.focus_inputs {
                    Some(Focus::Field(0))
                } else {
                    self.primary_button().map(|key| Focus::Button(key.to_string()))
                };
            }
            ModalEvent::Hide => {
                self.state = DialogState::Hiding;
                self.listening = false;
            }
            ModalEvent::Hidden { target: EventTarget::Dialog } => {
                self.state = DialogState::Hidden;
                return true;
            }
            ModalEvent::Hidden { target: EventTarget::Nested } => {
                debug!("{}: ignoring hidden event of a nested element", self.id);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{sanitize, Defaults};
    use crate::form::{assemble, FieldSpec, FieldValue};
    use crate::shell::widget::HeadlessWidget;
    use std::cell::Cell;
    use std::rc::Rc;

    fn dialog(options: DialogOptions) -> Dialog {
        let options = sanitize(options, &Defaults::default()).unwrap();
        Dialog::new(DialogId(1), options, None)
    }

    fn shown(dialog: &Dialog, widget: &mut HeadlessWidget) {
        widget.attach("body", dialog.id(), "");
        widget.show(dialog.id());
        widget.poll_event();
        widget.poll_event();
    }

    fn counter(outcome: Outcome) -> (Rc<Cell<u32>>, ButtonCallback) {
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let callback = ButtonCallback::new(move |_| {
            sink.set(sink.get() + 1);
            outcome
        });
        (calls, callback)
    }

    #[test]
    fn keep_open_keeps_dialog_visible() {
        let (calls, callback) = counter(Outcome::KeepOpen);
        let mut dialog = dialog(DialogOptions::new("hi").with_button("stay", callback));
        let mut widget = HeadlessWidget::new();
        shown(&dialog, &mut widget);

        let result = dialog.handle(DialogEvent::ButtonClick("stay".into()), &mut widget);
        assert!(result.stop_propagation && result.prevent_default);
        assert_eq!(calls.get(), 1);
        assert!(widget.is_visible(DialogId(1)));
    }

    #[test]
    fn button_without_callback_dismisses() {
        let mut dialog = dialog(DialogOptions::new("hi").with_button("ok", ButtonSpec::new("OK")));
        let mut widget = HeadlessWidget::new();
        shown(&dialog, &mut widget);

        dialog.handle(DialogEvent::ButtonClick("ok".into()), &mut widget);
        assert!(!widget.is_visible(DialogId(1)));
    }

    #[test]
    fn escape_without_callback_does_nothing() {
        let mut dialog = dialog(DialogOptions::new("hi"));
        let mut widget = HeadlessWidget::new();
        shown(&dialog, &mut widget);

        let result = dialog.handle(DialogEvent::Key(KeyEvent::up(Key::Escape)), &mut widget);
        assert!(widget.is_visible(DialogId(1)));
        assert!(result.stop_propagation);
    }

    #[test]
    fn close_button_always_dismisses() {
        let mut dialog = dialog(DialogOptions::new("hi"));
        let mut widget = HeadlessWidget::new();
        shown(&dialog, &mut widget);

        dialog.handle(DialogEvent::CloseClick, &mut widget);
        assert!(!widget.is_visible(DialogId(1)));
    }

    #[test]
    fn backdrop_click_respects_static_backdrop() {
        let (calls, callback) = counter(Outcome::KeepOpen);
        let mut widget = HeadlessWidget::new();

        let mut fixed = dialog(DialogOptions::new("hi").with_on_escape(callback.clone()));
        fixed.handle(DialogEvent::BackdropClick { on_backdrop: true }, &mut widget);
        assert_eq!(calls.get(), 0);

        let options = DialogOptions {
            backdrop: Some(Backdrop::Enabled),
            ..DialogOptions::new("hi").with_on_escape(callback)
        };
        let mut clickable = dialog(options);
        clickable.handle(DialogEvent::BackdropClick { on_backdrop: false }, &mut widget);
        assert_eq!(calls.get(), 0);
        clickable.handle(DialogEvent::BackdropClick { on_backdrop: true }, &mut widget);
        assert_eq!(calls.get(), 1);
        assert_eq!(clickable.modal_config().backdrop, WidgetBackdrop::Static);
    }

    #[test]
    fn events_after_hide_are_ignored() {
        let (calls, callback) = counter(Outcome::KeepOpen);
        let mut dialog = dialog(
            DialogOptions::new("hi").with_button("a", callback.clone()).with_on_escape(callback),
        );
        let mut widget = HeadlessWidget::new();

        dialog.handle(DialogEvent::Lifecycle(ModalEvent::Hide), &mut widget);
        dialog.handle(DialogEvent::ButtonClick("a".into()), &mut widget);
        dialog.handle(DialogEvent::Key(KeyEvent::up(Key::Escape)), &mut widget);
        assert_eq!(calls.get(), 0);
        assert!(!dialog.is_listening());
    }

    #[test]
    fn only_own_hidden_event_detaches() {
        let mut dialog = dialog(DialogOptions::new("hi"));
        let mut widget = HeadlessWidget::new();

        let nested = ModalEvent::Hidden { target: EventTarget::Nested };
        assert!(!dialog.handle(DialogEvent::Lifecycle(nested), &mut widget).detach);
        let own = ModalEvent::Hidden { target: EventTarget::Dialog };
        assert!(dialog.handle(DialogEvent::Lifecycle(own), &mut widget).detach);
        assert_eq!(dialog.state(), DialogState::Hidden);
    }

    #[test]
    fn enter_clicks_primary_when_enabled() {
        let (calls, callback) = counter(Outcome::KeepOpen);
        let options = DialogOptions {
            submit_on_enter: Some(true),
            propagate_keys: Some(true),
            ..DialogOptions::new("hi").with_button("go", callback)
        };
        let mut dialog = dialog(options);
        let mut widget = HeadlessWidget::new();

        let down = KeyEvent { phase: KeyPhase::Down, key: Key::Enter };
        dialog.handle(DialogEvent::Key(down), &mut widget);
        assert_eq!(calls.get(), 0);
        let result = dialog.handle(DialogEvent::Key(KeyEvent::up(Key::Enter)), &mut widget);
        assert_eq!(calls.get(), 1);
        assert!(!result.stop_propagation);
    }

    #[test]
    fn shown_focuses_primary_button_or_first_input() {
        let mut widget = HeadlessWidget::new();
        let options = DialogOptions::new("hi")
            .with_button("a", ButtonSpec::default())
            .with_button("b", ButtonSpec::default());
        let mut plain = dialog(options);
        plain.handle(DialogEvent::Lifecycle(ModalEvent::Shown), &mut widget);
        assert_eq!(plain.focus(), Some(&Focus::Button("b".into())));

        let form = assemble(&[FieldSpec::default()], None, true).unwrap();
        let options = sanitize(DialogOptions::new(Content::Form), &Defaults::default()).unwrap();
        let mut with_form = Dialog::new(DialogId(2), options, Some(form));
        with_form.handle(DialogEvent::Lifecycle(ModalEvent::Shown), &mut widget);
        assert_eq!(with_form.focus(), Some(&Focus::Field(0)));
        assert_eq!(with_form.state(), DialogState::Visible);
    }

    #[test]
    fn field_events_reach_the_form() {
        let spec = FieldSpec::new("radio").with_options(["a", "b"]).with_number_shortcuts();
        let form = assemble(&[spec], None, false).unwrap();
        let options = sanitize(DialogOptions::new(Content::Form), &Defaults::default()).unwrap();
        let mut dialog = Dialog::new(DialogId(3), options, Some(form));
        let mut widget = HeadlessWidget::new();

        let event = DialogEvent::Field { index: 0, event: "keypress".into(), key: Some('2') };
        let result = dialog.handle(event, &mut widget);
        assert!(result.prevent_default);
        assert_eq!(dialog.focus(), Some(&Focus::Option { field: 0, option: 1 }));
        let value = dialog.form().unwrap().field(0).unwrap().value();
        assert_eq!(value, FieldValue::Text("b".into()));
    }

    #[test]
    fn field_key_events_follow_propagate_keys() {
        let spec = FieldSpec::new("radio").with_options(["a", "b"]).with_number_shortcuts();
        let keypress = || DialogEvent::Field { index: 0, event: "keypress".into(), key: Some('x') };
        let mut widget = HeadlessWidget::new();

        let form = assemble(&[spec.clone()], None, false).unwrap();
        let options = sanitize(DialogOptions::new(Content::Form), &Defaults::default()).unwrap();
        let mut contained = Dialog::new(DialogId(4), options, Some(form));
        let result = contained.handle(keypress(), &mut widget);
        assert!(result.stop_propagation);
        assert!(!result.prevent_default);
        let change = DialogEvent::Field { index: 0, event: "change".into(), key: None };
        assert!(!contained.handle(change, &mut widget).stop_propagation);

        let form = assemble(&[spec], None, false).unwrap();
        let options = DialogOptions { propagate_keys: Some(true), ..DialogOptions::new(Content::Form) };
        let options = sanitize(options, &Defaults::default()).unwrap();
        let mut bubbling = Dialog::new(DialogId(5), options, Some(form));
        assert!(!bubbling.handle(keypress(), &mut widget).stop_propagation);
    }

    #[test]
    fn submit_clicks_confirm_even_when_restyled() {
        let (calls, callback) = counter(Outcome::Dismiss);
        let form = assemble(&[FieldSpec::default()], None, true).unwrap();
        let options = DialogOptions::new(Content::Form)
            .with_button("cancel", ButtonSpec::default())
            .with_button("confirm", ButtonSpec::new("Go").with_class("btn-danger").with_callback(callback));
        let options = sanitize(options, &Defaults::default()).unwrap();
        let mut dialog = Dialog::new(DialogId(6), options, Some(form));
        let mut widget = HeadlessWidget::new();
        shown(&dialog, &mut widget);
        assert_eq!(dialog.primary_button(), None);

        dialog.handle(DialogEvent::Submit, &mut widget);
        assert_eq!(calls.get(), 1);
        assert!(!widget.is_visible(DialogId(6)));
    }

    #[test]
    fn markup_uses_classes_and_size() {
        let options = DialogOptions {
            class_name: Some("extra".into()),
            size: Some(crate::config::Size::Small),
            ..DialogOptions::new("hi").with_title("T")
        };
        let dialog = dialog(options);
        let markup = dialog.markup(&MarkupRenderer::new()).unwrap();
        assert!(markup.contains("class=\"bootbox modal fade extra\""));
        assert!(markup.contains("modal-dialog modal-sm"));
        assert!(markup.contains("id=\"bootbox-1\""));
    }
}
