//! Entry points: the dialog box facade
//!
//! [`DialogBox`] owns the defaults, the locale table and every open dialog.
//! Each shorthand kind maps its arguments, composes its options, then
//! displays the dialog through the installed [`ModalWidget`].

use crate::args::{map_arguments, IntoArguments, Property};
use crate::builder::{
    alert_options, confirm_options, form_options, merge_dialog_options, prompt_options,
};
use crate::config::{sanitize, Defaults, DialogOptions};
use crate::error::{Error, Result};
use crate::form::{assemble, FieldSpec, Form};
use crate::locale::LocaleTable;
use crate::renderer::MarkupRenderer;
use crate::shell::{Dialog, DialogEvent, EventResult, HeadlessWidget, ModalWidget};
use crate::types::{DialogId, DialogKind};
use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;

pub struct DialogBox<W: ModalWidget = HeadlessWidget> {
    defaults: Defaults,
    locales: LocaleTable,
    widget: Option<W>,
    renderer: MarkupRenderer,
    dialogs: IndexMap<DialogId, Dialog>,
    next_id: u64,
}

impl<W: ModalWidget> Default for DialogBox<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ModalWidget> DialogBox<W> {
    /// A dialog box without a widget; dialogs cannot be displayed until one is installed.
    pub fn new() -> Self {
        Self {
            defaults: Defaults::default(),
            locales: LocaleTable::builtin(),
            widget: None,
            renderer: MarkupRenderer::new(),
            dialogs: IndexMap::new(),
            next_id: 1,
        }
    }

    pub fn with_widget(widget: W) -> Self {
        Self { widget: Some(widget), ..Self::new() }
    }

    pub fn install_widget(&mut self, widget: W) {
        self.widget = Some(widget);
    }

    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut W> {
        self.widget.as_mut()
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Sets a single default, e.g. `set_default("backdrop", json!(false))`.
    pub fn set_default(&mut self, key: &str, value: Value) -> Result<()> {
        self.defaults.set(key, value)
    }

    /// Sets every default named in `values`.
    pub fn set_defaults(&mut self, values: Value) -> Result<()> {
        self.defaults.merge(values)
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Registers a locale from its `OK`, `CANCEL` and `CONFIRM` labels.
    pub fn add_locale<I, K, V>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.locales.add(name, values)
    }

    pub fn remove_locale(&mut self, name: &str) {
        self.locales.remove(name);
    }

    /// Makes `name` the default locale.
    pub fn set_locale(&mut self, name: &str) -> Result<()> {
        self.set_default("locale", Value::from(name))
    }

    /// An alert with a single `ok` button.
    pub fn alert(&mut self, args: impl IntoArguments) -> Result<DialogId> {
        let options = self.merge(DialogKind::Alert, args)?;
        self.open(alert_options(options), None)
    }

    /// A yes/no question answered through the required callback.
    pub fn confirm(&mut self, args: impl IntoArguments) -> Result<DialogId> {
        let options = confirm_options(self.merge(DialogKind::Confirm, args)?)?;
        self.open(options, None)
    }

    /// A single-field form answering with the bare field value.
    pub fn prompt(&mut self, args: impl IntoArguments) -> Result<DialogId> {
        let options = prompt_options(self.merge(DialogKind::Prompt, args)?)?;
        self.open_form(options, true)
    }

    /// A form answering with the values of every field.
    pub fn form(&mut self, args: impl IntoArguments) -> Result<DialogId> {
        let options = form_options(self.merge(DialogKind::Form, args)?, DialogKind::Form)?;
        self.open_form(options, false)
    }

    /// A dialog described entirely by the caller.
    pub fn dialog(&mut self, options: DialogOptions) -> Result<DialogId> {
        self.open(options, None)
    }

    /// Opens a dialog of any kind, as described by a definition document.
    pub fn open_kind(&mut self, kind: DialogKind, args: impl IntoArguments) -> Result<DialogId> {
        match kind {
            DialogKind::Alert => self.alert(args),
            DialogKind::Confirm => self.confirm(args),
            DialogKind::Prompt => self.prompt(args),
            DialogKind::Form => self.form(args),
            DialogKind::Dialog => {
                let options = map_arguments(
                    args.into_arguments(),
                    [Property::Message, Property::Callback],
                )?;
                self.dialog(options)
            }
        }
    }

    pub fn get(&self, id: DialogId) -> Option<&Dialog> {
        self.dialogs.get(&id)
    }

    pub fn get_mut(&mut self, id: DialogId) -> Option<&mut Dialog> {
        self.dialogs.get_mut(&id)
    }

    /// Whether the dialog is still attached.
    pub fn is_open(&self, id: DialogId) -> bool {
        self.dialogs.contains_key(&id)
    }

    /// Open dialogs in creation order.
    pub fn open_dialogs(&self) -> impl Iterator<Item = DialogId> + '_ {
        self.dialogs.keys().copied()
    }

    /// Markup of an open dialog in its current state.
    pub fn markup(&self, id: DialogId) -> Result<String> {
        let dialog = self.dialogs.get(&id).ok_or(Error::UnknownDialogError(id))?;
        dialog.markup(&self.renderer)
    }

    /// Delivers an event to an open dialog.
    pub fn dispatch(&mut self, id: DialogId, event: DialogEvent) -> Result<EventResult> {
        let widget = self.widget.as_mut().ok_or(Error::MissingWidgetDependencyError)?;
        let dialog = self.dialogs.get_mut(&id).ok_or(Error::UnknownDialogError(id))?;

        trace!("{id}: {event:?}");
        let result = dialog.handle(event, widget);
        if result.detach {
            widget.detach(id);
            self.dialogs.shift_remove(&id);
        } else {
            widget.refresh(id, &dialog.markup(&self.renderer)?);
        }

        self.pump();
        Ok(result)
    }

    /// Hides every open dialog.
    pub fn hide_all(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            for id in self.dialogs.keys() {
                widget.hide(*id);
            }
        }
        self.pump();
    }

    fn merge(&self, kind: DialogKind, args: impl IntoArguments) -> Result<DialogOptions> {
        merge_dialog_options(kind, args.into_arguments(), &self.locales, &self.defaults.locale)
    }

    /// Assembles the form, then shows the dialog once focus handling is in place.
    fn open_form(&mut self, mut options: DialogOptions, scalar: bool) -> Result<DialogId> {
        let should_show = options.show.unwrap_or(self.defaults.show);
        let inputs = options.inputs.take().unwrap_or_else(|| vec![FieldSpec::default()]);
        let form = assemble(&inputs, options.name.take(), scalar && inputs.len() == 1)?;

        options.show = Some(false);
        let id = self.open(options, Some(form))?;
        if should_show {
            if let Some(widget) = self.widget.as_mut() {
                widget.show(id);
            }
            self.pump();
        }
        Ok(id)
    }

    fn open(&mut self, options: DialogOptions, form: Option<Form>) -> Result<DialogId> {
        let options = sanitize(options, &self.defaults)?;
        let widget = self.widget.as_mut().ok_or(Error::MissingWidgetDependencyError)?;

        let id = DialogId(self.next_id);
        let show = options.show.unwrap_or(true);
        let dialog = Dialog::new(id, options, form);
        let markup = dialog.markup(&self.renderer)?;
        self.next_id += 1;

        widget.attach(dialog.container(), id, &markup);
        widget.configure(id, &dialog.modal_config());
        self.dialogs.insert(id, dialog);
        debug!("{id} created");
        if show {
            widget.show(id);
        }

        self.pump();
        Ok(id)
    }

    /// Feeds pending widget events to their dialogs, removing the hidden ones.
    fn pump(&mut self) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        while let Some((id, event)) = widget.poll_event() {
            let Some(dialog) = self.dialogs.get_mut(&id) else {
                trace!("{id}: dropping {event:?} for a removed dialog");
                continue;
            };
            if dialog.handle(DialogEvent::Lifecycle(event), widget).detach {
                widget.detach(id);
                self.dialogs.shift_remove(&id);
                debug!("{id} removed");
            }
        }
    }
}
