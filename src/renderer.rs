//! Markup of dialogs and their forms
//!
//! Templates are rendered with HTML auto-escaping: text content is escaped,
//! `Content::Html` is inserted verbatim.

mod filters;
mod templates;

use crate::config::Content;
use crate::error::Result;
use crate::form::{Control, Form, ValidationSlot};
use filters::{attrs_filter, content_filter};
use minijinja::{context, Environment, Value};
use serde::Serialize;

/// A footer button as rendered.
#[derive(Debug, Clone, Serialize)]
pub struct ButtonView<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub class_name: &'a str,
}

/// Everything the dialog template shows.
#[derive(Debug, Clone, Serialize)]
pub struct DialogView<'a> {
    pub id: String,
    /// Classes of the outer element, space separated
    pub classes: String,
    /// Size class of the inner element
    pub size: Option<&'static str>,
    pub title: Option<&'a str>,
    pub close_button: bool,
    /// Body text; ignored when a form is rendered instead
    pub message: Option<&'a Content>,
    pub buttons: Vec<ButtonView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    title: Option<&'a str>,
    before: Option<&'a Content>,
    after: Option<&'a Content>,
    control: &'a Control,
    validation: Option<&'a ValidationSlot>,
}

#[derive(Serialize)]
struct FormView<'a> {
    name: &'a str,
    show_labels: bool,
    entries: Vec<EntryView<'a>>,
}

impl<'a> FormView<'a> {
    fn new(form: &'a Form) -> Self {
        let entries = form
            .entries()
            .iter()
            .map(|entry| EntryView {
                title: entry.title.as_deref(),
                before: entry.message_before.as_ref().filter(|c| !matches!(c, Content::Form)),
                after: entry.message_after.as_ref().filter(|c| !matches!(c, Content::Form)),
                control: entry.field.control(),
                validation: entry.field.validation(),
            })
            .collect();
        Self { name: form.name(), show_labels: form.show_labels(), entries }
    }
}

/// MiniJinja-based renderer of dialog markup.
pub struct MarkupRenderer {
    env: Environment<'static>,
}

impl MarkupRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("content", content_filter);
        env.add_filter("attrs", attrs_filter);
        Self { env }
    }

    fn render_internal(
        &self,
        name: &'static str,
        template: &'static str,
        ctx: Value,
    ) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template(name, template)?;
        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(ctx)?)
    }

    /// Markup of a form in its current state.
    pub fn render_form(&self, form: &Form) -> Result<String> {
        let ctx = context! { form => FormView::new(form) };
        self.render_internal(templates::FORM_NAME, templates::FORM_TEMPLATE, ctx)
    }

    /// Markup of a whole dialog, with `form` as its body when given.
    pub fn render_dialog(&self, dialog: &DialogView<'_>, form: Option<&Form>) -> Result<String> {
        let form = match form {
            Some(form) => Value::from_safe_string(self.render_form(form)?),
            None => Value::from(()),
        };
        let message = dialog.message.filter(|m| !matches!(m, Content::Form));
        let dialog = DialogView { message, ..dialog.clone() };
        let ctx = context! { dialog => dialog, form => form };
        self.render_internal(templates::DIALOG_NAME, templates::DIALOG_TEMPLATE, ctx)
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}
