//! Assembly of rendered fields into a named form

use crate::config::Content;
use crate::constants::{FORM_NAME_BYTES, FORM_NAME_PREFIX};
use crate::error::Result;
use crate::form::field::{render_field, RenderedField};
use crate::form::spec::FieldSpec;
use crate::form::types::FormResult;
use log::debug;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A rendered field with its surrounding static content.
#[derive(Debug)]
pub struct FormEntry {
    pub title: Option<String>,
    pub message_before: Option<Content>,
    pub message_after: Option<Content>,
    pub field: RenderedField,
}

/// The form of a prompt or form dialog.
#[derive(Debug)]
pub struct Form {
    name: String,
    entries: Vec<FormEntry>,
    scalar: bool,
}

impl Form {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn fields(&self) -> impl Iterator<Item = &RenderedField> {
        self.entries.iter().map(|entry| &entry.field)
    }

    pub fn field(&self, index: usize) -> Option<&RenderedField> {
        self.entries.get(index).map(|entry| &entry.field)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut RenderedField> {
        self.entries.get_mut(index).map(|entry| &mut entry.field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the form answers with a single value.
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    /// Field titles are shown as labels outside the prompt shorthand.
    pub fn show_labels(&self) -> bool {
        !self.scalar
    }

    /// Current values of every field, in declaration order.
    pub fn result(&self) -> FormResult {
        let mut values: Vec<_> = self.fields().map(RenderedField::value).collect();
        match (self.scalar, values.len()) {
            (true, 1) => FormResult::Single(values.remove(0)),
            _ => FormResult::Many(values),
        }
    }
}

/// Renders `inputs` in order into a form.
///
/// `scalar` makes a single-field form answer with the bare field value.
pub fn assemble(inputs: &[FieldSpec], name: Option<String>, scalar: bool) -> Result<Form> {
    let name = name.unwrap_or_else(generate_form_name);

    let entries = inputs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            Ok(FormEntry {
                title: spec.title.clone(),
                message_before: spec.message_before.clone(),
                message_after: spec.message_after.clone(),
                field: render_field(spec, index, &name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("assembled form {name} with {} field(s)", entries.len());
    Ok(Form { name, entries, scalar })
}

/// A fresh `form_<hex>` name.
pub fn generate_form_name() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let mut hasher = Sha256::new();
    hasher.update(COUNTER.fetch_add(1, Ordering::Relaxed).to_le_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = hasher.finalize();

    format!("{FORM_NAME_PREFIX}{}", hex::encode(&digest[..FORM_NAME_BYTES]))
}
