//! Validation and defaulting of dialog options

use crate::config::defaults::Defaults;
use crate::config::options::{ButtonInput, ButtonSpec, DialogOptions};
use crate::constants::classes;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Turns caller options into canonical options.
///
/// The message is required. Defaults fill unset values, every button becomes a
/// full spec with a label (its key when absent) and a class. The last button of
/// a set of at most two is the primary one. Sanitizing canonical options again
/// returns them unchanged.
pub fn sanitize(options: DialogOptions, defaults: &Defaults) -> Result<DialogOptions> {
    if options.message.as_ref().map_or(true, |message| message.is_empty()) {
        return Err(Error::MissingMessageError);
    }

    let mut options = defaults.apply(options);
    let buttons = options.buttons.take().unwrap_or_default();
    let total = buttons.len();

    let mut sanitized = IndexMap::with_capacity(total);
    for (index, (key, button)) in buttons.into_iter().enumerate() {
        let mut spec = match button {
            ButtonInput::Full(spec) => spec,
            ButtonInput::Callback(callback) => {
                ButtonSpec { callback: Some(callback), ..Default::default() }
            }
            ButtonInput::Invalid(_) => return Err(Error::InvalidButtonError { key }),
        };

        if spec.label.as_deref().map_or(true, str::is_empty) {
            spec.label = Some(key.clone());
        }
        if spec.class_name.as_deref().map_or(true, str::is_empty) {
            let primary = total <= 2 && index == total - 1;
            let class_name =
                if primary { classes::PRIMARY_BUTTON } else { classes::DEFAULT_BUTTON };
            spec.class_name = Some(class_name.to_string());
        }

        sanitized.insert(key, ButtonInput::Full(spec));
    }

    options.buttons = Some(sanitized);
    Ok(options)
}
