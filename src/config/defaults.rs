//! Process-wide dialog defaults

use crate::config::options::DialogOptions;
use crate::config::types::{Backdrop, Size};
use crate::constants::{DEFAULT_CONTAINER, DEFAULT_LOCALE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values applied to every dialog that does not set them itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Defaults {
    pub locale: String,
    pub backdrop: Backdrop,
    pub animate: bool,
    pub class_name: Option<String>,
    pub close_button: bool,
    pub show: bool,
    pub container: String,
    pub size: Option<Size>,
    pub submit_on_enter: bool,
    pub propagate_keys: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            backdrop: Backdrop::Static,
            animate: true,
            class_name: None,
            close_button: true,
            show: true,
            container: DEFAULT_CONTAINER.to_string(),
            size: None,
            submit_on_enter: false,
            propagate_keys: false,
        }
    }
}

impl Defaults {
    /// Updates a single default, e.g. `set("backdrop", json!(false))`.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut values = serde_json::Map::new();
        values.insert(key.to_string(), value);
        self.merge(Value::Object(values))
    }

    /// Updates every default named in `values`, which must be an object.
    ///
    /// Unknown keys and ill-typed values fail and leave the defaults untouched.
    pub fn merge(&mut self, values: Value) -> Result<()> {
        let Value::Object(values) = values else {
            return Err(Error::MissingOptionsError);
        };

        let mut current = serde_json::to_value(&*self)?;
        if let Value::Object(current) = &mut current {
            current.extend(values);
        }

        *self = serde_json::from_value(current)
            .map_err(|e| Error::InvalidDefaultError(e.to_string()))?;
        log::debug!("Dialog defaults updated: {self:?}");
        Ok(())
    }

    /// Fills every unset option backed by a default. Caller values win.
    pub fn apply(&self, mut options: DialogOptions) -> DialogOptions {
        options.locale.get_or_insert_with(|| self.locale.clone());
        options.backdrop.get_or_insert(self.backdrop);
        options.animate.get_or_insert(self.animate);
        if options.class_name.is_none() {
            options.class_name = self.class_name.clone();
        }
        options.close_button.get_or_insert(self.close_button);
        options.show.get_or_insert(self.show);
        options.container.get_or_insert_with(|| self.container.clone());
        if options.size.is_none() {
            options.size = self.size;
        }
        options.submit_on_enter.get_or_insert(self.submit_on_enter);
        options.propagate_keys.get_or_insert(self.propagate_keys);
        options
    }
}
