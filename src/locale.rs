//! Built-in and caller-registered button label translations.

use crate::constants::DEFAULT_LOCALE;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in locales as (code, OK, CANCEL, CONFIRM).
const BUILTIN_LOCALES: &[(&str, &str, &str, &str)] = &[
    ("ar", "موافق", "الغاء", "تأكيد"),
    ("bg_BG", "Ок", "Отказ", "Потвърждавам"),
    ("br", "OK", "Cancelar", "Sim"),
    ("cs", "OK", "Zrušit", "Potvrdit"),
    ("da", "OK", "Annuller", "Accepter"),
    ("de", "OK", "Abbrechen", "Akzeptieren"),
    ("el", "Εντάξει", "Ακύρωση", "Επιβεβαίωση"),
    ("en", "OK", "Cancel", "OK"),
    ("es", "OK", "Cancelar", "Aceptar"),
    ("eu", "OK", "Ezeztatu", "Onartu"),
    ("et", "OK", "Katkesta", "OK"),
    ("fa", "قبول", "لغو", "تایید"),
    ("fi", "OK", "Peruuta", "OK"),
    ("fr", "OK", "Annuler", "Confirmer"),
    ("he", "אישור", "ביטול", "אישור"),
    ("hu", "OK", "Mégsem", "Megerősít"),
    ("hr", "OK", "Odustani", "Potvrdi"),
    ("id", "OK", "Batal", "OK"),
    ("it", "OK", "Annulla", "Conferma"),
    ("ja", "OK", "キャンセル", "確認"),
    ("lt", "Gerai", "Atšaukti", "Patvirtinti"),
    ("lv", "Labi", "Atcelt", "Apstiprināt"),
    ("nl", "OK", "Annuleren", "Accepteren"),
    ("no", "OK", "Avbryt", "OK"),
    ("pl", "OK", "Anuluj", "Potwierdź"),
    ("pt", "OK", "Cancelar", "Confirmar"),
    ("ru", "OK", "Отмена", "Применить"),
    ("sk", "OK", "Zrušiť", "Potvrdiť"),
    ("sl", "OK", "Prekliči", "Potrdi"),
    ("sq", "OK", "Anulo", "Prano"),
    ("sv", "OK", "Avbryt", "OK"),
    ("th", "ตกลง", "ยกเลิก", "ยืนยัน"),
    ("tr", "Tamam", "İptal", "Onayla"),
    ("zh_CN", "OK", "取消", "确认"),
    ("zh_TW", "OK", "取消", "確認"),
];

/// One of the three translatable button labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Ok,
    Cancel,
    Confirm,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Ok, Label::Cancel, Label::Confirm];

    /// Key of the button this label belongs to.
    pub fn button_key(&self) -> &'static str {
        match self {
            Label::Ok => "ok",
            Label::Cancel => "cancel",
            Label::Confirm => "confirm",
        }
    }

    /// Name of the translation entry.
    pub fn code(&self) -> &'static str {
        match self {
            Label::Ok => "OK",
            Label::Cancel => "CANCEL",
            Label::Confirm => "CONFIRM",
        }
    }
}

/// Translations for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Locale {
    pub ok: String,
    pub cancel: String,
    pub confirm: String,
}

impl Locale {
    pub fn get(&self, label: Label) -> &str {
        match label {
            Label::Ok => &self.ok,
            Label::Cancel => &self.cancel,
            Label::Confirm => &self.confirm,
        }
    }
}

/// Mapping from locale code to its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locales: IndexMap<String, Locale>,
}

impl LocaleTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self { locales: IndexMap::new() }
    }

    /// Table holding every built-in locale.
    pub fn builtin() -> Self {
        let locales = BUILTIN_LOCALES
            .iter()
            .map(|(code, ok, cancel, confirm)| {
                let locale = Locale {
                    ok: ok.to_string(),
                    cancel: cancel.to_string(),
                    confirm: confirm.to_string(),
                };
                (code.to_string(), locale)
            })
            .collect();
        Self { locales }
    }

    /// Registers (or replaces) a locale from its `OK`, `CANCEL` and `CONFIRM` entries.
    ///
    /// Fails with [`Error::IncompleteLocaleError`] when any of the three is
    /// missing or empty, in which case the table is left untouched.
    pub fn add<I, K, V>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values: IndexMap<String, String> =
            values.into_iter().map(|(k, v)| (k.as_ref().to_string(), v.into())).collect();

        let lookup = |label: Label| -> Result<String> {
            values
                .get(label.code())
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or(Error::IncompleteLocaleError { key: label.code() })
        };
        let locale = Locale {
            ok: lookup(Label::Ok)?,
            cancel: lookup(Label::Cancel)?,
            confirm: lookup(Label::Confirm)?,
        };

        log::debug!("Registering locale '{name}'");
        self.locales.insert(name.to_string(), locale);
        Ok(())
    }

    /// Removes a locale. Removing an unknown locale is not an error.
    pub fn remove(&mut self, name: &str) {
        self.locales.shift_remove(name);
    }

    pub fn get(&self, name: &str) -> Option<&Locale> {
        self.locales.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Locale)> {
        self.locales.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Translates a label, falling back to the default locale for unknown codes.
    pub fn translate(&self, name: &str, label: Label) -> String {
        self.get(name)
            .or_else(|| self.get(DEFAULT_LOCALE))
            .map(|locale| locale.get(label).to_string())
            .unwrap_or_else(|| label.code().to_string())
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
