//! Basic types and enums for dialog options

use crate::constants::classes;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Width of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Default,
    Small,
    Large,
}

impl Size {
    /// Extra class of the `modal-dialog` element.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Size::Default => None,
            Size::Small => Some(classes::SMALL),
            Size::Large => Some(classes::LARGE),
        }
    }
}

/// Backdrop behavior: `"static"`, `true` or `false` in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BackdropRepr", into = "BackdropRepr")]
pub enum Backdrop {
    /// Backdrop shown, clicking it does nothing.
    #[default]
    Static,
    /// Backdrop shown, clicking it takes the escape path.
    Enabled,
    /// No backdrop.
    Disabled,
}

impl Backdrop {
    pub fn is_static(&self) -> bool {
        matches!(self, Backdrop::Static)
    }

    /// Whether a backdrop is displayed at all.
    pub fn is_shown(&self) -> bool {
        !matches!(self, Backdrop::Disabled)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BackdropRepr {
    Flag(bool),
    Mode(String),
}

impl TryFrom<BackdropRepr> for Backdrop {
    type Error = String;

    fn try_from(repr: BackdropRepr) -> Result<Self, Self::Error> {
        match repr {
            BackdropRepr::Flag(true) => Ok(Backdrop::Enabled),
            BackdropRepr::Flag(false) => Ok(Backdrop::Disabled),
            BackdropRepr::Mode(mode) if mode == "static" => Ok(Backdrop::Static),
            BackdropRepr::Mode(mode) => Err(format!(
                "unknown backdrop '{mode}', expected \"static\", true or false"
            )),
        }
    }
}

impl From<Backdrop> for BackdropRepr {
    fn from(backdrop: Backdrop) -> Self {
        match backdrop {
            Backdrop::Static => BackdropRepr::Mode("static".to_string()),
            Backdrop::Enabled => BackdropRepr::Flag(true),
            Backdrop::Disabled => BackdropRepr::Flag(false),
        }
    }
}

/// Renderable content: escaped text or trusted markup.
///
/// In documents a plain string is text and `{html: "..."}` is markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Html {
        html: String,
    },
    /// Placeholder for the generated form of prompt and form dialogs.
    #[serde(skip)]
    Form,
}

impl Content {
    pub fn html(markup: impl Into<String>) -> Self {
        Content::Html { html: markup.into() }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Html { html } => html.is_empty(),
            Content::Form => false,
        }
    }

    /// Content with markup tags stripped.
    pub fn plain_text(&self) -> String {
        static TAGS: OnceLock<Option<Regex>> = OnceLock::new();
        match self {
            Content::Text(text) => text.clone(),
            Content::Html { html } => match TAGS.get_or_init(|| Regex::new(r"<[^>]*>").ok()) {
                Some(tags) => tags.replace_all(html, "").trim().to_string(),
                None => html.clone(),
            },
            Content::Form => String::new(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}
