//! Common types used across the dialogbox crate.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a constructed dialog, also used as its markup id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DialogId(pub u64);

impl Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bootbox-{}", self.0)
    }
}

/// Shorthand dialog kinds. `Dialog` is the generic, fully caller-described kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
    Form,
    Dialog,
}

impl DialogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Alert => "alert",
            DialogKind::Confirm => "confirm",
            DialogKind::Prompt => "prompt",
            DialogKind::Form => "form",
            DialogKind::Dialog => "dialog",
        }
    }
}

impl Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a callback wants done with its dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Start hiding and then remove the dialog.
    #[default]
    Dismiss,
    /// Keep the dialog on screen.
    KeepOpen,
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Dismiss
    }
}
