/// Positional call shorthand.
pub mod args;

/// Dialog-options composition for the shorthand kinds.
pub mod builder;

/// Caller callbacks and replies.
pub mod callback;

/// Handles argument parsing.
pub mod cli;

/// Dialog options, defaults, sanitization and definition documents.
pub mod config;

pub mod constants;

/// The dialog box facade and its entry points.
pub mod dialogs;

/// Defines custom error types.
pub mod error;

/// Form fields and their assembly.
pub mod form;

/// Button label translations.
pub mod locale;

/// Terminal interaction with open dialogs.
pub mod prompt;

/// Markup rendering.
pub mod renderer;

/// Dialog state, event handling and the modal widget seam.
pub mod shell;

pub mod types;

pub use dialogs::DialogBox;
pub use error::{Error, Result};
