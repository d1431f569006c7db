use crate::types::DialogId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Prompt failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Please supply an object of options.")]
    MissingOptionsError,

    #[error("\"message\" option must not be null or an empty string.")]
    MissingMessageError,

    #[error("Button with key '{key}' must be an object.")]
    InvalidButtonError { key: String },

    #[error("Button key '{key}' is not allowed (options are {allowed}).")]
    UnknownButtonKeyError { key: String, allowed: String },

    #[error("{kind} requires a callback.")]
    MissingCallbackError { kind: &'static str },

    #[error("{kind} requires a title.")]
    MissingTitleError { kind: &'static str },

    #[error("Invalid input type: '{input_type}'.")]
    UnknownInputTypeError { input_type: String },

    #[error("Input type '{input_type}' requires a non-empty list of input options.")]
    MissingInputOptionsError { input_type: String },

    /// An input option without a value or text.
    #[error("Each input option needs both a value and a text property.")]
    MissingOptionFieldsError,

    #[error("Please supply a translation for '{key}'.")]
    IncompleteLocaleError { key: &'static str },

    #[error("Argument length must be 1 or 2, got {count}.")]
    InvalidArgumentCountError { count: usize },

    #[error("Invalid argument: {0}.")]
    InvalidArgumentError(String),

    /// Raised when a dialog is requested while no modal widget is installed.
    #[error("A modal widget is required to display dialogs.")]
    MissingWidgetDependencyError,

    #[error("Invalid default value: {0}.")]
    InvalidDefaultError(String),

    #[error("No open dialog with id '{0}'.")]
    UnknownDialogError(DialogId),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
