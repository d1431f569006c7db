//! Constants used throughout the dialogbox crate

/// Locale used when no other locale is configured or a code is unknown
pub const DEFAULT_LOCALE: &str = "en";

/// Container the dialog markup is attached to by default
pub const DEFAULT_CONTAINER: &str = "body";

/// Prefix of generated form names
pub const FORM_NAME_PREFIX: &str = "form_";

/// Number of random bytes in a generated form name (hex encoded)
pub const FORM_NAME_BYTES: usize = 2;

/// Input type used by a select's custom input when none is given
pub const DEFAULT_CUSTOM_INPUT_TYPE: &str = "textarea";

/// Input type of a field that does not declare one
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Button activated when a form is submitted
pub const CONFIRM_BUTTON: &str = "confirm";

/// Field events that count as keyboard events
pub const KEY_EVENTS: [&str; 3] = ["keydown", "keypress", "keyup"];

/// Value of `--answers` that reads the answers from stdin
pub const STDIN_INDICATOR: &str = "-";

/// Markup classes
pub mod classes {
    pub const DIALOG: &str = "bootbox modal";
    pub const KIND_PREFIX: &str = "bootbox-";
    pub const PRIMARY_BUTTON: &str = "btn-primary";
    pub const DEFAULT_BUTTON: &str = "btn-default";
    pub const FADE: &str = "fade";
    pub const LARGE: &str = "modal-lg";
    pub const SMALL: &str = "modal-sm";
}

/// Labels of the terminal driver
pub mod terminal {
    pub const ACTION_PROMPT: &str = "Choose an action";
    pub const FIELD_PROMPT: &str = "Value";
    pub const CUSTOM_VALUE_SUFFIX: &str = "(custom value)";
    pub const CLOSE_ACTION: &str = "Close";
    pub const MAX_ROUNDS: usize = 16;
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
