//! Dialog configuration
//!
//! This module contains the configuration system components:
//! - `types`: Basic types and enums used by dialog options
//! - `options`: Caller-facing dialog and button options
//! - `defaults`: Process-wide defaults applied to every dialog
//! - `sanitize`: Validation and defaulting of options
//! - `loader`: Dialog definitions read from JSON or YAML files

pub mod defaults;
pub mod loader;
pub mod options;
pub mod sanitize;
pub mod types;


// Re-export commonly used types for convenience
pub use defaults::Defaults;
pub use loader::DialogDocument;
pub use options::{ButtonInput, ButtonSpec, DialogOptions};
pub use sanitize::sanitize;
pub use types::{Backdrop, Content, Size};
