//! Terminal interaction with open dialogs
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Scripted answers for non-interactive runs
//! - `handler`: The driver filling forms and pressing buttons

use crate::{dialogs::DialogBox, error::Result, prompt::dialoguer::DialoguerPrompter};
use crate::{shell::ModalWidget, types::DialogId};

pub mod automatic_impl;
pub mod dialoguer;
pub mod handler;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use handler::DialogDriver;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Drives the dialog interactively until it closes.
pub fn drive_interactive<W: ModalWidget>(dialogs: &mut DialogBox<W>, id: DialogId) -> Result<()> {
    DialogDriver::new(get_prompt_provider()).drive(dialogs, id)
}
