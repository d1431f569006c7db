//! Form fields of prompt and form dialogs
//!
//! Field specs are resolved and rendered by [`field`], then assembled in
//! declaration order by [`assembler`].

pub mod assembler;
pub mod control;
pub mod field;
pub mod spec;
pub mod types;

pub use assembler::{assemble, Form, FormEntry};
pub use control::{Control, ValidationSlot};
pub use field::{render_field, FieldReaction, RenderedField};
pub use spec::{FieldEvent, FieldSpec};
pub use types::{CustomInput, FieldValue, FormResult, InputOption, InputType};
