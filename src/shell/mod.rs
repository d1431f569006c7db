//! The dialog shell: dialog state, event handling and the widget seam

pub mod dialog;
pub mod widget;

pub use dialog::{
    Dialog, DialogEvent, DialogState, EventResult, Focus, Key, KeyEvent, KeyPhase,
};
pub use widget::{
    EventTarget, HeadlessWidget, ModalConfig, ModalEvent, ModalWidget, WidgetBackdrop,
};
