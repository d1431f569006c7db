//! The modal widget dialogs are displayed through

use crate::types::DialogId;
use indexmap::IndexMap;
use log::trace;
use serde::Serialize;
use std::collections::VecDeque;

/// Backdrop mode handed to the widget.
///
/// A clickable backdrop is never delegated to the widget; dialogs route
/// backdrop clicks through their escape path themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetBackdrop {
    Static,
    Disabled,
}

/// Widget configuration of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModalConfig {
    pub backdrop: WidgetBackdrop,
    /// Always false: escape handling belongs to the dialog
    pub keyboard: bool,
    /// Always false: dialogs are shown explicitly
    pub show: bool,
}

/// Element a lifecycle event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Dialog,
    /// A nested element, such as an inner modal
    Nested,
}

/// Lifecycle events emitted by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Show,
    Shown,
    Hide,
    Hidden { target: EventTarget },
}

/// Show/hide primitives of an external modal widget.
pub trait ModalWidget {
    /// Appends the dialog markup to `container`.
    fn attach(&mut self, container: &str, id: DialogId, markup: &str);

    fn configure(&mut self, id: DialogId, config: &ModalConfig);

    fn show(&mut self, id: DialogId);

    fn hide(&mut self, id: DialogId);

    /// Removes the dialog from its container.
    fn detach(&mut self, id: DialogId);

    /// Replaces the markup of an attached dialog.
    fn refresh(&mut self, _id: DialogId, _markup: &str) {}

    /// Next pending lifecycle event.
    fn poll_event(&mut self) -> Option<(DialogId, ModalEvent)>;
}

/// In-memory widget.
///
/// Showing and hiding complete immediately: each queues both the start and the
/// end event of the transition.
#[derive(Debug, Default)]
pub struct HeadlessWidget {
    containers: IndexMap<DialogId, String>,
    markup: IndexMap<DialogId, String>,
    configs: IndexMap<DialogId, ModalConfig>,
    visible: Vec<DialogId>,
    queue: VecDeque<(DialogId, ModalEvent)>,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self, id: DialogId) -> Option<&ModalConfig> {
        self.configs.get(&id)
    }

    pub fn markup(&self, id: DialogId) -> Option<&str> {
        self.markup.get(&id).map(String::as_str)
    }

    pub fn container(&self, id: DialogId) -> Option<&str> {
        self.containers.get(&id).map(String::as_str)
    }

    pub fn is_visible(&self, id: DialogId) -> bool {
        self.visible.contains(&id)
    }

    /// Dialogs currently attached, in attach order.
    pub fn attached(&self) -> impl Iterator<Item = DialogId> + '_ {
        self.markup.keys().copied()
    }

    /// Queues an event, as a nested element bubbling up would.
    pub fn emit(&mut self, id: DialogId, event: ModalEvent) {
        self.queue.push_back((id, event));
    }
}

impl ModalWidget for HeadlessWidget {
    fn attach(&mut self, container: &str, id: DialogId, markup: &str) {
        trace!("attaching {id} to {container}");
        self.containers.insert(id, container.to_string());
        self.markup.insert(id, markup.to_string());
    }

    fn configure(&mut self, id: DialogId, config: &ModalConfig) {
        self.configs.insert(id, *config);
    }

    fn show(&mut self, id: DialogId) {
        if !self.markup.contains_key(&id) || self.is_visible(id) {
            return;
        }
        self.visible.push(id);
        self.emit(id, ModalEvent::Show);
        self.emit(id, ModalEvent::Shown);
    }

    fn hide(&mut self, id: DialogId) {
        if !self.is_visible(id) {
            return;
        }
        self.visible.retain(|visible| *visible != id);
        self.emit(id, ModalEvent::Hide);
        self.emit(id, ModalEvent::Hidden { target: EventTarget::Dialog });
    }

    fn detach(&mut self, id: DialogId) {
        trace!("detaching {id}");
        self.containers.shift_remove(&id);
        self.markup.shift_remove(&id);
        self.configs.shift_remove(&id);
        self.visible.retain(|visible| *visible != id);
    }

    fn refresh(&mut self, id: DialogId, markup: &str) {
        if let Some(current) = self.markup.get_mut(&id) {
            *current = markup.to_string();
        }
    }

    fn poll_event(&mut self) -> Option<(DialogId, ModalEvent)> {
        self.queue.pop_front()
    }
}
