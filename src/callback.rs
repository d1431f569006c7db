//! Callbacks invoked by dialogs.
//!
//! Every callback is reference counted so options can be cloned freely, and
//! returns an [`Outcome`] telling the dialog whether it should stay open.

use crate::form::{Form, FormResult};
use crate::types::{DialogId, Outcome};
use serde::Serialize;
use std::rc::Rc;

/// Implements `Debug` and pointer-equality `PartialEq` for `Rc<dyn Fn>` newtypes.
macro_rules! impl_shared_fn {
    ($name:ident) => {
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::rc::Rc::ptr_eq(&self.0, &other.0)
            }
        }
    };
}
pub(crate) use impl_shared_fn;

/// What activated a button callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A footer button, by key.
    Button(String),
    /// Escape key, close button or backdrop click.
    Escape,
}

/// Read-only view of the dialog handed to button callbacks.
pub struct CallbackContext<'a> {
    pub dialog: DialogId,
    pub trigger: Trigger,
    form: Option<&'a Form>,
}

impl<'a> CallbackContext<'a> {
    pub(crate) fn new(dialog: DialogId, trigger: Trigger, form: Option<&'a Form>) -> Self {
        Self { dialog, trigger, form }
    }

    /// The dialog's form, if it has one.
    pub fn form(&self) -> Option<&'a Form> {
        self.form
    }
}

/// Callback attached to a footer button or to the escape path.
#[derive(Clone)]
pub struct ButtonCallback(Rc<dyn Fn(&CallbackContext<'_>) -> Outcome>);

impl_shared_fn!(ButtonCallback);

impl ButtonCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&CallbackContext<'_>) -> Outcome + 'static,
    {
        Self(Rc::new(callback))
    }

    pub fn call(&self, context: &CallbackContext<'_>) -> Outcome {
        (self.0)(context)
    }
}

/// Answer delivered to the caller of a shorthand dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reply", content = "value", rename_all = "lowercase")]
pub enum Reply {
    /// An alert was closed.
    Acknowledged,
    /// A confirm was answered.
    Confirmed(bool),
    /// A prompt or form was submitted, or cancelled (`None`).
    Form(Option<FormResult>),
}

/// The single caller callback of alert, confirm, prompt and form.
#[derive(Clone)]
pub struct ReplyCallback(Rc<dyn Fn(Reply) -> Outcome>);

impl_shared_fn!(ReplyCallback);

impl ReplyCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Reply) -> Outcome + 'static,
    {
        Self(Rc::new(callback))
    }

    pub fn call(&self, reply: Reply) -> Outcome {
        (self.0)(reply)
    }
}

impl<F> From<F> for ReplyCallback
where
    F: Fn(Reply) -> Outcome + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn reply_callback_receives_reply() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = ReplyCallback::new(move |reply| {
            sink.borrow_mut().push(reply);
            Outcome::KeepOpen
        });

        assert_eq!(callback.call(Reply::Confirmed(true)), Outcome::KeepOpen);
        assert_eq!(*seen.borrow(), vec![Reply::Confirmed(true)]);
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let a = ButtonCallback::new(|_| Outcome::Dismiss);
        let b = ButtonCallback::new(|_| Outcome::Dismiss);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(format!("{a:?}"), "ButtonCallback(..)");
    }

    #[test]
    fn button_callback_sees_trigger() {
        let callback = ButtonCallback::new(|ctx| match ctx.trigger {
            Trigger::Escape => Outcome::KeepOpen,
            Trigger::Button(_) => Outcome::Dismiss,
        });
        let escape = CallbackContext::new(DialogId(1), Trigger::Escape, None);
        let click = CallbackContext::new(DialogId(1), Trigger::Button("ok".into()), None);

        assert_eq!(callback.call(&escape), Outcome::KeepOpen);
        assert_eq!(callback.call(&click), Outcome::Dismiss);
        assert!(click.form().is_none());
    }

    #[test]
    fn replies_serialize_with_tag() {
        let json = serde_json::to_value(Reply::Confirmed(false)).unwrap();
        assert_eq!(json, serde_json::json!({"reply": "confirmed", "value": false}));
        let json = serde_json::to_value(Reply::Acknowledged).unwrap();
        assert_eq!(json, serde_json::json!({"reply": "acknowledged"}));
    }
}
