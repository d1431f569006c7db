#![allow(dead_code)]

use dialogbox::callback::{Reply, ReplyCallback};
use dialogbox::shell::HeadlessWidget;
use dialogbox::types::Outcome;
use dialogbox::DialogBox;
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// A dialog box displaying through an in-memory widget.
pub fn dialog_box() -> DialogBox {
    DialogBox::with_widget(HeadlessWidget::new())
}

/// A reply callback recording every reply it receives.
pub fn recorder() -> (Rc<RefCell<Vec<Reply>>>, ReplyCallback) {
    recorder_with(Outcome::Dismiss)
}

/// Like [`recorder`], answering every reply with `outcome`.
pub fn recorder_with(outcome: Outcome) -> (Rc<RefCell<Vec<Reply>>>, ReplyCallback) {
    let replies = Rc::new(RefCell::new(Vec::new()));
    let sink = replies.clone();
    let callback = ReplyCallback::new(move |reply| {
        debug!("reply: {reply:?}");
        sink.borrow_mut().push(reply);
        outcome
    });
    (replies, callback)
}

/// Writes a dialog definition into `dir`.
pub fn write_document(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
