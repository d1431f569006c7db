use dialogbox::callback::Reply;
use dialogbox::cli::runner::{render_document, run_document};
use dialogbox::cli::DocumentArgs;
use dialogbox::config::DialogDocument;
use dialogbox::form::{FieldValue, FormResult};
use dialogbox::prompt::AutomaticPrompter;
use dialogbox::types::DialogKind;
use dialogbox::Error;
use serde_json::json;
use tempfile::TempDir;
use test_log::test;
mod utils;
use utils::write_document;

const SIGNUP_FORM: &str = r#"
kind: form
title: Sign up
inputs:
  - title: Email
    inputType: email
    placeholder: you@example.com
  - title: Plan
    inputType: select
    value: free
    inputOptions:
      - { text: Free, value: free }
      - { text: Pro, value: pro, group: Paid }
  - title: Newsletter
    inputType: boolean
    value: true
"#;

fn document_args(path: std::path::PathBuf, locale: Option<&str>) -> DocumentArgs {
    DocumentArgs { file: path, locale: locale.map(str::to_string) }
}

#[test]
fn loads_yaml_and_json_documents() {
    let dir = TempDir::new().unwrap();
    let yaml = write_document(&dir, "form.yaml", SIGNUP_FORM);
    let document = DialogDocument::load(&yaml).unwrap();
    assert_eq!(document.kind, DialogKind::Form);
    assert_eq!(document.options.inputs.as_ref().map(Vec::len), Some(3));

    let json = write_document(&dir, "alert.json", r#"{"message": "Hello"}"#);
    let document = DialogDocument::load(&json).unwrap();
    assert_eq!(document.kind, DialogKind::Dialog);

    let toml = write_document(&dir, "alert.toml", "message = 'Hello'");
    assert!(DialogDocument::load(&toml).is_err());
}

#[test]
fn renders_form_document() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "form.yaml", SIGNUP_FORM);
    let markup = render_document(&document_args(path, None)).unwrap();

    assert!(markup.contains("<h4 class=\"modal-title\">Sign up</h4>"));
    assert!(markup.contains("placeholder=\"you@example.com\""));
    assert!(markup.contains("<optgroup label=\"Paid\">"));
    assert!(markup.contains("data-bb-handler=\"confirm\""));
}

#[test]
fn renders_with_requested_locale() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "alert.json", r#"{"kind": "alert", "message": "Fertig"}"#);
    let markup = render_document(&document_args(path, Some("lv"))).unwrap();
    assert!(markup.contains(">Labi</button>"));
}

#[test]
fn runs_form_with_scripted_answers() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "form.yaml", SIGNUP_FORM);
    let answers = json!({
        "Email": "ada@example.com",
        "Plan": 1,
        "Newsletter": false
    });
    let prompter = AutomaticPrompter::from_answers(&answers).unwrap();
    let reply = run_document(&document_args(path, None), prompter).unwrap();

    assert_eq!(
        reply,
        Some(Reply::Form(Some(FormResult::Many(vec![
            FieldValue::Text("ada@example.com".into()),
            FieldValue::Text("pro".into()),
            FieldValue::Bool(false),
        ]))))
    );
}

#[test]
fn scripted_cancel_answers_false() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "confirm.json", r#"{"kind": "confirm", "message": "Sure?"}"#);
    let prompter = AutomaticPrompter::new().with_action_response("Sure?", "Cancel");
    let reply = run_document(&document_args(path, None), prompter).unwrap();
    assert_eq!(reply, Some(Reply::Confirmed(false)));
}

#[test]
fn invalid_document_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "bad.json", r#"{"kind": "alert", "buttons": {"ok": 3}, "message": "x"}"#);
    let result = render_document(&document_args(path, None));
    assert!(matches!(result, Err(Error::InvalidButtonError { .. })));

    let path = write_document(&dir, "empty.json", r#"{"kind": "dialog"}"#);
    assert!(matches!(
        render_document(&document_args(path, None)),
        Err(Error::MissingMessageError)
    ));
}
