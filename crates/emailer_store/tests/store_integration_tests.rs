//! Integration tests for loading template documents from disk.

use std::fs;
use std::path::Path;

use emailer_store::{StoreError, TemplateStore};
use tempfile::tempdir;

const LIST_DOCUMENT: &str = r#"[
  {
    "id": "welcome",
    "title": "Welcome",
    "subject": "Welcome {{username}}",
    "targetRecipient": "team@example.com",
    "body": "Hello {{username}}",
    "createdOn": "2024-01-15T10:30:00Z",
    "createdBy": "Rory"
  },
  {
    "id": "follow-up",
    "subject": "Following up",
    "targetRecipient": "team@example.com",
    "body": "Just checking in.",
    "createdOn": "2024-01-20T12:00:00Z",
    "createdBy": "Rory"
  }
]"#;

const KEYED_DOCUMENT: &str = r#"{
  "welcome": {
    "title": "Welcome",
    "subject": "Welcome {{username}}",
    "targetRecipient": "team@example.com",
    "body": "Hello {{username}}",
    "createdOn": "2024-01-15T10:30:00Z",
    "createdBy": "Rory"
  },
  "follow-up": {
    "subject": "Following up",
    "targetRecipient": "team@example.com",
    "body": "Just checking in.",
    "createdOn": "2024-01-20T12:00:00Z",
    "createdBy": "Rory"
  }
}"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Both document shapes normalize to the same ordered list.
#[test]
fn test_list_and_keyed_shapes_are_equivalent() {
    let temp = tempdir().unwrap();
    let list = TemplateStore::open(write(temp.path(), "list.json", LIST_DOCUMENT));
    let keyed = TemplateStore::open(write(temp.path(), "keyed.json", KEYED_DOCUMENT));

    let from_list = list.load_all().unwrap();
    let from_keyed = keyed.load_all().unwrap();
    assert_eq!(from_list, from_keyed);
    assert_eq!(from_list[0].id, "welcome");
    assert_eq!(from_list[1].id, "follow-up");
}

#[test]
fn test_get_by_id() {
    let temp = tempdir().unwrap();
    let store = TemplateStore::open(write(temp.path(), "templates.json", LIST_DOCUMENT));

    let template = store.get_by_id("welcome").unwrap();
    assert_eq!(template.title.as_deref(), Some("Welcome"));

    match store.get_by_id("missing") {
        Err(StoreError::NotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// A single bad record poisons the whole document.
#[test]
fn test_malformed_record_fails_whole_document() {
    let temp = tempdir().unwrap();
    let document = LIST_DOCUMENT.replace("\"follow-up\"", "\"Follow Up\"");
    let store = TemplateStore::open(write(temp.path(), "templates.json", &document));

    let err = store.load_all().unwrap_err();
    assert!(err.is_data_corrupt());
    assert!(err.validation_errors().unwrap().has_path("[1].id"));

    // Lookups of the valid record fail the same way.
    let err = store.get_by_id("welcome").unwrap_err();
    assert!(matches!(err, StoreError::DataCorrupt(_)));
}

#[test]
fn test_duplicate_ids_are_data_corrupt() {
    let temp = tempdir().unwrap();
    let document = LIST_DOCUMENT.replace("\"follow-up\"", "\"welcome\"");
    let store = TemplateStore::open(write(temp.path(), "templates.json", &document));

    let err = store.load_all().unwrap_err();
    assert!(err.validation_errors().unwrap().has_path("[1].id"));
}

/// A keyed document that repeats a key is rejected, not last-one-wins.
#[test]
fn test_repeated_key_is_data_corrupt() {
    let temp = tempdir().unwrap();
    let document = KEYED_DOCUMENT.replace("\"follow-up\":", "\"welcome\":");
    let store = TemplateStore::open(write(temp.path(), "templates.json", &document));

    let err = store.load_all().unwrap_err();
    assert!(err.is_data_corrupt());
    assert_eq!(
        err.validation_errors().unwrap().messages(),
        vec!["[1].id: Duplicate template ID 'welcome'"]
    );
    assert!(store.get_by_id("welcome").unwrap_err().is_data_corrupt());
}

#[test]
fn test_yaml_document() {
    let temp = tempdir().unwrap();
    let yaml = r#"
welcome:
  subject: "Welcome {{username}}"
  targetRecipient: team@example.com
  body: "Hello {{username}}"
  createdOn: "2024-01-15T10:30:00Z"
  createdBy: Rory
"#;
    let store = TemplateStore::open(write(temp.path(), "templates.yaml", yaml));
    let templates = store.load_all().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].id, "welcome");
}

#[test]
fn test_missing_document_is_io_error() {
    let temp = tempdir().unwrap();
    let store = TemplateStore::open(temp.path().join("absent.json"));
    let err = store.load_all().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(!err.is_data_corrupt());
}

/// Edits to the document are visible on the next load.
#[test]
fn test_document_changes_are_picked_up() {
    let temp = tempdir().unwrap();
    let path = write(temp.path(), "templates.json", LIST_DOCUMENT);
    let store = TemplateStore::open(&path);
    assert_eq!(store.load_all().unwrap().len(), 2);

    fs::write(&path, "[]").unwrap();
    assert!(store.load_all().unwrap().is_empty());
}
