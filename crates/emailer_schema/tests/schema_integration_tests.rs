//! Integration tests for template schema validation.

use emailer_schema::{Template, TemplateValidator};
use serde_json::{json, Value};

fn record(id: &str) -> Value {
    json!({
        "id": id,
        "subject": "Quarterly update",
        "targetRecipient": "council@example.gov",
        "body": "Dear {{name}},\n\nPlease find the update attached.",
        "createdOn": "2024-03-01T09:00:00Z",
        "createdBy": "Campaigns team"
    })
}

/// A validated template serializes back to the fields it was built from.
#[test]
fn test_valid_record_round_trips_fields() {
    let input = record("quarterly-update");
    let template = TemplateValidator::validate_template(&input).unwrap();
    let output = serde_json::to_value(&template).unwrap();
    assert_eq!(output, input);
}

/// Removing any one required field yields an error naming exactly that field.
#[test]
fn test_each_required_field_is_reported() {
    for field in [
        "id",
        "subject",
        "targetRecipient",
        "body",
        "createdOn",
        "createdBy",
    ] {
        let mut input = record("quarterly-update");
        input.as_object_mut().unwrap().remove(field);

        let errors = TemplateValidator::validate_template(&input).unwrap_err();
        assert_eq!(errors.len(), 1, "unexpected errors for {}: {}", field, errors);
        assert!(errors.has_path(field));
    }
}

/// One malformed record rejects the whole collection.
#[test]
fn test_collection_fails_as_a_whole() {
    let records = vec![record("first"), record("second"), record("Third!")];
    let errors = TemplateValidator::validate_collection(&records).unwrap_err();
    assert!(errors.has_path("[2].id"));
    assert!(!errors.has_path("[0].id"));
}

#[test]
fn test_collection_preserves_order() {
    let records = vec![record("b-template"), record("a-template")];
    let templates: Vec<Template> = TemplateValidator::validate_collection(&records).unwrap();
    let ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b-template", "a-template"]);
}

#[test]
fn test_empty_collection_is_valid() {
    let templates = TemplateValidator::validate_collection(&[]).unwrap();
    assert!(templates.is_empty());
}

/// Presentation fields are carried through; unknown fields are dropped.
#[test]
fn test_presentation_fields_and_unknown_fields() {
    let mut input = record("with-extras");
    input["title"] = json!("Quarterly update");
    input["description"] = json!(7);
    input["priority"] = json!("high");

    let template = TemplateValidator::validate_template(&input).unwrap();
    assert_eq!(template.title.as_deref(), Some("Quarterly update"));
    assert_eq!(template.description, None);

    let output = serde_json::to_value(&template).unwrap();
    assert!(output.get("priority").is_none());
}
