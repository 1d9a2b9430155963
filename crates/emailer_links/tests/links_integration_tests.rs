//! Integration tests: bundled templates through to mail client links.

use emailer_links::{
    preview, send_link, submit_link, template_has_placeholders, template_placeholders,
    TemplateDraft,
};
use emailer_placeholders::{validate_completeness, PlaceholderValues, Unmatched};
use emailer_store::{TemplateCatalog, TemplateStore};

fn catalog() -> TemplateCatalog {
    TemplateStore::bundled().load_catalog().unwrap()
}

fn values(pairs: &[(&str, &str)]) -> PlaceholderValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_placeholders_span_subject_and_body() {
    let catalog = catalog();
    let welcome = catalog.get("welcome-email").unwrap();
    assert_eq!(template_placeholders(welcome), vec!["group", "username"]);

    let hours = catalog.get("library-hours").unwrap();
    assert!(!template_has_placeholders(hours));
    assert!(template_placeholders(hours).is_empty());
}

#[test]
fn test_fill_and_send() {
    let catalog = catalog();
    let pothole = catalog.get("pothole-report").unwrap();
    let vals = values(&[
        ("street", "Mill Lane"),
        ("landmark", "the post office"),
        ("username", "Sam"),
    ]);

    let body = format!("{}\n{}", pothole.subject, pothole.body);
    assert!(validate_completeness(&body, &vals).is_valid);

    let rendered = preview(pothole, &vals, Unmatched::Keep);
    assert_eq!(rendered.subject, "Pothole on Mill Lane");
    assert!(rendered.body.ends_with("Thank you,\nSam"));

    let link = send_link(pothole, Some(&vals));
    assert!(link.starts_with(
        "mailto:highways@council.example.gov?subject=Pothole%20on%20Mill%20Lane&body="
    ));
    assert_eq!(link, rendered.to_mailto());
}

#[test]
fn test_send_without_values_keeps_tokens() {
    let catalog = catalog();
    let welcome = catalog.get("welcome-email").unwrap();
    let link = send_link(welcome, None);
    assert!(link.contains("%7B%7Busername%7D%7D"));
}

#[test]
fn test_draft_to_submission() {
    let draft = TemplateDraft {
        id: "street-light".to_string(),
        subject: "Broken street light on {{street}}".to_string(),
        target_recipient: "lighting@council.example.gov".to_string(),
        body: "The light outside {{house_number}} {{street}} is out.".to_string(),
        created_by: "Sam".to_string(),
        title: None,
        description: None,
    };

    let template = draft.validate().unwrap();
    assert_eq!(template_placeholders(&template), vec!["street", "house_number"]);

    let link = submit_link(&template, "templates@example.org").unwrap();
    assert!(link.starts_with("mailto:templates@example.org?subject="));
    assert!(link.contains("street-light"));
}
