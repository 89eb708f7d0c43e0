// Host-side tests for contact form validation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

#[test]
fn fields_are_trimmed_and_subject_defaults() {
    let m = ContactMessage::from_fields("  Ada ", "ada@example.com\n", "", " Hello ").unwrap();
    assert_eq!(m.from_name, "Ada");
    assert_eq!(m.reply_to, "ada@example.com");
    assert_eq!(m.subject, NO_SUBJECT);
    assert_eq!(m.message, "Hello");
}

#[test]
fn blank_required_fields_are_rejected() {
    assert_eq!(
        ContactMessage::from_fields("Ada", "   ", "Hi", "Hello"),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        ContactMessage::from_fields("", "a@b.c", "Hi", "Hello"),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        ContactMessage::from_fields("Ada", "a@b.c", "Hi", "\t"),
        Err(ContactError::MissingFields)
    );
}

#[test]
fn template_params_are_ordered() {
    let m = ContactMessage::from_fields("Ada", "a@b.c", "Quote", "Hello").unwrap();
    let keys: Vec<&str> = m.template_params().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["from_name", "reply_to", "subject", "message"]);
    assert_eq!(m.template_params()[2], ("subject", "Quote"));
}

#[test]
fn service_config_requires_every_id() {
    assert!(EmailServiceConfig::from_fields("svc", "tpl", "key").is_ok());
    assert_eq!(
        EmailServiceConfig::from_fields("svc", "", "key"),
        Err(ContactError::NotConfigured)
    );
}

#[test]
fn errors_render_as_alert_text() {
    assert_eq!(
        ContactError::MissingFields.to_string(),
        "Please complete name, email and message."
    );
    assert!(ContactError::NotConfigured.to_string().contains("not configured"));
}
