use super::*;

fn valid_form() -> ContactMessage {
    ContactMessage {
        name: "Priya Nair".to_owned(),
        email: "priya@example.com".to_owned(),
        subject: "Appointment help".to_owned(),
        message: "I need help rescheduling my appointment.".to_owned(),
    }
}

#[test]
fn valid_form_has_no_errors() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn short_subject_and_message_report_thresholds() {
    let mut form = valid_form();
    form.subject = "Hi".to_owned();
    form.message = "Too short".to_owned();
    let errors = form.validate();

    assert_eq!(
        errors.get(&Field::Subject).map(String::as_str),
        Some("Subject must be at least 3 characters")
    );
    assert_eq!(
        errors.get(&Field::Message).map(String::as_str),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn all_fields_required_when_empty() {
    let errors = ContactMessage::default().validate();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(&Field::Message).map(String::as_str), Some("Message is required"));
}

#[test]
fn fixing_one_field_clears_only_its_error() {
    let mut form = ContactMessage::default();
    let before = form.validate();
    assert!(before.contains_key(&Field::Name));

    form.name = "Priya Nair".to_owned();
    let after = form.validate();
    assert!(!after.contains_key(&Field::Name));
    assert!(after.contains_key(&Field::Email));
    assert!(after.contains_key(&Field::Subject));
    assert!(after.contains_key(&Field::Message));
}
