use super::*;

fn valid_form() -> PatientForm {
    PatientForm {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "(123) 456-7890".to_owned(),
        age: "34".to_owned(),
        medical_condition: String::new(),
        address: "12 Hill Road".to_owned(),
    }
}

#[test]
fn valid_form_has_no_errors() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn empty_form_reports_required_fields_only() {
    let errors = PatientForm::default().validate();
    assert_eq!(errors.get(&Field::Name).map(String::as_str), Some("Name is required"));
    assert_eq!(errors.get(&Field::Email).map(String::as_str), Some("Email is required"));
    assert_eq!(errors.get(&Field::Phone).map(String::as_str), Some("Phone number is required"));
    assert_eq!(errors.get(&Field::Address).map(String::as_str), Some("Address is required"));
    // Optional fields stay silent when empty.
    assert!(!errors.contains_key(&Field::Age));
    assert!(!errors.contains_key(&Field::MedicalCondition));
}

#[test]
fn format_errors_use_the_documented_messages() {
    let mut form = valid_form();
    form.name = "A1".to_owned();
    form.phone = "12345".to_owned();
    form.age = "121".to_owned();
    form.medical_condition = "ok".to_owned();
    let errors = form.validate();

    assert_eq!(
        errors.get(&Field::Name).map(String::as_str),
        Some("Name must be at least 3 characters and contain only letters")
    );
    assert_eq!(
        errors.get(&Field::Phone).map(String::as_str),
        Some("Phone number must be exactly 10 digits")
    );
    assert_eq!(errors.get(&Field::Age).map(String::as_str), Some("Age must be between 1 and 120"));
    assert_eq!(
        errors.get(&Field::MedicalCondition).map(String::as_str),
        Some("Medical condition must be at least 3 characters")
    );
}

#[test]
fn payload_carries_camel_case_condition_field() {
    let mut form = valid_form();
    form.medical_condition = "Asthma".to_owned();
    let value = serde_json::to_value(form.payload()).expect("serialize");
    assert_eq!(value["medicalCondition"], "Asthma");
    assert_eq!(value["name"], "Asha Rao");
}
