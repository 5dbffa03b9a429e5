use super::*;

fn valid_form() -> VolunteerForm {
    VolunteerForm {
        name: "Dev Patel".to_owned(),
        email: "dev@example.com".to_owned(),
        phone: "987-654-3210".to_owned(),
        skills: "First Aid, Counseling".to_owned(),
        experience: "Two years with a community clinic".to_owned(),
        availability: "Weekends".to_owned(),
        address: "4 Lake View".to_owned(),
    }
}

#[test]
fn valid_form_has_no_errors() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn availability_is_required() {
    let mut form = valid_form();
    form.availability = String::new();
    let errors = form.validate();
    assert_eq!(
        errors.get(&Field::Availability).map(String::as_str),
        Some("Please select your availability")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn optional_fields_validate_when_empty() {
    let mut form = valid_form();
    form.skills = String::new();
    form.experience = String::new();
    assert!(form.validate().is_empty());
}

#[test]
fn short_skill_entries_are_rejected() {
    let mut form = valid_form();
    form.skills = "First Aid, X".to_owned();
    let errors = form.validate();
    assert_eq!(
        errors.get(&Field::Skills).map(String::as_str),
        Some("Each skill must be at least 2 characters (comma-separated)")
    );
}

#[test]
fn payload_splits_and_trims_skills() {
    let form = valid_form();
    let payload = form.payload();
    assert_eq!(payload.skills, vec!["First Aid".to_owned(), "Counseling".to_owned()]);

    let mut empty = valid_form();
    empty.skills = String::new();
    assert!(empty.payload().skills.is_empty());
}
