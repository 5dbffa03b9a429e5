#[cfg(test)]
#[path = "volunteer_test.rs"]
mod volunteer_test;

use std::collections::BTreeMap;

use crate::net::types::VolunteerPayload;
use crate::validate;

/// Field identifiers for the volunteer registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Skills,
    Experience,
    Availability,
    Address,
}

/// Per-field error messages. Absent key means the field is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Availability choices offered in the form's select control.
pub const AVAILABILITY_OPTIONS: [&str; 4] = ["Full-time", "Part-time", "Weekends", "Flexible"];

/// Volunteer registration form record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Comma-separated in the UI; split into a list for the wire.
    pub skills: String,
    pub experience: String,
    pub availability: String,
    pub address: String,
}

impl VolunteerForm {
    /// Validate every field, returning the full error map. Skills and
    /// experience are optional and only checked when non-empty.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.is_empty() {
            errors.insert(Field::Name, "Name is required".to_owned());
        } else if !validate::name(&self.name) {
            errors.insert(
                Field::Name,
                "Name must be at least 3 characters and contain only letters".to_owned(),
            );
        }

        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required".to_owned());
        } else if !validate::email(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email address".to_owned());
        }

        if self.phone.is_empty() {
            errors.insert(Field::Phone, "Phone number is required".to_owned());
        } else if !validate::phone(&self.phone) {
            errors.insert(Field::Phone, "Phone number must be exactly 10 digits".to_owned());
        }

        if !self.skills.is_empty() && !validate::skills(&self.skills) {
            errors.insert(
                Field::Skills,
                "Each skill must be at least 2 characters (comma-separated)".to_owned(),
            );
        }

        if !self.experience.is_empty() && !validate::min_len(&self.experience, 5) {
            errors.insert(
                Field::Experience,
                "Experience description must be at least 5 characters".to_owned(),
            );
        }

        if self.availability.is_empty() {
            errors.insert(Field::Availability, "Please select your availability".to_owned());
        }

        if self.address.is_empty() {
            errors.insert(Field::Address, "Address is required".to_owned());
        } else if !validate::min_len(&self.address, 5) {
            errors.insert(Field::Address, "Address must be at least 5 characters".to_owned());
        }

        errors
    }

    /// Wire payload for `POST /volunteers/register`. Skills are split on
    /// commas and trimmed; an empty input becomes an empty list.
    pub fn payload(&self) -> VolunteerPayload {
        let skills = if self.skills.is_empty() {
            Vec::new()
        } else {
            self.skills.split(',').map(|s| s.trim().to_owned()).collect()
        };
        VolunteerPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills,
            experience: self.experience.clone(),
            availability: self.availability.clone(),
            address: self.address.clone(),
        }
    }
}
