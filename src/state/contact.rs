#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::net::types::ContactPayload;
use crate::validate;

/// Field identifiers for the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Per-field error messages. Absent key means the field is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Contact form record. All four fields are required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate every field, returning the full error map.
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

        if self.subject.is_empty() {
            errors.insert(Field::Subject, "Subject is required".to_owned());
        } else if !validate::min_len(&self.subject, 3) {
            errors.insert(Field::Subject, "Subject must be at least 3 characters".to_owned());
        }

        if self.message.is_empty() {
            errors.insert(Field::Message, "Message is required".to_owned());
        } else if !validate::min_len(&self.message, 10) {
            errors.insert(Field::Message, "Message must be at least 10 characters".to_owned());
        }

        errors
    }

    /// Wire payload for `POST /contact/submit`.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}
