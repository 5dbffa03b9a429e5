#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use std::collections::BTreeMap;

use crate::net::types::PatientPayload;
use crate::validate;

/// Field identifiers for the patient registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    MedicalCondition,
    Address,
}

/// Per-field error messages. Absent key means the field is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Patient registration form record. Created empty on mount, reset to
/// empty after a successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub medical_condition: String,
    pub address: String,
}

impl PatientForm {
    /// Validate every field, returning the full error map. An empty map
    /// means the record may be submitted. Age and medical condition are
    /// optional and only checked when non-empty.
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

        if !self.age.is_empty() && !validate::age(&self.age) {
            errors.insert(Field::Age, "Age must be between 1 and 120".to_owned());
        }

        if !self.medical_condition.is_empty() && !validate::min_len(&self.medical_condition, 3) {
            errors.insert(
                Field::MedicalCondition,
                "Medical condition must be at least 3 characters".to_owned(),
            );
        }

        if self.address.is_empty() {
            errors.insert(Field::Address, "Address is required".to_owned());
        } else if !validate::min_len(&self.address, 5) {
            errors.insert(Field::Address, "Address must be at least 5 characters".to_owned());
        }

        errors
    }

    /// Wire payload for `POST /patients/register`.
    pub fn payload(&self) -> PatientPayload {
        PatientPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            age: self.age.clone(),
            medical_condition: self.medical_condition.clone(),
            address: self.address.clone(),
        }
    }
}
