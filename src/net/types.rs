//! Wire types for the CareLink REST API.
//!
//! Field names follow the backend's camelCase JSON convention.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Patient registration payload for `POST /patients/register`.
///
/// `age` travels as the raw input string; the backend owns numeric
/// interpretation, the client only guarantees it validated as 1–120.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub medical_condition: String,
    pub address: String,
}

/// Volunteer registration payload for `POST /volunteers/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub availability: String,
    pub address: String,
}

/// Contact form payload for `POST /contact/submit`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored patient as returned by the list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Patient {
    pub id: String,
    #[serde(flatten)]
    pub details: PatientPayload,
}

/// A stored volunteer as returned by the list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Volunteer {
    pub id: String,
    #[serde(flatten)]
    pub details: VolunteerPayload,
}

/// A stored contact submission as returned by the list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(flatten)]
    pub details: ContactPayload,
}

/// Status update body for `PUT /contact/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactStatusUpdate {
    pub status: String,
}

/// Request body for `POST /chatbot/ask`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /chatbot/ask`. `confidence` is a percentage the bot
/// may omit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One FAQ entry from `GET /chatbot/faqs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Error body the backend attaches to failed requests. Regular endpoints
/// use `message`; the chatbot reports failures through `response`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl ErrorBody {
    /// Server-provided text, preferring `message` over `response`.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.response.as_deref())
    }
}
