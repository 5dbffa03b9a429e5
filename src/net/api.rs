//! REST API client for the CareLink backend.
//!
//! In the browser (wasm32) these are real HTTP calls via `gloo-net`. Off
//! wasm they are inert stubs returning [`ApiError::Unsupported`], which
//! keeps the crate compilable and unit-testable on the host.
//!
//! The full service surface of the backend is exposed here (list, detail,
//! update, and delete included) even though the UI only drives the
//! register/submit/ask/faqs subset.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ChatReply, ChatRequest, Contact, ContactPayload, ContactStatusUpdate, Faq, Patient,
    PatientPayload, Volunteer, VolunteerPayload,
};

/// Backend origin, baked in at compile time. Empty means same-origin.
const BASE: &str = match option_env!("CARELINK_API_URL") {
    Some(base) => base,
    None => "",
};

fn url(path: &str) -> String {
    format!("{BASE}/api{path}")
}

// ---------------------------------------------------------------
// Transport helpers
// ---------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) => body
            .text()
            .map_or(ApiError::Http(status), |text| ApiError::Server(text.to_owned())),
        Err(_) => ApiError::Http(status),
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(&url(path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// POST where the success body is ignored.
#[cfg(target_arch = "wasm32")]
async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&url(path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() { Ok(()) } else { Err(failure(resp).await) }
}

/// PUT where the success body is ignored.
#[cfg(target_arch = "wasm32")]
async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::put(&url(path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() { Ok(()) } else { Err(failure(resp).await) }
}

#[cfg(target_arch = "wasm32")]
async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() { Ok(()) } else { Err(failure(resp).await) }
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let _ = path;
    Err(ApiError::Unsupported)
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let _ = (path, body);
    Err(ApiError::Unsupported)
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let _ = (path, body);
    Err(ApiError::Unsupported)
}

#[cfg(not(target_arch = "wasm32"))]
async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let _ = (path, body);
    Err(ApiError::Unsupported)
}

#[cfg(not(target_arch = "wasm32"))]
async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let _ = path;
    Err(ApiError::Unsupported)
}

// ---------------------------------------------------------------
// Patients
// ---------------------------------------------------------------

/// Register a new patient.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the backend rejects it.
pub async fn register_patient(payload: &PatientPayload) -> Result<(), ApiError> {
    post_unit("/patients/register", payload).await
}

/// Fetch every registered patient.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn fetch_patients() -> Result<Vec<Patient>, ApiError> {
    get_json("/patients").await
}

/// Fetch one patient by id.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn fetch_patient(id: &str) -> Result<Patient, ApiError> {
    get_json(&format!("/patients/{id}")).await
}

/// Replace a patient's details.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn update_patient(id: &str, payload: &PatientPayload) -> Result<(), ApiError> {
    put_unit(&format!("/patients/{id}"), payload).await
}

/// Delete a patient.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn delete_patient(id: &str) -> Result<(), ApiError> {
    delete_unit(&format!("/patients/{id}")).await
}

// ---------------------------------------------------------------
// Volunteers
// ---------------------------------------------------------------

/// Register a new volunteer.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the backend rejects it.
pub async fn register_volunteer(payload: &VolunteerPayload) -> Result<(), ApiError> {
    post_unit("/volunteers/register", payload).await
}

/// Fetch every registered volunteer.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn fetch_volunteers() -> Result<Vec<Volunteer>, ApiError> {
    get_json("/volunteers").await
}

/// Fetch one volunteer by id.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn fetch_volunteer(id: &str) -> Result<Volunteer, ApiError> {
    get_json(&format!("/volunteers/{id}")).await
}

/// Replace a volunteer's details.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn update_volunteer(id: &str, payload: &VolunteerPayload) -> Result<(), ApiError> {
    put_unit(&format!("/volunteers/{id}"), payload).await
}

/// Delete a volunteer.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn delete_volunteer(id: &str) -> Result<(), ApiError> {
    delete_unit(&format!("/volunteers/{id}")).await
}

// ---------------------------------------------------------------
// Contact
// ---------------------------------------------------------------

/// Submit a contact form message.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the backend rejects it.
pub async fn submit_contact(payload: &ContactPayload) -> Result<(), ApiError> {
    post_unit("/contact/submit", payload).await
}

/// Fetch every contact submission.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn fetch_contacts() -> Result<Vec<Contact>, ApiError> {
    get_json("/contact").await
}

/// Fetch one contact submission by id.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn fetch_contact(id: &str) -> Result<Contact, ApiError> {
    get_json(&format!("/contact/{id}")).await
}

/// Update the handling status of a contact submission.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn update_contact_status(id: &str, update: &ContactStatusUpdate) -> Result<(), ApiError> {
    put_unit(&format!("/contact/{id}"), update).await
}

/// Delete a contact submission.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the id is unknown.
pub async fn delete_contact(id: &str) -> Result<(), ApiError> {
    delete_unit(&format!("/contact/{id}")).await
}

// ---------------------------------------------------------------
// Chatbot
// ---------------------------------------------------------------

/// Ask the FAQ chatbot a question.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails; `Server` carries the bot's
/// own error text when it provides one.
pub async fn ask_chatbot(message: &str) -> Result<ChatReply, ApiError> {
    let request = ChatRequest { message: message.to_owned() };
    post_json("/chatbot/ask", &request).await
}

/// Fetch the FAQ list used for quick-question suggestions.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn fetch_faqs() -> Result<Vec<Faq>, ApiError> {
    get_json("/chatbot/faqs").await
}
