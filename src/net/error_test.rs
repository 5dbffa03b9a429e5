use super::*;

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Server("Email already registered".to_owned());
    assert_eq!(err.user_message("Error registering patient"), "Email already registered");
}

#[test]
fn user_message_falls_back_for_transport_failures() {
    let fallback = "Error sending message";
    assert_eq!(ApiError::Http(500).user_message(fallback), fallback);
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).user_message(fallback),
        fallback
    );
    assert_eq!(ApiError::Unsupported.user_message(fallback), fallback);
}

#[test]
fn display_includes_status_and_cause() {
    assert_eq!(ApiError::Http(404).to_string(), "request failed with status 404");
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
    assert_eq!(ApiError::Server("nope".to_owned()).to_string(), "nope");
}
