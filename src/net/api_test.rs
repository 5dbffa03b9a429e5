use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

#[test]
fn url_prefixes_api_under_base() {
    assert_eq!(url("/patients/register"), format!("{BASE}/api/patients/register"));
    assert_eq!(url("/chatbot/ask"), format!("{BASE}/api/chatbot/ask"));
}

// Off wasm every endpoint is a stub; callers must get a clean error, not a
// panic or a hang.
#[test]
fn host_stubs_report_unsupported() {
    assert!(matches!(
        poll_ready(register_patient(&PatientPayload::default())),
        Err(ApiError::Unsupported)
    ));
    assert!(matches!(poll_ready(ask_chatbot("hello there")), Err(ApiError::Unsupported)));
    assert!(matches!(poll_ready(fetch_faqs()), Err(ApiError::Unsupported)));
}

// The stubs resolve on the first poll, so a noop waker is enough.
fn poll_ready<F: Future>(future: F) -> F::Output {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match pin!(future).poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => unreachable!("stub futures resolve immediately"),
    }
}
