//! # carelink
//!
//! Client-side rendered Leptos frontend for the CareLink healthcare-support
//! organization: patient and volunteer registration, a contact form, and a
//! FAQ chatbot, behind a tab-style navigation shell.
//!
//! All business logic is synchronous field validation ([`validate`] and the
//! form records in [`state`]) wired to async submit handlers that call the
//! REST backend ([`net`]). Browser-only code is gated on `wasm32` so the
//! models and validators unit-test on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;
