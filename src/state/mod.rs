//! Client-side state models.
//!
//! DESIGN
//! ======
//! One module per form plus the chat log and the navigation section, so
//! each component depends on a small focused model. Form records are plain
//! structs held in `RwSignal`s by their components; validation lives on the
//! record so it can be unit-tested without a DOM.

pub mod chat;
pub mod contact;
pub mod patient;
pub mod section;
pub mod volunteer;
