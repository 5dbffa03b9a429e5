//! UI components: the navigation shell pieces, the three forms, and the
//! chatbot panel.

pub mod banner;
pub mod chatbot;
pub mod contact_form;
pub mod fields;
pub mod nav_bar;
pub mod patient_form;
pub mod volunteer_form;
