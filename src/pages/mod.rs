//! Static pages.

pub mod home;
