//! Small browser utilities.

pub mod time;
