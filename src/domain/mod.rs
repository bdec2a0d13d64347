//! Domain types of the lead form service.

pub mod lead;
pub mod message;
pub mod photo;
pub mod profile;
pub mod types;
