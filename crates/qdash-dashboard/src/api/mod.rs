//! API endpoint handlers.

pub mod backends;
pub mod health;
pub mod jobs;
