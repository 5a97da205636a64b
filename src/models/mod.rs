//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod weather;

// Re-export commonly used models
pub use user::User;
pub use weather::{Coordinates, Weather};
