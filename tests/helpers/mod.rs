//! Test helpers module
//!
//! Mock weather provider, reply recorders, test data builders, log
//! capture, and the PostgreSQL test database.

#![allow(dead_code)]

pub mod database_helper;
pub mod log_capture;
pub mod reply_recorder;
pub mod test_data;
pub mod weather_mock;

pub use database_helper::*;
pub use log_capture::*;
pub use reply_recorder::*;
pub use test_data::*;
pub use weather_mock::*;
