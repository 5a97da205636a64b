//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, health_check, pool_options, run_migrations};
pub use memory::InMemoryUserStore;
pub use repositories::{UserRepository, UserStore};
pub use service::DatabaseService;
