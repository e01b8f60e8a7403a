//! SQLite storage implementation for Inmoflow.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `inmoflow-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!        storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod accounts;
pub mod contacts;
pub mod leads;
pub mod listings;
pub mod prospects;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from inmoflow-core for convenience
pub use inmoflow_core::errors::{DatabaseError, Error, Result};
