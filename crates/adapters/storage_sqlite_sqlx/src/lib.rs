//! # tubctl-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `tubctl-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `tubctl-app` (for port traits) and `tubctl-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod greeting_repo;
mod measure_repo;
mod pool;
mod timestamp;

pub use error::StorageError;
pub use greeting_repo::SqliteGreetingRepository;
pub use measure_repo::SqliteMeasureRepository;
pub use pool::{Config, Database};
