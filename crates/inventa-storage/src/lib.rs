//! Inventa Storage Layer
//!
//! SQLite-based persistence for inventory records.
//! One database file, opened once at startup and shared by every store.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
