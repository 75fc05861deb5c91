//! Inventa Core
//!
//! Central wiring for the Inventa inventory application: configuration,
//! the shared database handle, and the three record stores.

mod config;
mod error;
mod inventory;

pub use config::Config;
pub use error::CoreError;
pub use inventory::Inventory;

// Re-export core components
pub use inventa_records::{CustomerStore, InvoiceStore, ProductStore, Record};
pub use inventa_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
