//! Application initialization and resource setup.
//!
//! Builds the shared resources a process needs before serving store calls:
//! the logger and the [`QrCodeStore`] itself (pool, host context, warmed schema).

mod logger;

use crate::config::Config;
use crate::qrcode::{HostContext, QrCodeStore};
use crate::storage::init_db_pool_with_path;
use crate::error_handling::StoreError;

// Re-export public API
pub use logger::init_logger_with;

/// Opens the configured database and returns a store whose schema is ready.
///
/// Intended to run once at process start; the returned store is then shared by
/// reference (or behind an `Arc`) with every caller.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the database file cannot be created,
/// connected to, or the `qr_codes` table cannot be created.
pub async fn init_store(config: &Config) -> Result<QrCodeStore, StoreError> {
    let pool = init_db_pool_with_path(&config.db_path).await?;
    let host = HostContext::new(config.host_scheme.clone(), config.host_name.clone());
    let store = QrCodeStore::new(pool, host);
    store.init().await?;
    Ok(store)
}
