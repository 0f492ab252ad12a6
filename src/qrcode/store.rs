//! The QR code store.
//!
//! One `QrCodeStore` is built at process start and shared by reference (or
//! `Arc`) with every request handler. The first operation on a store checks
//! for the `qr_codes` table and creates it when missing; every operation,
//! including concurrent first callers, waits on that same one-time gate.

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use crate::error_handling::{DatabaseError, DerivationError, StoreError};
use crate::qrcode::host::HostContext;
use crate::qrcode::models::{NewQrCode, QrCodeRecord, QrCodeUpdate};
use crate::qrcode::redirect::destination_url;
use crate::storage::{self, create_qr_codes_table, has_qr_codes_table, init_memory_pool};

/// Data access for the `qr_codes` table.
#[derive(Debug)]
pub struct QrCodeStore {
    pool: SqlitePool,
    host: HostContext,
    // Empty: uninitialized. Being filled: initializing. Set: ready.
    ready: OnceCell<()>,
}

impl QrCodeStore {
    /// Wraps an open pool. No statement runs until the first operation.
    pub fn new(pool: SqlitePool, host: HostContext) -> Self {
        Self {
            pool,
            host,
            ready: OnceCell::new(),
        }
    }

    /// Store over a private in-memory database, already initialized.
    pub async fn open_in_memory(host: HostContext) -> Result<Self, StoreError> {
        let store = Self::new(init_memory_pool().await?, host);
        store.init().await?;
        Ok(store)
    }

    /// Host context used for app URLs.
    pub fn host(&self) -> &HostContext {
        &self.host
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Whether the schema gate has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }

    /// Runs the schema check-and-create once.
    ///
    /// Concurrent callers share a single run. A failed run leaves the gate
    /// closed and the next caller retries it.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.ready
            .get_or_try_init(|| async {
                if has_qr_codes_table(&self.pool).await? {
                    debug!("qr_codes table already present");
                } else {
                    info!("qr_codes table missing, creating it");
                    create_qr_codes_table(&self.pool).await?;
                }
                Ok::<(), DatabaseError>(())
            })
            .await?;
        Ok(())
    }

    /// Creates a QR code with zeroed counters and returns its id.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` for missing or oversized fields and unusable
    /// shop domains; `StoreError::Storage` if the insert fails.
    pub async fn create(&self, input: &NewQrCode) -> Result<i64, StoreError> {
        input.validate()?;
        self.init().await?;

        let id = storage::insert_qr_code(&self.pool, input, Utc::now().timestamp_millis()).await?;
        debug!("Created QR code {id} for {}", input.shop_domain);
        Ok(id)
    }

    /// Overwrites every mutable field of QR code `id`.
    ///
    /// Returns `false` when no QR code has that id; nothing is written then.
    pub async fn update(&self, id: i64, input: &QrCodeUpdate) -> Result<bool, StoreError> {
        input.validate()?;
        self.init().await?;

        let updated = storage::update_qr_code(&self.pool, id, input).await? > 0;
        if updated {
            debug!("Updated QR code {id}");
        } else {
            debug!("Update of unknown QR code {id} ignored");
        }
        Ok(updated)
    }

    /// All QR codes of `shop_domain`, in creation order, with image URLs.
    pub async fn list(&self, shop_domain: &str) -> Result<Vec<QrCodeRecord>, StoreError> {
        self.init().await?;

        let records = storage::select_qr_codes_by_shop(&self.pool, shop_domain).await?;
        debug!("Listed {} QR codes for {shop_domain}", records.len());
        Ok(records
            .into_iter()
            .map(|record| self.add_image_url(record))
            .collect())
    }

    /// The QR code with `id`, or `None` unless exactly one row matches.
    pub async fn read(&self, id: i64) -> Result<Option<QrCodeRecord>, StoreError> {
        self.init().await?;

        let mut records = storage::select_qr_codes_by_id(&self.pool, id).await?;
        if records.len() != 1 {
            debug!("QR code {id} not found ({} rows)", records.len());
            return Ok(None);
        }
        Ok(records.pop().map(|record| self.add_image_url(record)))
    }

    /// Hard-deletes QR code `id`. Returns `false` when it did not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.init().await?;

        let deleted = storage::delete_qr_code(&self.pool, id).await? > 0;
        debug!("Delete of QR code {id}: removed={deleted}");
        Ok(deleted)
    }

    /// URL encoded into the QR image: the app's `/qrcode/{id}` redirect endpoint.
    pub fn generate_qrcode_destination_url(
        &self,
        record: &QrCodeRecord,
    ) -> Result<String, DerivationError> {
        self.host.redirect_endpoint(record.id)
    }

    /// Records a scan of `record` and returns the storefront URL to redirect to.
    ///
    /// The scan is persisted before the destination is computed and is not
    /// rolled back if that computation fails.
    pub async fn handle_code_scan(&self, record: &QrCodeRecord) -> Result<String, StoreError> {
        self.init().await?;

        if storage::increment_scans(&self.pool, record.id).await? == 0 {
            warn!("Scan of unknown QR code {} not counted", record.id);
        }

        let destination = destination_url(record)?;
        debug!("QR code {} scanned, redirecting to {destination}", record.id);
        Ok(destination)
    }

    fn add_image_url(&self, mut record: QrCodeRecord) -> QrCodeRecord {
        match self.host.image_url(record.id) {
            Ok(url) => record.image_url = Some(url),
            Err(e) => warn!("No image URL for QR code {}: {e}", record.id),
        }
        record
    }
}
