//! Schema of the `qr_codes` table.
//!
//! The table is created once and never migrated; schema changes need manual
//! intervention on the database file.

use log::info;
use sqlx::SqlitePool;

use crate::config::QR_CODES_TABLE;
use crate::error_handling::DatabaseError;

/// Returns whether the `qr_codes` table already exists.
pub async fn has_qr_codes_table(pool: &SqlitePool) -> Result<bool, DatabaseError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(QR_CODES_TABLE)
            .fetch_one(pool)
            .await?;
    Ok(count == 1)
}

/// Creates the `qr_codes` table and its shop index.
///
/// Plain `CREATE TABLE`: calling this twice is an error, which is what lets the
/// store's init gate prove it ran exactly once. Table and index are created in
/// one transaction, so a failure leaves neither behind.
pub async fn create_qr_codes_table(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "CREATE TABLE qr_codes (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            shop_domain VARCHAR(511) NOT NULL,
            title VARCHAR(511) NOT NULL,
            product_id VARCHAR(255) NOT NULL,
            discount_id VARCHAR(255) NOT NULL,
            variant_id VARCHAR(255) NOT NULL,
            handle VARCHAR(255) NOT NULL,
            go_to_checkout TINYINT NOT NULL,
            scans INTEGER NOT NULL DEFAULT 0 CHECK (scans >= 0),
            conversions INTEGER NOT NULL DEFAULT 0 CHECK (conversions >= 0),
            created_at_ms INTEGER NOT NULL
        )",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query("CREATE INDEX idx_qr_codes_shop_domain ON qr_codes (shop_domain)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!("Created table {QR_CODES_TABLE}");
    Ok(())
}
