//! Parameterized statements over the `qr_codes` table.
//!
//! Each function issues exactly one statement. None of them waits for the
//! schema; callers go through [`crate::QrCodeStore`], which does.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::qrcode::{NewQrCode, QrCodeRecord, QrCodeUpdate};
use crate::storage::row::record_from_row;

/// Inserts a QR code with zeroed counters and returns its new id.
pub async fn insert_qr_code(
    pool: &SqlitePool,
    input: &NewQrCode,
    created_at_ms: i64,
) -> Result<i64, DatabaseError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO qr_codes
            (shop_domain, title, product_id, discount_id, variant_id, handle,
             go_to_checkout, scans, conversions, created_at_ms)
         VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?)
         RETURNING id",
    )
    .bind(&input.shop_domain)
    .bind(&input.title)
    .bind(&input.product_id)
    .bind(&input.discount_id)
    .bind(&input.variant_id)
    .bind(&input.handle)
    .bind(input.go_to_checkout)
    .bind(created_at_ms)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Overwrites the mutable fields of `id`. Returns the number of rows changed.
pub async fn update_qr_code(
    pool: &SqlitePool,
    id: i64,
    input: &QrCodeUpdate,
) -> Result<u64, DatabaseError> {
    let result = sqlx::query(
        "UPDATE qr_codes
         SET title = ?, product_id = ?, discount_id = ?, variant_id = ?,
             handle = ?, go_to_checkout = ?
         WHERE id = ?",
    )
    .bind(&input.title)
    .bind(&input.product_id)
    .bind(&input.discount_id)
    .bind(&input.variant_id)
    .bind(&input.handle)
    .bind(input.go_to_checkout)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Hard-deletes `id`. Returns the number of rows removed.
pub async fn delete_qr_code(pool: &SqlitePool, id: i64) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM qr_codes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// All QR codes of a shop (exact, case-sensitive match), oldest first.
pub async fn select_qr_codes_by_shop(
    pool: &SqlitePool,
    shop_domain: &str,
) -> Result<Vec<QrCodeRecord>, DatabaseError> {
    let rows = sqlx::query("SELECT * FROM qr_codes WHERE shop_domain = ? ORDER BY id")
        .bind(shop_domain)
        .fetch_all(pool)
        .await?;

    let records = rows
        .iter()
        .map(record_from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Every row matching `id`; at most one under the primary key.
pub async fn select_qr_codes_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Vec<QrCodeRecord>, DatabaseError> {
    let rows = sqlx::query("SELECT * FROM qr_codes WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await?;

    let records = rows
        .iter()
        .map(record_from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Adds one scan to `id`. Returns the number of rows changed.
pub async fn increment_scans(pool: &SqlitePool, id: i64) -> Result<u64, DatabaseError> {
    let result = sqlx::query("UPDATE qr_codes SET scans = scans + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
