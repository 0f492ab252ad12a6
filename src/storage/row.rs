//! Row-to-record mapping for `qr_codes`.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::qrcode::QrCodeRecord;

/// Maps a `SELECT *` row into a record. Derived fields are left unset.
pub fn record_from_row(row: &SqliteRow) -> Result<QrCodeRecord, sqlx::Error> {
    Ok(QrCodeRecord {
        id: row.try_get("id")?,
        shop_domain: row.try_get("shop_domain")?,
        title: row.try_get("title")?,
        product_id: row.try_get("product_id")?,
        discount_id: row.try_get("discount_id")?,
        variant_id: row.try_get("variant_id")?,
        handle: row.try_get("handle")?,
        go_to_checkout: row.try_get("go_to_checkout")?,
        scans: row.try_get("scans")?,
        conversions: row.try_get("conversions")?,
        created_at_ms: row.try_get("created_at_ms")?,
        image_url: None,
        discount_code: None,
    })
}
