//! Shared test helpers for storage module tests.
//!
//! Common utilities for database setup and test data creation used across
//! storage and store unit tests.

use sqlx::SqlitePool;

use crate::qrcode::NewQrCode;
use crate::storage::{create_qr_codes_table, init_memory_pool};

/// Creates an in-memory test database with the `qr_codes` table in place.
pub async fn create_test_pool() -> SqlitePool {
    let pool = init_memory_pool()
        .await
        .expect("Failed to create test database pool");
    create_qr_codes_table(&pool)
        .await
        .expect("Failed to create qr_codes table");
    pool
}

/// Request with every required field filled in for `shop_domain`.
pub fn test_new_qr_code(shop_domain: &str) -> NewQrCode {
    NewQrCode {
        shop_domain: shop_domain.to_string(),
        title: "Test QR code".to_string(),
        product_id: "gid://shopify/Product/1".to_string(),
        discount_id: "gid://shopify/DiscountCodeNode/2".to_string(),
        variant_id: "999".to_string(),
        handle: "blue-shirt".to_string(),
        go_to_checkout: false,
    }
}

/// Inserts a QR code directly and returns its id.
/// Uses direct SQL so tests of the query layer do not depend on it.
pub async fn insert_test_qr_code(pool: &SqlitePool, shop_domain: &str, handle: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO qr_codes
            (shop_domain, title, product_id, discount_id, variant_id, handle,
             go_to_checkout, scans, conversions, created_at_ms)
         VALUES (?, 'Test QR code', 'gid://shopify/Product/1', 'gid://shopify/DiscountCodeNode/2',
                 '999', ?, 0, 0, 0, 1704067200000)
         RETURNING id",
    )
    .bind(shop_domain)
    .bind(handle)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test QR code")
}
