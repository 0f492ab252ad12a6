// Shared test helpers for store setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;

use qrcode_store::storage::init_db_pool_with_path;
use qrcode_store::{HostContext, NewQrCode, QrCodeStore};

#[allow(dead_code)]
pub const APP_HOST: &str = "qr-app.example.com";
#[allow(dead_code)]
pub const SHOP: &str = "my-shop.myshopify.com";

/// Host context pointing at the test app host.
#[allow(dead_code)] // Used by other test files
pub fn test_host() -> HostContext {
    HostContext::new("https", Some(APP_HOST.to_string()))
}

/// Creates an initialized store over an in-memory database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_store() -> QrCodeStore {
    QrCodeStore::open_in_memory(test_host())
        .await
        .expect("Failed to create in-memory store")
}

/// Creates a store over a database file without running the schema gate.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_store_with_path(db_path: &Path) -> QrCodeStore {
    let pool = init_db_pool_with_path(db_path)
        .await
        .expect("Failed to open test database");
    QrCodeStore::new(pool, test_host())
}

/// A valid create request for `shop_domain`.
#[allow(dead_code)] // Used by other test files
pub fn new_qr_code(shop_domain: &str, handle: &str) -> NewQrCode {
    NewQrCode {
        shop_domain: shop_domain.to_string(),
        title: format!("QR for {handle}"),
        product_id: "gid://shopify/Product/8001".to_string(),
        discount_id: "gid://shopify/DiscountCodeNode/9001".to_string(),
        variant_id: "999".to_string(),
        handle: handle.to_string(),
        go_to_checkout: false,
    }
}
