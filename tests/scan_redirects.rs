//! Tests for scan accounting and redirect URL derivation.

use qrcode_store::{DerivationError, HostContext, QrCodeStore};
use url::Url;

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_test_store, new_qr_code, APP_HOST, SHOP};

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

async fn scan_count(store: &QrCodeStore, id: i64) -> i64 {
    store
        .read(id)
        .await
        .expect("read")
        .expect("present")
        .scans
}

#[tokio::test]
async fn test_product_view_scan_without_discount() {
    let store = create_test_store().await;
    let id = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let record = store.read(id).await.expect("read").expect("present");
    let before = record.scans;

    let destination = store.handle_code_scan(&record).await.expect("scan");
    let url = Url::parse(&destination).expect("valid url");

    assert_eq!(url.host_str(), Some(SHOP));
    assert_eq!(url.path(), "/products/blue-shirt");
    assert!(url.query().is_none());
    assert_eq!(scan_count(&store, id).await, before + 1);
}

#[tokio::test]
async fn test_product_view_scan_with_discount() {
    let store = create_test_store().await;
    let id = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let record = store
        .read(id)
        .await
        .expect("read")
        .expect("present")
        .with_discount_code("SAVE10");

    let url = Url::parse(&store.handle_code_scan(&record).await.expect("scan")).expect("url");

    assert_eq!(url.path(), "/discount/SAVE10");
    assert_eq!(
        query_value(&url, "redirect").as_deref(),
        Some("/products/blue-shirt")
    );
}

#[tokio::test]
async fn test_checkout_scan_without_discount() {
    let store = create_test_store().await;
    let mut input = new_qr_code(SHOP, "blue-shirt");
    input.go_to_checkout = true;
    input.variant_id = "999".to_string();
    let id = store.create(&input).await.expect("create");
    let record = store.read(id).await.expect("read").expect("present");

    let url = Url::parse(&store.handle_code_scan(&record).await.expect("scan")).expect("url");

    assert_eq!(url.path(), "/cart/999:1");
    assert!(url.query().is_none());
}

#[tokio::test]
async fn test_checkout_scan_with_discount() {
    let store = create_test_store().await;
    let mut input = new_qr_code(SHOP, "blue-shirt");
    input.go_to_checkout = true;
    input.variant_id = "999".to_string();
    let id = store.create(&input).await.expect("create");
    let record = store
        .read(id)
        .await
        .expect("read")
        .expect("present")
        .with_discount_code("SAVE10");

    let url = Url::parse(&store.handle_code_scan(&record).await.expect("scan")).expect("url");

    assert_eq!(url.path(), "/cart/999:1");
    assert_eq!(query_value(&url, "discount").as_deref(), Some("SAVE10"));
}

#[tokio::test]
async fn test_every_scan_is_counted_once() {
    let store = create_test_store().await;
    let id = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let record = store.read(id).await.expect("read").expect("present");

    for expected in 1..=5 {
        store.handle_code_scan(&record).await.expect("scan");
        assert_eq!(scan_count(&store, id).await, expected);
    }

    let record = store.read(id).await.expect("read").expect("present");
    assert_eq!(record.conversions, 0);
}

#[tokio::test]
async fn test_scan_only_touches_the_scanned_code() {
    let store = create_test_store().await;
    let scanned = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let untouched = store
        .create(&new_qr_code(SHOP, "red-shirt"))
        .await
        .expect("create");

    let record = store.read(scanned).await.expect("read").expect("present");
    store.handle_code_scan(&record).await.expect("scan");

    assert_eq!(scan_count(&store, scanned).await, 1);
    assert_eq!(scan_count(&store, untouched).await, 0);
}

#[tokio::test]
async fn test_destination_url_is_the_redirect_endpoint() {
    let store = create_test_store().await;
    let id = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let record = store.read(id).await.expect("read").expect("present");

    assert_eq!(
        store.generate_qrcode_destination_url(&record),
        Ok(format!("https://{APP_HOST}/qrcode/{id}"))
    );
}

#[tokio::test]
async fn test_destination_url_without_host_fails() {
    let store = QrCodeStore::open_in_memory(HostContext::unconfigured())
        .await
        .expect("store");
    let id = store
        .create(&new_qr_code(SHOP, "blue-shirt"))
        .await
        .expect("create");
    let record = store.read(id).await.expect("read").expect("present");

    assert!(record.image_url.is_none());
    assert_eq!(
        store.generate_qrcode_destination_url(&record),
        Err(DerivationError::MissingHost)
    );
    // Scans redirect to the shop, so they do not need the app host.
    let destination = store.handle_code_scan(&record).await.expect("scan");
    assert!(destination.starts_with("https://my-shop.myshopify.com/"));
}
