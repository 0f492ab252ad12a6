//! Tests for the one-time schema gate under concurrent first use.
//!
//! The table is created with a plain `CREATE TABLE`, so a second creation
//! would fail the operation that triggered it.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use qrcode_store::storage::has_qr_codes_table;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_test_store_with_path, new_qr_code, SHOP};

#[tokio::test]
async fn test_two_concurrent_first_calls_create_schema_once() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = create_test_store_with_path(&dir.path().join("qr.sqlite")).await;
    assert!(!store.is_ready());

    let first = new_qr_code(SHOP, "blue-shirt");
    let second = new_qr_code(SHOP, "red-shirt");
    let (a, b) = tokio::join!(store.create(&first), store.create(&second));

    let a = a.expect("first create");
    let b = b.expect("second create");
    assert_ne!(a, b);
    assert_eq!(store.list(SHOP).await.expect("list").len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_spawned_first_calls_lose_no_writes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(create_test_store_with_path(&dir.path().join("qr.sqlite")).await);

    let tasks = (0..16).map(|i| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store
                .create(&new_qr_code(SHOP, &format!("handle-{i}")))
                .await
        })
    });

    let ids: HashSet<i64> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("create"))
        .collect();

    assert_eq!(ids.len(), 16);
    assert!(store.is_ready());
    assert_eq!(store.list(SHOP).await.expect("list").len(), 16);
}

#[tokio::test]
async fn test_concurrent_readers_wait_for_schema() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = create_test_store_with_path(&dir.path().join("qr.sqlite")).await;

    let (listed, read, deleted) = tokio::join!(store.list(SHOP), store.read(1), store.delete(1));

    assert!(listed.expect("list").is_empty());
    assert!(read.expect("read").is_none());
    assert!(!deleted.expect("delete"));
    assert!(has_qr_codes_table(store.pool()).await.expect("query"));
}
