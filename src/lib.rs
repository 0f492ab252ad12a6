//! qrcode_store library: persistence for Shopify storefront QR codes
//!
//! Maps QR codes to storefront destinations (a product page, a discount
//! applied before the product page, or a prefilled cart) and counts scans.
//! Everything lives in one SQLite table that the store creates on first use.
//!
//! # Example
//!
//! ```no_run
//! use qrcode_store::initialization::init_store;
//! use qrcode_store::{Config, NewQrCode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     host_name: Some("qr-app.example.com".to_string()),
//!     ..Default::default()
//! };
//! let store = init_store(&config).await?;
//!
//! let id = store
//!     .create(&NewQrCode {
//!         shop_domain: "my-shop.myshopify.com".to_string(),
//!         title: "Spring catalog".to_string(),
//!         product_id: "gid://shopify/Product/1".to_string(),
//!         discount_id: "gid://shopify/DiscountCodeNode/2".to_string(),
//!         variant_id: "gid://shopify/ProductVariant/3".to_string(),
//!         handle: "blue-shirt".to_string(),
//!         go_to_checkout: false,
//!     })
//!     .await?;
//!
//! if let Some(code) = store.read(id).await? {
//!     println!("Encode {}", store.generate_qrcode_destination_url(&code)?);
//!     let target = store.handle_code_scan(&code.with_discount_code("SAVE10")).await?;
//!     println!("Scan redirects to {target}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod qrcode;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DatabaseError, DerivationError, StoreError, ValidationError};
pub use qrcode::{HostContext, NewQrCode, QrCodeRecord, QrCodeStore, QrCodeUpdate};
