//! QR codes: request and record types, the store, and URL derivation.
//!
//! - [`QrCodeStore`]: lazy schema setup, CRUD, scan accounting
//! - [`HostContext`]: app URLs (redirect endpoint, QR image)
//! - [`destination_url`]: storefront URL a scan redirects to

mod host;
mod models;
mod redirect;
mod shop_url;
mod store;

// Re-export public API
pub use host::HostContext;
pub use models::{NewQrCode, QrCodeRecord, QrCodeUpdate};
pub use redirect::destination_url;
pub use shop_url::{extract_numeric_id, normalize_shop_url};
pub use store::QrCodeStore;
