//! Configuration constants.
//!
//! Defaults and limits shared by the store, the storage layer and the CLI.

/// Default SQLite file, relative to the working directory.
pub const DB_PATH: &str = "./qr_codes_db.sqlite";

/// Name of the single table backing the store.
pub const QR_CODES_TABLE: &str = "qr_codes";

/// Quantity placed in the cart when a checkout QR code is scanned.
pub const DEFAULT_PURCHASE_QUANTITY: u32 = 1;

/// Scheme used for app URLs when none is configured.
pub const DEFAULT_HOST_SCHEME: &str = "https";

/// Column width of `shop_domain`.
pub const MAX_SHOP_DOMAIN_LENGTH: usize = 511;
/// Column width of `title`.
pub const MAX_TITLE_LENGTH: usize = 511;
/// Column width of the catalog identifier and handle columns.
pub const MAX_FIELD_LENGTH: usize = 255;

// App routes
/// Path prefix of the redirect endpoint encoded into QR images.
pub const QRCODE_REDIRECT_PATH: &str = "/qrcode";
/// Path prefix of the QR image endpoint.
pub const QRCODE_IMAGE_PATH: &str = "/api/qrcode";
