//! QR code request and record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_FIELD_LENGTH, MAX_SHOP_DOMAIN_LENGTH, MAX_TITLE_LENGTH};
use crate::error_handling::ValidationError;
use crate::qrcode::shop_url::normalize_shop_url;

/// Fields of a QR code to create.
///
/// Deserializes from the camelCase JSON the admin UI posts; `goToCheckout` may
/// be omitted and defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQrCode {
    /// Owning storefront, usually `my-shop.myshopify.com`.
    pub shop_domain: String,
    /// Label shown in the admin.
    pub title: String,
    /// Shopify product GID.
    pub product_id: String,
    /// Shopify discount GID.
    pub discount_id: String,
    /// Shopify variant GID or numeric id; put in the cart on checkout scans.
    pub variant_id: String,
    /// Product handle used for product-page redirects.
    pub handle: String,
    /// Redirect to a prefilled cart instead of the product page.
    #[serde(default)]
    pub go_to_checkout: bool,
}

impl NewQrCode {
    /// Checks required fields, column widths and that the shop domain can
    /// serve as a redirect base URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("shopDomain", &self.shop_domain, MAX_SHOP_DOMAIN_LENGTH)?;
        normalize_shop_url(&self.shop_domain)?;
        self.as_update_fields().validate()
    }

    fn as_update_fields(&self) -> QrCodeUpdate {
        QrCodeUpdate {
            title: self.title.clone(),
            product_id: self.product_id.clone(),
            discount_id: self.discount_id.clone(),
            variant_id: self.variant_id.clone(),
            handle: self.handle.clone(),
            go_to_checkout: self.go_to_checkout,
        }
    }
}

/// Replacement values for every mutable field of a QR code.
///
/// There is no partial update: each field overwrites the stored value. The
/// owning shop is fixed at creation and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeUpdate {
    /// Label shown in the admin.
    pub title: String,
    /// Shopify product GID.
    pub product_id: String,
    /// Shopify discount GID.
    pub discount_id: String,
    /// Shopify variant GID or numeric id; put in the cart on checkout scans.
    pub variant_id: String,
    /// Product handle used for product-page redirects.
    pub handle: String,
    /// Redirect to a prefilled cart instead of the product page.
    #[serde(default)]
    pub go_to_checkout: bool,
}

impl QrCodeUpdate {
    /// Checks required fields and column widths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title, MAX_TITLE_LENGTH)?;
        require("productId", &self.product_id, MAX_FIELD_LENGTH)?;
        require("discountId", &self.discount_id, MAX_FIELD_LENGTH)?;
        require("variantId", &self.variant_id, MAX_FIELD_LENGTH)?;
        require("handle", &self.handle, MAX_FIELD_LENGTH)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

/// A stored QR code, as returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeRecord {
    /// Row id, assigned on insert and never reused.
    pub id: i64,
    /// Owning storefront, usually `my-shop.myshopify.com`.
    pub shop_domain: String,
    /// Label shown in the admin.
    pub title: String,
    /// Shopify product GID.
    pub product_id: String,
    /// Shopify discount GID.
    pub discount_id: String,
    /// Shopify variant GID or numeric id; put in the cart on checkout scans.
    pub variant_id: String,
    /// Product handle used for product-page redirects.
    pub handle: String,
    /// Redirect to a prefilled cart instead of the product page.
    pub go_to_checkout: bool,
    /// Number of recorded scans.
    pub scans: i64,
    /// Orders attributed to this code; maintained outside the store.
    pub conversions: i64,
    /// Milliseconds since Unix epoch.
    pub created_at_ms: i64,
    /// Derived on read; `None` when the app host is not configured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    /// Redeemable discount code resolved from `discount_id` by the caller.
    /// Never persisted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub discount_code: Option<String>,
}

impl QrCodeRecord {
    /// Creation time, if `created_at_ms` is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at_ms)
    }

    /// Attaches the discount code to apply when this code is scanned.
    /// Blank codes are treated as no discount.
    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.discount_code = if code.trim().is_empty() {
            None
        } else {
            Some(code)
        };
        self
    }
}
