//! Storefront destinations for scanned QR codes.
//!
//! Two policies, picked by `go_to_checkout`:
//! - checkout: `/cart/{variant}:{quantity}`, discount as `?discount=`
//! - product view: `/products/{handle}`, or `/discount/{code}?redirect=/products/{handle}`
//!   so the storefront applies the discount before forwarding

use url::Url;

use crate::config::DEFAULT_PURCHASE_QUANTITY;
use crate::qrcode::models::QrCodeRecord;
use crate::qrcode::shop_url::{extract_numeric_id, normalize_shop_url};
use crate::error_handling::DerivationError;

/// Computes the final storefront URL for `record`.
pub fn destination_url(record: &QrCodeRecord) -> Result<String, DerivationError> {
    let base = normalize_shop_url(&record.shop_domain)
        .map_err(|_| DerivationError::InvalidShopDomain(record.shop_domain.clone()))?;
    let discount = record
        .discount_code
        .as_deref()
        .filter(|code| !code.trim().is_empty());

    let url = if record.go_to_checkout {
        checkout_url(base, &record.variant_id, discount)
    } else {
        product_view_url(base, &record.handle, discount)
    };
    Ok(url.into())
}

fn checkout_url(mut url: Url, variant_id: &str, discount_code: Option<&str>) -> Url {
    url.set_path(&format!(
        "/cart/{}:{}",
        extract_numeric_id(variant_id),
        DEFAULT_PURCHASE_QUANTITY
    ));

    if let Some(code) = discount_code {
        url.query_pairs_mut().append_pair("discount", code);
    }
    url
}

fn product_view_url(mut url: Url, handle: &str, discount_code: Option<&str>) -> Url {
    let product_path = format!("/products/{handle}");

    match discount_code {
        Some(code) => {
            url.set_path(&format!("/discount/{code}"));
            url.query_pairs_mut().append_pair("redirect", &product_path);
        }
        None => url.set_path(&product_path),
    }
    url
}
