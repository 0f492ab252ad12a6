//! Shop URL normalization and Shopify id helpers.

use log::warn;
use url::Url;

use crate::error_handling::ValidationError;

/// Turns a stored shop domain into the base URL destinations are built on.
///
/// Shops are usually stored as bare domains (`my-shop.myshopify.com`), which
/// `Url::parse` rejects, so input without an explicit `scheme://` gets
/// `https://`. An explicit scheme must be http or https in any letter case;
/// the result always has a host.
pub fn normalize_shop_url(shop_domain: &str) -> Result<Url, ValidationError> {
    let trimmed = shop_domain.trim();
    let parsed = match trimmed.split_once("://") {
        Some((scheme, _))
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            Url::parse(trimmed)
        }
        Some((scheme, _)) => {
            warn!("Unsupported scheme '{scheme}' in shop domain {shop_domain}");
            return Err(ValidationError::InvalidShopDomain(shop_domain.to_string()));
        }
        None => Url::parse(&format!("https://{trimmed}")),
    };

    match parsed {
        Ok(url)
            if matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty()) =>
        {
            Ok(url)
        }
        Ok(_) => {
            warn!("Shop domain has no host: {shop_domain}");
            Err(ValidationError::InvalidShopDomain(shop_domain.to_string()))
        }
        Err(e) => {
            warn!("Invalid shop domain {shop_domain}: {e}");
            Err(ValidationError::InvalidShopDomain(shop_domain.to_string()))
        }
    }
}

/// Extracts the numeric id from a Shopify GID (`gid://shopify/ProductVariant/42` → `42`).
///
/// Cart permalinks only understand numeric variant ids. Plain ids pass through,
/// and a trailing slash is ignored.
pub fn extract_numeric_id(gid: &str) -> &str {
    gid.rsplit('/').find(|segment| !segment.is_empty()).unwrap_or(gid)
}
