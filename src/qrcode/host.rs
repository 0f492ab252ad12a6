//! App host context.
//!
//! QR images encode URLs on the app's own host, not the shop's. The scheme and
//! host name come from the Shopify app configuration (`HOST_SCHEME`, `HOST`).

use url::Url;

use crate::config::{DEFAULT_HOST_SCHEME, QRCODE_IMAGE_PATH, QRCODE_REDIRECT_PATH};
use crate::error_handling::DerivationError;

/// Scheme and host name the app is reachable on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    scheme: String,
    host_name: Option<String>,
}

impl HostContext {
    /// Context for `scheme://host_name`; `None` leaves the host unconfigured.
    pub fn new(scheme: impl Into<String>, host_name: Option<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host_name,
        }
    }

    /// Context with no host name; every URL derivation fails with `MissingHost`.
    pub fn unconfigured() -> Self {
        Self::new(DEFAULT_HOST_SCHEME, None)
    }

    /// URL scheme of the app.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host name of the app, if configured.
    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    /// Builds `{scheme}://{host}{path}`.
    pub fn app_url(&self, path: &str) -> Result<String, DerivationError> {
        let host = self
            .host_name
            .as_deref()
            .map(|h| h.trim().trim_end_matches('/'))
            .filter(|h| !h.is_empty())
            .ok_or(DerivationError::MissingHost)?;

        let raw = format!("{}://{}{}", self.scheme, host, path);
        match Url::parse(&raw) {
            Ok(url) => Ok(url.into()),
            Err(source) => Err(DerivationError::InvalidUrl { url: raw, source }),
        }
    }

    /// Redirect endpoint encoded into the QR image: `/qrcode/{id}`.
    pub fn redirect_endpoint(&self, id: i64) -> Result<String, DerivationError> {
        self.app_url(&format!("{QRCODE_REDIRECT_PATH}/{id}"))
    }

    /// Image endpoint: `/api/qrcode/{id}/image`.
    pub fn image_url(&self, id: i64) -> Result<String, DerivationError> {
        self.app_url(&format!("{QRCODE_IMAGE_PATH}/{id}/image"))
    }
}
