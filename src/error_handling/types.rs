//! Error type definitions.
//!
//! This module defines all error types used throughout the store.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Rejected input on create/update, caught before any statement is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace only.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A field exceeded the column width of the `qr_codes` table.
    #[error("Field '{field}' exceeds {max} characters")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum accepted length.
        max: usize,
    },

    /// The shop domain cannot be turned into an http(s) base URL.
    #[error("Invalid shop domain: {0}")]
    InvalidShopDomain(String),
}

/// Failure to build an app or storefront URL.
///
/// Swallowed (and logged) when deriving image URLs on read; surfaced to the
/// caller by the destination and scan operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// No host name is configured for the app.
    #[error("App host name is not configured")]
    MissingHost,

    /// A stored shop domain cannot serve as the storefront base URL.
    #[error("Shop domain '{0}' is not a usable storefront URL")]
    InvalidShopDomain(String),

    /// The assembled string is not a valid URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The string that failed to parse.
        url: String,
        /// Underlying parser error.
        #[source]
        source: url::ParseError,
    },
}

/// Error returned by [`crate::QrCodeStore`] operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying read or write failed; propagated unmodified.
    #[error(transparent)]
    Storage(#[from] DatabaseError),

    /// The request was rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A URL could not be derived for the record.
    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Storage(DatabaseError::SqlError(e))
    }
}
