//! Error handling.
//!
//! Errors are split by where they originate:
//! - **Storage**: SQLite failures, propagated to the caller unmodified
//! - **Validation**: malformed create/update requests, rejected at the boundary
//! - **Derivation**: app or storefront URLs that cannot be built
//!
//! A missing record is not an error; single-row reads return `Option`.

mod types;

// Re-export public API
pub use types::{DatabaseError, DerivationError, InitializationError, StoreError, ValidationError};
