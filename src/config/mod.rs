//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (table name, default paths, column limits)
//! - Library configuration and logging option types
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, CreateArgs, FieldArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
