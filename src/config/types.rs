//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DB_PATH, DEFAULT_HOST_SCHEME};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use qrcode_store::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/var/lib/qr/qr_codes_db.sqlite"),
///     host_name: Some("qr-app.example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Scheme of the app host (`https` unless tunnelling locally)
    pub host_scheme: String,

    /// Host name the app is served from; image and redirect URLs need it
    pub host_name: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            host_scheme: DEFAULT_HOST_SCHEME.to_string(),
            host_name: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
