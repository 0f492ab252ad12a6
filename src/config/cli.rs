//! Command-line options for the `qrcode_store` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DB_PATH, DEFAULT_HOST_SCHEME};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::qrcode::{NewQrCode, QrCodeUpdate};

/// Manage QR codes stored for a Shopify app.
#[derive(Debug, Parser)]
#[command(name = "qrcode_store", version, about)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "QR_CODES_DB_PATH", default_value = DB_PATH, global = true)]
    pub db_path: PathBuf,

    /// Scheme of the app host
    #[arg(long, env = "HOST_SCHEME", default_value = DEFAULT_HOST_SCHEME, global = true)]
    pub host_scheme: String,

    /// Host name the app is served from
    #[arg(long = "host", env = "HOST", global = true)]
    pub host_name: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Library configuration carried by the global options.
    pub fn config(&self) -> Config {
        Config {
            db_path: self.db_path.clone(),
            host_scheme: self.host_scheme.clone(),
            host_name: self.host_name.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

/// Store operations exposed on the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a QR code and print its id
    Create(CreateArgs),
    /// Overwrite the fields of an existing QR code
    Update {
        /// QR code id
        id: i64,
        /// New field values
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// List the QR codes of a shop as JSON
    List {
        /// Shop domain, matched exactly
        shop_domain: String,
    },
    /// Print one QR code as JSON
    Show {
        /// QR code id
        id: i64,
    },
    /// Delete a QR code
    Delete {
        /// QR code id
        id: i64,
    },
    /// Print the URL to encode into the QR image
    Url {
        /// QR code id
        id: i64,
    },
    /// Record a scan and print the storefront redirect
    Scan {
        /// QR code id
        id: i64,
        /// Discount code to apply on the storefront
        #[arg(long)]
        discount_code: Option<String>,
    },
}

/// Arguments of `create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Owning shop domain
    pub shop_domain: String,
    /// Field values
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Mutable QR code fields shared by `create` and `update`.
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Label shown in the admin
    #[arg(long)]
    pub title: String,
    /// Shopify product GID
    #[arg(long)]
    pub product_id: String,
    /// Shopify discount GID
    #[arg(long)]
    pub discount_id: String,
    /// Shopify variant GID
    #[arg(long)]
    pub variant_id: String,
    /// Product handle
    #[arg(long)]
    pub handle: String,
    /// Redirect to a prefilled cart instead of the product page
    #[arg(long)]
    pub go_to_checkout: bool,
}

impl From<FieldArgs> for QrCodeUpdate {
    fn from(args: FieldArgs) -> Self {
        QrCodeUpdate {
            title: args.title,
            product_id: args.product_id,
            discount_id: args.discount_id,
            variant_id: args.variant_id,
            handle: args.handle,
            go_to_checkout: args.go_to_checkout,
        }
    }
}

impl From<CreateArgs> for NewQrCode {
    fn from(args: CreateArgs) -> Self {
        let fields = args.fields;
        NewQrCode {
            shop_domain: args.shop_domain,
            title: fields.title,
            product_id: fields.product_id,
            discount_id: fields.discount_id,
            variant_id: fields.variant_id,
            handle: fields.handle,
            go_to_checkout: fields.go_to_checkout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
