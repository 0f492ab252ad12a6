//! Main application entry point (CLI binary).
//!
//! A thin operator tool over the `qrcode_store` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All store behavior is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process;

use qrcode_store::config::{Cli, Command};
use qrcode_store::initialization::{init_logger_with, init_store};
use qrcode_store::{NewQrCode, QrCodeRecord, QrCodeStore, QrCodeUpdate};

#[tokio::main]
async fn main() -> Result<()> {
    // HOST and HOST_SCHEME usually live in the app's .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let store = init_store(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;

    if let Err(e) = run(&store, cli.command).await {
        eprintln!("qrcode_store error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(store: &QrCodeStore, command: Command) -> Result<()> {
    match command {
        Command::Create(args) => {
            let input = NewQrCode::from(args);
            let id = store.create(&input).await.context("Failed to create QR code")?;
            println!("{id}");
        }
        Command::Update { id, fields } => {
            let input = QrCodeUpdate::from(fields);
            if !store.update(id, &input).await.context("Failed to update QR code")? {
                bail!("QR code {id} not found");
            }
            println!("Updated QR code {id}");
        }
        Command::List { shop_domain } => {
            let records = store
                .list(&shop_domain)
                .await
                .context("Failed to list QR codes")?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Show { id } => {
            let record = read_existing(store, id).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Delete { id } => {
            if !store.delete(id).await.context("Failed to delete QR code")? {
                bail!("QR code {id} not found");
            }
            println!("Deleted QR code {id}");
        }
        Command::Url { id } => {
            let record = read_existing(store, id).await?;
            let url = store
                .generate_qrcode_destination_url(&record)
                .context("Set --host or HOST to the app host name")?;
            println!("{url}");
        }
        Command::Scan { id, discount_code } => {
            let mut record = read_existing(store, id).await?;
            if let Some(code) = discount_code {
                record = record.with_discount_code(code);
            }
            let destination = store
                .handle_code_scan(&record)
                .await
                .context("Failed to handle scan")?;
            println!("{destination}");
        }
    }
    Ok(())
}

async fn read_existing(store: &QrCodeStore, id: i64) -> Result<QrCodeRecord> {
    match store.read(id).await.context("Failed to read QR code")? {
        Some(record) => Ok(record),
        None => bail!("QR code {id} not found"),
    }
}
