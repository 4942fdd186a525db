//! Marketplace query CLI.

use clap::{Parser, Subcommand};
use marketplace_client::{collect_listings, Config, LcdClient, MarketplaceQueryClient};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marketplace", about = "Query the Aura NFT marketplace contract")]
struct Cli {
    /// Marketplace contract address (overrides MARKETPLACE_CONTRACT_ADDRESS).
    #[arg(long, global = true)]
    contract: Option<String>,

    /// LCD endpoint (overrides MARKETPLACE_LCD_URL).
    #[arg(long, global = true)]
    lcd_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Marketplace configuration.
    Config,
    /// Listings under an NFT contract.
    Listings {
        nft_contract: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        start_after: Option<String>,
        /// Follow the cursor until an empty page.
        #[arg(long)]
        all: bool,
    },
    /// A single listing.
    Listing { nft_contract: String, token_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(contract) = cli.contract {
        config.contract_address = contract;
    }
    if let Some(lcd_url) = cli.lcd_url {
        config.lcd_url = lcd_url;
    }
    config.validate()?;

    let lcd = LcdClient::new(&config.lcd_url, config.request_timeout())?;
    info!(contract = %config.contract_address, lcd = lcd.base_url(), "Configuration loaded");

    let client = MarketplaceQueryClient::new(lcd, config.contract_address);

    match cli.command {
        Command::Config => print_json(&client.get_config().await?)?,
        Command::Listing {
            nft_contract,
            token_id,
        } => print_json(&client.get_listing(&nft_contract, &token_id).await?)?,
        Command::Listings {
            nft_contract,
            limit,
            start_after,
            all: false,
        } => print_json(
            &client
                .list_listings_by_contract(&nft_contract, limit, start_after.as_deref())
                .await?,
        )?,
        Command::Listings {
            nft_contract,
            limit,
            start_after,
            all: true,
        } => print_json(&collect_listings(&client, &nft_contract, limit, start_after).await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
