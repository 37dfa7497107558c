//! Shared shopping list Telegram bot - CLI entry point.
//!
//! Provides the long-running bot itself plus a configuration status check.

mod app;
mod bot;
mod cli;
mod config;
mod error;
mod list;
mod render;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use store::ListStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bot => {
            let config = Config::load(None).context("Failed to load configuration")?;
            bot::run(config).await.context("Failed to run Telegram bot")?;
        }
        Commands::Status => {
            print_status();
        }
    }

    Ok(())
}

/// Print configuration status.
fn print_status() {
    println!("📊 Shared List Bot Status\n");

    match Config::load(None) {
        Ok(config) => {
            let items = ListStore::new(config.list_path.clone()).load();

            println!("✅ Configuration: Found");
            println!("   Hostname: {}", config.hostname);
            println!("   Snapshot: {}", config.list_path.display());
            println!("   Items:    {}", items.len());
        }
        Err(e) => {
            println!("❌ Configuration: Not found or invalid");
            println!("   Error: {}", e);
            println!();
            println!("Create config at ~/.shopping-list-bot/config.json:");
            println!(r#"  {{"bot_token": "YOUR_BOT_TOKEN"}}"#);
            println!("or set the TELEGRAM_BOT_TOKEN environment variable.");
        }
    }
}
