//! CLI argument parsing with subcommands.

use clap::{Parser, Subcommand};

/// Shared shopping list Telegram bot.
#[derive(Parser)]
#[command(name = "shopping-list-telegram")]
#[command(about = "Telegram bot managing a shared shopping list")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot
    Bot,

    /// Show current configuration status
    Status,
}
