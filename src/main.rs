mod commands;
mod init;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wabulk_core::config;

#[derive(Parser)]
#[command(
    name = "wabulk",
    version,
    about = "Bulk WhatsApp Web sender driven over WebDriver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive first-run setup.
    Init,
    /// Open WhatsApp Web and wait for the QR login to complete.
    Login,
    /// Send a message to a list of numbers, one by one.
    Send {
        /// Message body.
        #[arg(short, long)]
        message: String,
        /// Optional media attachment.
        #[arg(long)]
        media: Option<PathBuf>,
        /// Contacts CSV to send to (default: the configured list).
        #[arg(long)]
        contacts: Option<String>,
        /// Additional number(s) appended to the target list. Repeatable.
        #[arg(short, long = "number")]
        numbers: Vec<String>,
    },
    /// Manage the contact list.
    Contacts {
        #[command(subcommand)]
        action: ContactsAction,
    },
    /// Check driver reachability and configuration.
    Status,
}

#[derive(Subcommand)]
pub enum ContactsAction {
    /// Add a single number.
    Add {
        number: String,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print the contact table.
    List,
    /// Remove the contact at a zero-based index.
    Remove { index: usize },
    /// Drop all contacts.
    Clear,
    /// Replace the contact list with rows from a CSV file.
    Import { path: String },
    /// Write the contact list to a CSV file.
    Export { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.wabulk.log_level)),
        )
        .init();

    match cli.command {
        Commands::Init => init::run(&cli.config).await,
        Commands::Login => commands::login::run(&cfg).await,
        Commands::Send {
            message,
            media,
            contacts,
            numbers,
        } => commands::send::run(&cfg, message, media, contacts, numbers).await,
        Commands::Contacts { action } => commands::contacts::run(&cfg, action),
        Commands::Status => commands::status::run(&cli.config, &cfg).await,
    }
}
