//! CLI administration tool for shortbox.
//!
//! Provides read-only inspection of a data directory without going through
//! the HTTP surface. The system has no delete or edit operations, so
//! neither does this tool.
//!
//! # Usage
//!
//! ```bash
//! # List all registered mappings
//! cargo run --bin admin -- links list
//!
//! # Show the most recent audit records
//! cargo run --bin admin -- logs list --tail 20
//!
//! # View summary counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_DIR` (optional, default `data`): directory holding the store
//!   files; `--data-dir` overrides it

use shortbox::domain::entities::UrlMapping;
use shortbox::domain::repositories::{AuditLog, RegistryStore};
use shortbox::infrastructure::persistence::{FileAuditLog, FileRegistryStore};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting a shortbox data directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory holding the store files (falls back to $DATA_DIR, then "data")
    #[arg(short, long)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect registered URL mappings
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Inspect the audit log
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },

    /// Show summary counts
    Stats,
}

/// Mapping inspection subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all mappings
    List,
}

/// Audit log subcommands.
#[derive(Subcommand)]
enum LogsAction {
    /// List audit records
    List {
        /// Show only the last N records
        #[arg(short, long)]
        tail: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var("DATA_DIR").ok())
        .unwrap_or_else(|| "data".to_string());

    match cli.command {
        Commands::Links { action } => match action {
            LinksAction::List => list_links(&data_dir).await?,
        },
        Commands::Logs { action } => match action {
            LogsAction::List { tail } => list_logs(&data_dir, tail).await?,
        },
        Commands::Stats => show_stats(&data_dir).await?,
    }

    Ok(())
}

/// Lists all registered mappings with their expiry state.
///
/// # Output Format
///
/// ```text
/// 🔗 URL Mappings
///
///   Code     URL                                      Expires               Redirects  Status
///   ─────────────────────────────────────────────────────────────────────────────────────────
///   abc123   https://example.com                      2024-05-01 12:30      3          ACTIVE
/// ```
async fn list_links(data_dir: &str) -> Result<()> {
    println!("{}", "🔗 URL Mappings".bright_blue().bold());
    println!();

    let registry = FileRegistryStore::new(data_dir);
    let mappings = registry
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load registry: {:?}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No URLs shortened yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<40} {:<20} {:<10} {:<8}",
        "Code".bright_white().bold(),
        "URL".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Redirects".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    let now = Utc::now();
    for mapping in &mappings {
        println!(
            "  {:<8} {:<40} {:<20} {:<10} {}",
            mapping.shortcode.cyan(),
            truncated(&mapping.url, 40),
            mapping
                .expires_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.redirect_count.to_string().bright_black(),
            expiry_status(mapping, now)
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists audit records, newest last, optionally limited to the tail.
async fn list_logs(data_dir: &str, tail: Option<usize>) -> Result<()> {
    println!("{}", "📋 Audit Log".bright_blue().bold());
    println!();

    let audit = FileAuditLog::new(data_dir);
    let records = audit
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load audit log: {:?}", e))?;

    if records.is_empty() {
        println!("{}", "  No events recorded".yellow());
        return Ok(());
    }

    let total = records.len();
    let skip = tail.map_or(0, |n| total.saturating_sub(n));

    for record in records.iter().skip(skip) {
        println!(
            "  {} {:<18} {}",
            record
                .timestamp
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            format!("{:?}", record.event_type).cyan(),
            record.details.to_string().bright_white()
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        (total - skip).to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays summary counts over the registry and audit log.
async fn show_stats(data_dir: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let registry = FileRegistryStore::new(data_dir);
    let audit = FileAuditLog::new(data_dir);

    let mappings = registry
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load registry: {:?}", e))?;
    let records = audit
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load audit log: {:?}", e))?;

    let now = Utc::now();
    let expired = mappings.iter().filter(|m| m.is_expired_at(now)).count();
    let redirects: u64 = mappings.iter().map(|m| m.redirect_count).sum();

    println!(
        "  Mappings:        {}",
        mappings.len().to_string().bright_green().bold()
    );
    println!(
        "  Active:          {}",
        (mappings.len() - expired).to_string().bright_green().bold()
    );
    println!(
        "  Expired:         {}",
        expired.to_string().bright_yellow().bold()
    );
    println!(
        "  Total redirects: {}",
        redirects.to_string().bright_green().bold()
    );
    println!(
        "  Audit records:   {}",
        records.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

fn expiry_status(mapping: &UrlMapping, now: chrono::DateTime<Utc>) -> ColoredString {
    if mapping.is_expired_at(now) {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    }
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        format!("{text:<max$}")
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{cut}...")
    }
}
