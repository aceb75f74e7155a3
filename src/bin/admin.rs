//! CLI administration tool for kortlink.
//!
//! Provides commands for inspecting and deleting short links and checking
//! the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all short links
//! cargo run --bin admin -- links list
//!
//! # Show one short link with its access count
//! cargo run --bin admin -- links show aB3dE-9z
//!
//! # Delete a short link (asks for confirmation unless --yes)
//! cargo run --bin admin -- links delete aB3dE-9z
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `kortlink::config`). `DATABASE_URL` or the `DB_*`
//! components are required; `REDIS_URL` is used so deletions evict the
//! cached mapping.

use kortlink::application::services::LinkService;
use kortlink::config::{self, Config};
use kortlink::domain::entities::ShortLink;
use kortlink::infrastructure::persistence::PgLinkRepository;
use kortlink::server::{build_cache, connect_pool};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing kortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete short links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all short links
    List,

    /// Show a short link and its access count
    Show {
        /// Short token
        token: String,
    },

    /// Delete a short link
    Delete {
        /// Short token
        token: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if config.store_backend != config::StoreBackend::Postgres {
        bail!("The admin tool only works against the postgres store");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short link commands through the link service.
async fn handle_links_action(action: LinksAction, config: &Config, pool: PgPool) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let cache = build_cache(config).await;
    let service = LinkService::new(repository, cache, config.link_service_settings());

    match action {
        LinksAction::List => list_links(&service).await?,
        LinksAction::Show { token } => show_link(&service, &token).await?,
        LinksAction::Delete { token, yes } => delete_link(&service, &token, yes).await?,
    }

    Ok(())
}

/// Lists all short links.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   ID   Token     Hits     Created           Original URL
///   ──────────────────────────────────────────────────────────────────────
///   1    aB3dE-9z  42       2025-01-15 10:30  https://example.com/a/long/path
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No short links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<9} {:<8} {:<17} {}",
        "ID".bright_white().bold(),
        "Token".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<9} {:<8} {:<17} {}",
            link.id.to_string().bright_black(),
            link.short_url.cyan(),
            link.access_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_link(link: &ShortLink) {
    println!("  Token:        {}", link.short_url.cyan());
    println!("  ID:           {}", link.id.to_string().bright_black());
    println!("  Original URL: {}", link.original_url.bright_white());
    println!(
        "  Hits:         {}",
        link.access_count.to_string().bright_green().bold()
    );
    println!("  Created:      {}", link.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated:      {}", link.updated_at.format("%Y-%m-%d %H:%M:%S"));
}

/// Shows a single short link with its statistics.
async fn show_link(service: &LinkService, token: &str) -> Result<()> {
    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();

    let link = service
        .get_stats(token)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", token, e))?;

    print_link(&link);
    println!();

    Ok(())
}

/// Deletes a short link after confirmation.
///
/// Deletion goes through the link service, so the cached mapping is evicted
/// as well when a cache is configured.
async fn delete_link(service: &LinkService, token: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = service
        .get_stats(token)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", token, e))?;

    print_link(&link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_short_link(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Short link deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();
            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
