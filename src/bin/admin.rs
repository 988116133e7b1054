//! CLI administration tool for slug-registry.
//!
//! Registers and inspects slugs directly against the database, through the
//! same registry the HTTP service uses.
//!
//! # Usage
//!
//! ```bash
//! # Register a slug
//! cargo run --bin admin -- create stackoverflow https://stackoverflow.com
//!
//! # Show a slug without counting a hit
//! cargo run --bin admin -- show stackoverflow
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `DB_*` components (see `slug_registry::config`)

use slug_registry::application::services::SlugRegistry;
use slug_registry::config::{load_database_url, mask_connection_string};
use slug_registry::domain::entities::SlugRecord;
use slug_registry::error::RegistryError;
use slug_registry::infrastructure::persistence::PgSlugStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slug-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Register a new slug
    Create {
        /// Slug (1-30 bytes)
        slug: String,

        /// Redirect target
        target_url: String,
    },

    /// Show a slug's record
    Show {
        /// Slug to inspect
        slug: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

    let database_url = load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    let registry = SlugRegistry::new(Arc::new(PgSlugStore::new(Arc::new(pool))));

    match cli.command {
        Commands::Create { slug, target_url } => create(&registry, slug, target_url).await,
        Commands::Show { slug } => show(&registry, &slug).await,
        Commands::Db { action } => match action {
            DbAction::Check => check(&registry).await,
        },
    }
}

async fn create(registry: &SlugRegistry, slug: String, target_url: String) -> Result<()> {
    match registry.create(slug, target_url).await {
        Ok(record) => {
            println!("{}", "Slug created".green().bold());
            print_record(&record);
            Ok(())
        }
        Err(RegistryError::DuplicateSlug { slug }) => anyhow::bail!("slug already exists: {slug}"),
        Err(e) => Err(e.into()),
    }
}

async fn show(registry: &SlugRegistry, slug: &str) -> Result<()> {
    match registry.lookup(slug).await {
        Ok(record) => {
            print_record(&record);
            Ok(())
        }
        Err(RegistryError::NotFound { slug }) => anyhow::bail!("slug not found: {slug}"),
        Err(e) => Err(e.into()),
    }
}

async fn check(registry: &SlugRegistry) -> Result<()> {
    registry
        .health_check()
        .await
        .context("Database check failed")?;
    println!("{}", "Database connection OK".green());
    Ok(())
}

fn print_record(record: &SlugRecord) {
    println!("  {:<10} {}", "Slug:".bright_black(), record.slug.bold());
    println!("  {:<10} {}", "Target:".bright_black(), record.target_url);
    println!(
        "  {:<10} {}",
        "Created:".bright_black(),
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  {:<10} {}", "Hits:".bright_black(), record.hits.to_string().cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use slug_registry::infrastructure::persistence::MemorySlugStore;

    fn memory_registry() -> SlugRegistry {
        SlugRegistry::new(Arc::new(MemorySlugStore::new()))
    }

    #[tokio::test]
    async fn test_create_duplicate_returns_error() {
        let registry = memory_registry();

        create(&registry, "dup".into(), "https://a.com".into())
            .await
            .unwrap();
        let err = create(&registry, "dup".into(), "https://b.com".into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "slug already exists: dup");
    }

    #[tokio::test]
    async fn test_show_missing_returns_error() {
        let err = show(&memory_registry(), "ghost").await.unwrap_err();

        assert_eq!(err.to_string(), "slug not found: ghost");
    }
}
