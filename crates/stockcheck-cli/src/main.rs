use std::collections::HashMap;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stockcheck_db::{SightingWriter, TableName};
use stockcheck_service::{handle_event, InvocationEvent, StockChecker};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stockcheck-cli")]
#[command(about = "Best Buy store availability checker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one availability check and print the response JSON
    Check {
        /// ZIP or ZIP+4 to search around (e.g., 23223 or 23223-1234)
        #[arg(long)]
        zip_code: String,
        /// Comma-separated SKUs; the default catalog is used when omitted
        #[arg(long)]
        skus: Option<String>,
    },
    /// Show the most recently recorded sightings
    Recent {
        /// Only show sightings for this SKU
        #[arg(long)]
        sku: Option<String>,
        /// Maximum number of rows to show
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Run pending database migrations
    Migrate,
    /// Check database connectivity
    Ping,
}

/// Builds the invocation event for `check`. An empty `--skus` is passed
/// through so the service applies its default catalog.
fn check_event(zip_code: String, skus: Option<String>) -> InvocationEvent {
    let mut params = HashMap::from([("zip_code".to_string(), zip_code)]);
    if let Some(skus) = skus {
        params.insert("skus".to_string(), skus);
    }
    InvocationEvent::with_query(params)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("stockcheck-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = stockcheck_core::load_app_config().context("failed to load configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pool_config = stockcheck_db::PoolConfig::from_app_config(&config);
    let pool = stockcheck_db::connect_pool(&config.database_url, pool_config)
        .await
        .context("failed to connect to database")?;

    match command {
        Commands::Check { zip_code, skus } => {
            let writer = SightingWriter::new(pool, &config.table_name)?;
            let checker = StockChecker::from_app_config(&config, writer)?;
            let response = handle_event(&checker, check_event(zip_code, skus)).await;
            tracing::info!(
                status = response.status,
                number_of_skus = response.number_of_skus,
                "availability check finished"
            );
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.status != 200 {
                anyhow::bail!("availability check returned status {}", response.status);
            }
        }
        Commands::Recent { sku, limit } => {
            let table = TableName::parse(&config.table_name)?;
            let rows =
                stockcheck_db::list_recent_sightings(&pool, &table, sku.as_deref(), limit.max(1))
                    .await?;
            if rows.is_empty() {
                println!("no sightings recorded");
            }
            for row in rows {
                println!(
                    "{}  sku={} zip={} store={} ({}, {}) low_stock={} distance={}",
                    row.refresh_date,
                    row.sku,
                    row.zip_code,
                    row.store_id,
                    row.name,
                    row.city,
                    row.low_stock,
                    row.distance
                );
            }
        }
        Commands::Migrate => {
            let applied = stockcheck_db::run_migrations(&pool).await?;
            let table = TableName::parse(&config.table_name)?;
            stockcheck_db::ensure_sightings_table(&pool, &table).await?;
            tracing::info!(applied, table = %table, "migrations complete");
            println!("applied {applied} migration(s); table {table} ready");
        }
        Commands::Ping => {
            stockcheck_db::ping(&pool).await?;
            println!("database reachable");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
