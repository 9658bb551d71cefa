mod api;
mod middleware;

use std::sync::Arc;

use stockcheck_db::SightingWriter;
use stockcheck_service::StockChecker;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stockcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = stockcheck_db::PoolConfig::from_app_config(&config);
    let pool = stockcheck_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = stockcheck_db::run_migrations(&pool).await?;
    tracing::info!(applied, "migrations complete");

    let writer = SightingWriter::new(pool.clone(), &config.table_name)?;
    stockcheck_db::ensure_sightings_table(&pool, writer.table()).await?;
    let checker = StockChecker::from_app_config(&config, writer)?;
    let app = build_app(AppState {
        pool,
        checker: Arc::new(checker),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        table = %config.table_name,
        "stockcheck-server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
