//! Lambda runtime host. The pool and Best Buy client are built once per
//! cold start and shared by every invocation the container serves.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use stockcheck_db::SightingWriter;
use stockcheck_service::{handle_event, InvocationEvent, InvocationResponse, StockChecker};
use tracing_subscriber::EnvFilter;

type Checker = StockChecker<SightingWriter>;

/// Reads the invocation payload. A payload whose `queryStringParameters`
/// is not a string map is answered like an absent map.
fn parse_event(payload: serde_json::Value) -> Result<InvocationEvent, InvocationResponse> {
    serde_json::from_value(payload).map_err(|error| {
        tracing::warn!(error = %error, "unreadable invocation payload");
        InvocationResponse::missing_parameters()
    })
}

async fn handle_request(
    checker: &Checker,
    event: LambdaEvent<serde_json::Value>,
) -> Result<InvocationResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "invocation start");
    match parse_event(event.payload) {
        Ok(parsed) => Ok(handle_event(checker, parsed).await),
        Err(response) => Ok(response),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = stockcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .without_time()
        .init();

    let pool_config = stockcheck_db::PoolConfig::from_app_config(&config);
    let pool = stockcheck_db::connect_pool(&config.database_url, pool_config).await?;
    let writer = SightingWriter::new(pool, &config.table_name)?;
    stockcheck_db::ensure_sightings_table(writer.pool(), writer.table()).await?;
    let checker = Arc::new(StockChecker::from_app_config(&config, writer)?);
    tracing::info!(env = %config.env, table = %config.table_name, "stockcheck-lambda ready");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let checker = Arc::clone(&checker);
        async move { handle_request(&checker, event).await }
    }))
    .await
}
