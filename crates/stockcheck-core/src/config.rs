use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_TABLE_NAME: &str = "stock_sightings";
pub const DEFAULT_BEST_BUY_BASE_URL: &str = "https://api.bestbuy.com/v1/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = require("DATABASE_URL")?;

    let env = parse_environment(&or_default("STOCKCHECK_ENV", "development"))?;
    let bind_addr = parse_addr("STOCKCHECK_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOCKCHECK_LOG_LEVEL", "info");

    let table_name = or_default("TABLE_NAME", DEFAULT_TABLE_NAME);
    if !is_sql_identifier(&table_name) {
        return Err(ConfigError::InvalidEnvVar {
            var: "TABLE_NAME".to_string(),
            reason: format!("\"{table_name}\" is not a plain SQL identifier"),
        });
    }

    let best_buy_api_key = lookup("BEST_BUY_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let best_buy_base_url = or_default("STOCKCHECK_BESTBUY_BASE_URL", DEFAULT_BEST_BUY_BASE_URL);

    let request_timeout_secs = parse_u64("STOCKCHECK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOCKCHECK_USER_AGENT", "stockcheck/0.1 (availability-check)");

    let db_max_connections = parse_u32("STOCKCHECK_DB_MAX_CONNECTIONS", "5")?;
    let db_min_connections = parse_u32("STOCKCHECK_DB_MIN_CONNECTIONS", "0")?;
    let db_acquire_timeout_secs = parse_u64("STOCKCHECK_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        table_name,
        best_buy_api_key,
        best_buy_base_url,
        request_timeout_secs,
        user_agent,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for values other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOCKCHECK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Table names are interpolated into SQL, so only `[A-Za-z_][A-Za-z0-9_]*`
/// up to Postgres' 63-byte identifier limit is accepted.
#[must_use]
pub fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= 63
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
