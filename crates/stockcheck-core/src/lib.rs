pub mod app_config;
pub mod catalog;
pub mod config;
pub mod store;
pub mod validate;

pub use app_config::{AppConfig, Environment};
pub use catalog::DEFAULT_SKUS;
pub use config::{load_app_config, load_app_config_from_env};
pub use store::{PostalCode, StoreRecord};
pub use validate::{normalize_postal_code, normalize_product_ids, ValidationError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
