use stockcheck_bestbuy::BestBuyError;
use stockcheck_core::ValidationError;
use stockcheck_db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Required configuration is missing; raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("availability lookup failed for sku {sku}: {source}")]
    Fetch {
        sku: String,
        #[source]
        source: BestBuyError,
    },

    #[error("failed to record stock for sku {sku}: {source}")]
    Record {
        sku: String,
        #[source]
        source: DbError,
    },
}
