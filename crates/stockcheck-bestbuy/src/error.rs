use thiserror::Error;

/// Errors returned by the Best Buy availability client.
#[derive(Debug, Error)]
pub enum BestBuyError {
    /// `BEST_BUY_API_KEY` is unset; no request is attempted.
    #[error("Best Buy API key is not configured")]
    MissingApiKey,

    /// Network or TLS failure, or a non-2xx status. The request URL is
    /// stripped so the API key never reaches logs.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
