//! HTTP client for the Best Buy store-availability endpoint.
//!
//! One request per SKU, no retries. Non-2xx statuses surface as
//! [`BestBuyError::Http`] and malformed bodies as [`BestBuyError::Deserialize`].

use std::time::Duration;

use reqwest::{Client, Url};
use stockcheck_core::{AppConfig, PostalCode, StoreRecord};

use crate::error::BestBuyError;
use crate::types::StoresResponse;

/// Connection settings for [`BestBuyClient`], taken from [`AppConfig`] once at
/// startup rather than read from the environment on every call.
#[derive(Clone)]
pub struct BestBuyConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl BestBuyConfig {
    /// # Errors
    ///
    /// Returns [`BestBuyError::MissingApiKey`] when no key is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, BestBuyError> {
        let api_key = config
            .best_buy_api_key
            .clone()
            .ok_or(BestBuyError::MissingApiKey)?;
        Ok(Self {
            api_key,
            base_url: config.best_buy_base_url.clone(),
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl std::fmt::Debug for BestBuyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestBuyConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for the Best Buy products API.
///
/// Use [`BestBuyConfig::base_url`] to point at a mock server in tests.
pub struct BestBuyClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl BestBuyClient {
    /// Builds a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`BestBuyError::MissingApiKey`] if `api_key` is blank.
    /// - [`BestBuyError::InvalidBaseUrl`] if `base_url` does not parse or
    ///   cannot carry path segments.
    /// - [`BestBuyError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(config: &BestBuyConfig) -> Result<Self, BestBuyError> {
        if config.api_key.trim().is_empty() {
            return Err(BestBuyError::MissingApiKey);
        }

        // Exactly one trailing slash so path segments append after `/v1`
        // instead of replacing it.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| BestBuyError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BestBuyError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    /// Looks up stores near `postal_code` that carry `sku`.
    ///
    /// Returns an empty list when the response has no `stores` array or an
    /// empty one. The search radius is the API's own default.
    ///
    /// # Errors
    ///
    /// - [`BestBuyError::Http`] on network failure or a non-2xx status.
    /// - [`BestBuyError::Deserialize`] if the body does not match
    ///   [`StoresResponse`].
    pub async fn fetch_availability(
        &self,
        postal_code: PostalCode,
        sku: &str,
    ) -> Result<Vec<StoreRecord>, BestBuyError> {
        let url = self.stores_url(postal_code, sku);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        let parsed: StoresResponse =
            serde_json::from_str(&body).map_err(|e| BestBuyError::Deserialize {
                context: format!("stores(sku={sku}, postalCode={postal_code})"),
                source: e,
            })?;
        let stores = parsed.into_stores();

        tracing::debug!(
            sku,
            zip_code = %postal_code,
            stores = stores.len(),
            "availability lookup complete"
        );
        Ok(stores)
    }

    /// `{base}/products/{sku}/stores.json?postalCode=..&apiKey=..`, with the
    /// SKU percent-encoded as a single path segment.
    fn stores_url(&self, postal_code: PostalCode, sku: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["products", sku, "stores.json"]);
        }
        url.query_pairs_mut()
            .append_pair("postalCode", &postal_code.to_string())
            .append_pair("apiKey", &self.api_key);
        url
    }
}
