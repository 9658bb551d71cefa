//! Availability check orchestration.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use stockcheck_bestbuy::{BestBuyClient, BestBuyConfig, BestBuyError};
use stockcheck_core::catalog::default_skus;
use stockcheck_core::{
    normalize_postal_code, normalize_product_ids, AppConfig, StoreRecord, ValidationError,
};

use crate::error::CheckError;
use crate::recorder::StockRecorder;

/// Stores per SKU, kept in the order SKUs were first requested. Serializes
/// as a JSON object with keys in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFound(Vec<(String, Vec<StoreRecord>)>);

impl StockFound {
    /// Sets the stores for `sku`. A repeated SKU keeps its first position
    /// and takes the latest stores.
    pub fn insert(&mut self, sku: String, stores: Vec<StoreRecord>) {
        match self.0.iter_mut().find(|(existing, _)| *existing == sku) {
            Some(entry) => entry.1 = stores,
            None => self.0.push((sku, stores)),
        }
    }

    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&[StoreRecord]> {
        self.0
            .iter()
            .find(|(existing, _)| existing == sku)
            .map(|(_, stores)| stores.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(sku, _)| sku.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for StockFound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(sku, stores)| (sku, stores)))
    }
}

/// Result of one successful check. `stock_found` has a key for every SKU
/// looked up, with an empty list where nothing was in stock. A SKU listed
/// twice appears once in the map but twice in `number_of_skus`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockCheck {
    pub number_of_skus: usize,
    pub stock_found: StockFound,
}

/// Classification consumed by the invocation adapter to pick a response
/// shape.
#[derive(Debug)]
pub enum CheckOutcome {
    Success(StockCheck),
    InvalidInput(ValidationError),
    Internal(CheckError),
}

impl From<Result<StockCheck, CheckError>> for CheckOutcome {
    fn from(result: Result<StockCheck, CheckError>) -> Self {
        match result {
            Ok(check) => CheckOutcome::Success(check),
            Err(CheckError::InvalidInput(e)) => CheckOutcome::InvalidInput(e),
            Err(e) => CheckOutcome::Internal(e),
        }
    }
}

/// Runs availability checks against Best Buy and records positive findings.
///
/// `client` is `None` when no API key is configured; every check then fails
/// with [`CheckError::Configuration`] after input validation and before any
/// request is sent.
pub struct StockChecker<R> {
    client: Option<BestBuyClient>,
    recorder: R,
}

impl<R: StockRecorder + Sync> StockChecker<R> {
    #[must_use]
    pub fn new(client: Option<BestBuyClient>, recorder: R) -> Self {
        Self { client, recorder }
    }

    /// Builds the checker from application config.
    ///
    /// A missing API key is not an error here; it is logged and reported on
    /// each check instead, so hosts still start and answer with a 500.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Configuration`] if the Best Buy client cannot be
    /// built from a configured key (bad base URL, TLS setup failure).
    pub fn from_app_config(config: &AppConfig, recorder: R) -> Result<Self, CheckError> {
        let client = match BestBuyConfig::from_app_config(config) {
            Ok(bestbuy) => Some(
                BestBuyClient::new(&bestbuy)
                    .map_err(|e| CheckError::Configuration(e.to_string()))?,
            ),
            Err(BestBuyError::MissingApiKey) => {
                tracing::warn!("BEST_BUY_API_KEY not set; availability checks will fail");
                None
            }
            Err(e) => return Err(CheckError::Configuration(e.to_string())),
        };
        Ok(Self::new(client, recorder))
    }

    #[must_use]
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Runs [`Self::process_request`] and classifies the result.
    pub async fn check(&self, query: &HashMap<String, String>) -> CheckOutcome {
        self.process_request(query).await.into()
    }

    /// Validates `zip_code` and `skus`, looks up each SKU in order, and
    /// records stores for every SKU that has any before moving on.
    ///
    /// An absent or empty `skus` falls back to the default catalog.
    ///
    /// # Errors
    ///
    /// - [`CheckError::InvalidInput`] for a missing or malformed `zip_code`
    ///   or a non-integer SKU.
    /// - [`CheckError::Configuration`] when no API key is configured.
    /// - [`CheckError::Fetch`] / [`CheckError::Record`] on the first lookup
    ///   or write failure. Rows written for earlier SKUs are kept.
    pub async fn process_request(
        &self,
        query: &HashMap<String, String>,
    ) -> Result<StockCheck, CheckError> {
        let raw_zip = query
            .get("zip_code")
            .ok_or(ValidationError::MissingPostalCode)?;
        let zip_code = normalize_postal_code(raw_zip)?;

        let skus = match query.get("skus").filter(|raw| !raw.is_empty()) {
            Some(raw) => normalize_product_ids(raw)?,
            None => default_skus(),
        };

        let client = self.client.as_ref().ok_or_else(|| {
            CheckError::Configuration("BEST_BUY_API_KEY is not set".to_string())
        })?;

        let mut stock_found = StockFound::default();
        for sku in &skus {
            let stores = client
                .fetch_availability(zip_code, sku)
                .await
                .map_err(|source| CheckError::Fetch {
                    sku: sku.clone(),
                    source,
                })?;

            if !stores.is_empty() {
                let written = self
                    .recorder
                    .record_availability(&stores, sku, zip_code)
                    .await
                    .map_err(|source| CheckError::Record {
                        sku: sku.clone(),
                        source,
                    })?;
                tracing::info!(
                    sku = %sku,
                    zip_code = %zip_code,
                    stores = written.len(),
                    "recorded in-stock stores"
                );
            }

            stock_found.insert(sku.clone(), stores);
        }

        Ok(StockCheck {
            number_of_skus: skus.len(),
            stock_found,
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
