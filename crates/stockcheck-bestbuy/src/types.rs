//! Response types for `GET /v1/products/{sku}/stores.json`.
//!
//! The endpoint omits `stores` entirely (or sends `null`) when nothing is in
//! stock near the postal code; both cases read as an empty list.

use serde::Deserialize;
use stockcheck_core::StoreRecord;

#[derive(Debug, Deserialize)]
pub struct StoresResponse {
    #[serde(default)]
    pub stores: Option<Vec<StoreRecord>>,
}

impl StoresResponse {
    #[must_use]
    pub fn into_stores(self) -> Vec<StoreRecord> {
        self.stores.unwrap_or_default()
    }
}
