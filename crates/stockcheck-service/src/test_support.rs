//! Recorder doubles and fixtures shared by the orchestrator and handler tests.

use std::sync::Mutex;

use serde_json::json;
use stockcheck_bestbuy::{BestBuyClient, BestBuyConfig};
use stockcheck_core::{PostalCode, StoreRecord};
use stockcheck_db::DbError;

use crate::recorder::StockRecorder;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub sku: String,
    pub zip_code: String,
    pub store_ids: Vec<String>,
}

pub(crate) struct RecordingRecorder {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRecorder {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("poisoned mutex").clone()
    }
}

impl StockRecorder for RecordingRecorder {
    async fn record_availability(
        &self,
        records: &[StoreRecord],
        sku: &str,
        zip_code: PostalCode,
    ) -> Result<Vec<i64>, DbError> {
        let mut calls = self.calls.lock().expect("poisoned mutex");
        calls.push(RecordedCall {
            sku: sku.to_string(),
            zip_code: zip_code.to_string(),
            store_ids: records.iter().map(|r| r.store_id.clone()).collect(),
        });
        Ok((1..=records.len())
            .map(|i| i64::try_from(i).expect("small index"))
            .collect())
    }
}

pub(crate) struct FailingRecorder;

impl StockRecorder for FailingRecorder {
    async fn record_availability(
        &self,
        _records: &[StoreRecord],
        _sku: &str,
        _zip_code: PostalCode,
    ) -> Result<Vec<i64>, DbError> {
        Err(DbError::InvalidTableName("unreachable".to_string()))
    }
}

pub(crate) fn test_client(base_url: &str) -> BestBuyClient {
    BestBuyClient::new(&BestBuyConfig {
        api_key: "123456".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        user_agent: "stockcheck-test/0.1".to_string(),
    })
    .expect("client construction should not fail")
}

pub(crate) fn store_json(store_id: &str) -> serde_json::Value {
    json!({
        "storeID": store_id,
        "name": "Richmond West Broad",
        "address": "9901 W Broad St",
        "city": "Glen Allen",
        "state": "VA",
        "postalCode": "23060",
        "storeType": "Big Box",
        "minPickupHours": 1,
        "lowStock": false,
        "distance": 7.83
    })
}
