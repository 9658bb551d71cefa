//! Persistence seam between the orchestrator and the sightings table.

use std::future::Future;

use stockcheck_core::{PostalCode, StoreRecord};
use stockcheck_db::{DbError, SightingWriter};

/// Appends in-stock store entries for one SKU and returns one
/// acknowledgement (row id) per entry written.
pub trait StockRecorder {
    fn record_availability(
        &self,
        records: &[StoreRecord],
        sku: &str,
        zip_code: PostalCode,
    ) -> impl Future<Output = Result<Vec<i64>, DbError>> + Send;
}

impl StockRecorder for SightingWriter {
    async fn record_availability(
        &self,
        records: &[StoreRecord],
        sku: &str,
        zip_code: PostalCode,
    ) -> Result<Vec<i64>, DbError> {
        SightingWriter::record_availability(self, records, sku, zip_code).await
    }
}
