//! Write operations for the stock sightings table.

use sqlx::PgPool;
use stockcheck_core::{PostalCode, StoreRecord};

use super::types::{NewStockSighting, TableName};
use crate::DbError;

/// Second-granularity timestamp from the process-local clock, e.g.
/// `2026-03-01 14:05:09`.
#[must_use]
pub fn refresh_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Append one sighting and return its row id.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the insert fails.
pub async fn insert_stock_sighting(
    pool: &PgPool,
    table: &TableName,
    sighting: &NewStockSighting,
) -> Result<i64, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {table} \
             (refresh_date, zip_code, sku, store_id, name, address, city, state, \
              postal_code, store_type, low_stock, distance) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING id"
    );

    sqlx::query_scalar::<_, i64>(&sql)
        .bind(&sighting.refresh_date)
        .bind(&sighting.zip_code)
        .bind(&sighting.sku)
        .bind(&sighting.store_id)
        .bind(&sighting.name)
        .bind(&sighting.address)
        .bind(&sighting.city)
        .bind(&sighting.state)
        .bind(&sighting.postal_code)
        .bind(&sighting.store_type)
        .bind(&sighting.low_stock)
        .bind(&sighting.distance)
        .fetch_one(pool)
        .await
}

/// Appends stock sightings to the configured table.
#[derive(Debug, Clone)]
pub struct SightingWriter {
    pool: PgPool,
    table: TableName,
}

impl SightingWriter {
    /// # Errors
    ///
    /// Returns [`DbError::InvalidTableName`] if `table_name` is not a plain
    /// SQL identifier.
    pub fn new(pool: PgPool, table_name: &str) -> Result<Self, DbError> {
        Ok(Self {
            pool,
            table: TableName::parse(table_name)?,
        })
    }

    #[must_use]
    pub fn table(&self) -> &TableName {
        &self.table
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Writes one row per store, all stamped with the same refresh time.
    ///
    /// Each insert stands alone: a failure does not stop the remaining
    /// inserts and nothing already written is rolled back. Returns the new
    /// row ids in store order.
    ///
    /// # Errors
    ///
    /// Returns the first insert failure once every store has been attempted.
    pub async fn record_availability(
        &self,
        records: &[StoreRecord],
        sku: &str,
        zip_code: PostalCode,
    ) -> Result<Vec<i64>, DbError> {
        let refresh_date = refresh_timestamp();
        let mut ids = Vec::with_capacity(records.len());
        let mut first_error: Option<sqlx::Error> = None;

        for store in records {
            let sighting = NewStockSighting::from_store(store, sku, zip_code, &refresh_date);
            match insert_stock_sighting(&self.pool, &self.table, &sighting).await {
                Ok(id) => ids.push(id),
                Err(e) => {
                    tracing::error!(
                        sku,
                        zip_code = %zip_code,
                        store_id = %store.store_id,
                        error = %e,
                        "failed to record stock sighting"
                    );
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(DbError::from(e)),
            None => Ok(ids),
        }
    }
}
