//! Read operations for the stock sightings table.

use sqlx::PgPool;

use super::types::{StockSightingRow, TableName};

/// Most recent sightings, newest first, optionally narrowed to one SKU.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_recent_sightings(
    pool: &PgPool,
    table: &TableName,
    sku: Option<&str>,
    limit: i64,
) -> Result<Vec<StockSightingRow>, sqlx::Error> {
    let sql = format!(
        "SELECT id, refresh_date, zip_code, sku, store_id, name, address, city, state, \
                postal_code, store_type, low_stock, distance, created_at \
         FROM {table} \
         WHERE ($1::text IS NULL OR sku = $1) \
         ORDER BY id DESC \
         LIMIT $2"
    );

    sqlx::query_as::<_, StockSightingRow>(&sql)
        .bind(sku)
        .bind(limit)
        .fetch_all(pool)
        .await
}
