//! Creates the configured sightings table when it is not the migrated one.

use sqlx::PgPool;

use super::types::TableName;

/// Creates `table` and its lookup index if they do not exist yet.
///
/// Column layout matches the `stock_sightings` migration, so a non-default
/// `TABLE_NAME` gets the same append-only schema. A no-op for the default
/// table once migrations have run.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if either statement fails.
pub async fn ensure_sightings_table(
    pool: &PgPool,
    table: &TableName,
) -> Result<(), sqlx::Error> {
    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {table} ( \
             id            BIGSERIAL PRIMARY KEY, \
             refresh_date  TEXT NOT NULL, \
             zip_code      TEXT NOT NULL, \
             sku           TEXT NOT NULL, \
             store_id      TEXT NOT NULL, \
             name          TEXT NOT NULL, \
             address       TEXT NOT NULL, \
             city          TEXT NOT NULL, \
             state         TEXT NOT NULL, \
             postal_code   TEXT NOT NULL, \
             store_type    TEXT NOT NULL, \
             low_stock     TEXT NOT NULL, \
             distance      TEXT NOT NULL, \
             created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW() \
         )"
    );
    sqlx::query(&create_table).execute(pool).await?;

    let create_index = format!(
        "CREATE INDEX IF NOT EXISTS {table}_sku_zip_idx \
             ON {table} (sku, zip_code, created_at DESC)"
    );
    sqlx::query(&create_index).execute(pool).await?;

    tracing::debug!(table = %table, "sightings table ready");
    Ok(())
}
