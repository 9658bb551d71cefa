//! Row types for the stock sightings table.

use chrono::{DateTime, Utc};
use stockcheck_core::config::is_sql_identifier;
use stockcheck_core::{PostalCode, StoreRecord};

use crate::DbError;

/// A table name that is safe to interpolate into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// # Errors
    ///
    /// Returns [`DbError::InvalidTableName`] unless `name` is a plain
    /// identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub fn parse(name: &str) -> Result<Self, DbError> {
        if is_sql_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(DbError::InvalidTableName(name.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input record for one appended sighting. Every column is text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStockSighting {
    pub refresh_date: String,
    pub zip_code: String,
    pub sku: String,
    pub store_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub store_type: String,
    pub low_stock: String,
    pub distance: String,
}

impl NewStockSighting {
    #[must_use]
    pub fn from_store(
        store: &StoreRecord,
        sku: &str,
        zip_code: PostalCode,
        refresh_date: &str,
    ) -> Self {
        Self {
            refresh_date: refresh_date.to_string(),
            zip_code: zip_code.to_string(),
            sku: sku.to_string(),
            store_id: store.store_id.clone(),
            name: store.name.clone(),
            address: store.address.clone(),
            city: store.city.clone(),
            state: store.state.clone(),
            postal_code: store.postal_code.clone(),
            store_type: store.store_type.clone(),
            low_stock: bool_text(store.low_stock).to_string(),
            distance: float_text(store.distance),
        }
    }
}

/// `True` / `False`, the spelling already present in the sightings log.
fn bool_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Shortest round-trip decimal, keeping a trailing `.0` on integral values
/// (`7.0`, not `7`).
fn float_text(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// A row read back from the stock sightings table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StockSightingRow {
    pub id: i64,
    pub refresh_date: String,
    pub zip_code: String,
    pub sku: String,
    pub store_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub store_type: String,
    pub low_stock: String,
    pub distance: String,
    pub created_at: DateTime<Utc>,
}
