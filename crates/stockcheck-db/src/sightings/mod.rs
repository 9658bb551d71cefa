//! Database operations for the stock sightings table.
//!
//! The table name is configurable, so statements are built at runtime from a
//! validated [`TableName`] instead of with compile-time checked macros.

mod read;
mod schema;
mod types;
mod write;

pub use read::list_recent_sightings;
pub use schema::ensure_sightings_table;
pub use types::{NewStockSighting, StockSightingRow, TableName};
pub use write::{insert_stock_sighting, refresh_timestamp, SightingWriter};
