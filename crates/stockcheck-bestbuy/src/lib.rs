pub mod client;
pub mod error;
pub mod types;

pub use client::{BestBuyClient, BestBuyConfig};
pub use error::BestBuyError;
pub use types::StoresResponse;
