//! Invocation adapter: event in, status-tagged response out.
//!
//! Exactly three statuses are produced: 200 on success, 400 for a missing
//! parameter map or invalid input, and 500 for everything else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::orchestrator::{CheckOutcome, StockChecker, StockFound};
use crate::recorder::StockRecorder;

pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Bad request - query parameters of `sku` or `zip_code` required";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Inbound event. Only `queryStringParameters` is read; other fields of a
/// gateway event are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    #[must_use]
    pub fn with_query(params: HashMap<String, String>) -> Self {
        Self {
            query_string_parameters: Some(params),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_skus: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_found: Option<StockFound>,
    pub error: String,
}

impl InvocationResponse {
    /// The 400 answered for an absent, empty, or unreadable parameter map.
    #[must_use]
    pub fn missing_parameters() -> Self {
        Self::error(400, MISSING_PARAMETERS_MESSAGE)
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            number_of_skus: None,
            stock_found: None,
            error: message.into(),
        }
    }
}

/// Runs one availability check for `event`.
///
/// A missing or empty parameter map is rejected without touching the
/// checker. Internal failures are logged with full detail and answered with
/// a generic message.
pub async fn handle_event<R: StockRecorder + Sync>(
    checker: &StockChecker<R>,
    event: InvocationEvent,
) -> InvocationResponse {
    tracing::debug!(?event, "invocation received");

    let Some(params) = event
        .query_string_parameters
        .filter(|params| !params.is_empty())
    else {
        return InvocationResponse::missing_parameters();
    };

    match checker.check(&params).await {
        CheckOutcome::Success(check) => InvocationResponse {
            status: 200,
            number_of_skus: Some(check.number_of_skus),
            stock_found: Some(check.stock_found),
            error: String::new(),
        },
        CheckOutcome::InvalidInput(e) => {
            tracing::info!(reason = %e, "rejected invalid availability request");
            InvocationResponse::error(400, format!("Bad Request: {e}"))
        }
        CheckOutcome::Internal(e) => {
            tracing::error!(error = ?e, "availability check failed");
            InvocationResponse::error(500, INTERNAL_ERROR_MESSAGE)
        }
    }
}
