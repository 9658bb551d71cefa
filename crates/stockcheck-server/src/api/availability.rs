use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use stockcheck_service::{handle_event, InvocationEvent, InvocationResponse};

use super::AppState;

type InvocationReply = (StatusCode, Json<InvocationResponse>);

fn reply(response: InvocationResponse) -> InvocationReply {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

/// `GET /api/v1/availability`: the query string is the parameter map. An
/// empty query string is handed over as an absent map.
pub(super) async fn check_availability(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> InvocationReply {
    let event = if params.is_empty() {
        InvocationEvent::default()
    } else {
        InvocationEvent::with_query(params)
    };
    reply(handle_event(&state.checker, event).await)
}

/// `POST /api/v1/invocations`: raw invocation event as the JSON body.
///
/// The body is read as bytes so that a missing content type or a body that
/// is not an event still gets the 400 response shape.
pub(super) async fn invoke(State(state): State<AppState>, body: Bytes) -> InvocationReply {
    let event = match serde_json::from_slice::<InvocationEvent>(&body) {
        Ok(event) => event,
        Err(error) => {
            tracing::warn!(error = %error, "unreadable invocation body");
            return reply(InvocationResponse::missing_parameters());
        }
    };
    reply(handle_event(&state.checker, event).await)
}
