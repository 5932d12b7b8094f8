use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::Value as Json;

use crate::modules::quotes::core::rejection::RejectionReason;
use crate::shared::infrastructure::cloud_event::CloudEvent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let event = match CloudEvent::from_http(&headers, &body) {
        Ok(event) => event,
        Err(error) => {
            tracing::warn!(%error, "undecodable cloud event");
            return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
        }
    };

    tracing::debug!(
        event_id = %event.id,
        event_type = %event.event_type,
        source = %event.source,
        "bank quote event received"
    );

    let correlation_id = event.extension(&state.correlation_attribute);
    let payload = event.data.as_ref().unwrap_or(&Json::Null);

    match state.aggregator.handle_incoming(correlation_id, payload) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(reason @ RejectionReason::InvalidCorrelationId) => {
            (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
        }
        Err(reason @ RejectionReason::MalformedQuote(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, reason.to_string()).into_response()
        }
    }
}
