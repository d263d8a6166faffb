use crate::error::ApiError;
use crate::models::contact_models::EventRequest;
use crate::utils::client_key::ClientKey;
use crate::utils::rate_limit;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 500;

pub async fn record_event(
    State(state): State<Arc<AppState>>,
    ClientKey(client): ClientKey,
    Json(event): Json<EventRequest>,
) -> Result<StatusCode, ApiError> {
    rate_limit::check(&state.event_limiter, &client)?;

    let label: String = event.label.chars().take(MAX_LABEL_LEN).collect();
    tracing::info!(
        target: "analytics",
        category = %event.category,
        action = %event.action,
        label = %label,
        "Event tracked"
    );
    Ok(StatusCode::NO_CONTENT)
}
