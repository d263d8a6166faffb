use crate::error::ApiError;
use crate::models::contact_models::{ContactRequest, ContactResponse};
use crate::utils::client_key::ClientKey;
use crate::utils::{rate_limit, validation};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ClientKey(client): ClientKey,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    rate_limit::check(&state.contact_limiter, &client)?;

    let errors = validation::validate_contact(&request);
    if !errors.is_empty() {
        tracing::debug!(client = %client, fields = ?errors.keys().collect::<Vec<_>>(), "contact form rejected");
        return Err(ApiError::Validation(errors));
    }

    let id = Uuid::new_v4();
    tracing::info!(
        %id,
        name = %request.name.trim(),
        email = %request.email.trim(),
        service = %request.service.trim(),
        received_at = %chrono::Utc::now().to_rfc3339(),
        "contact form submitted"
    );
    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            id,
            message: "Thank you! We'll be in touch within 24 hours.".to_string(),
        }),
    ))
}
