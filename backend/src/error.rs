use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Too many requests, try again later")]
    RateLimited,
    /// Field name to message, for every field that failed validation.
    #[error("Please correct the highlighted fields")]
    Validation(BTreeMap<&'static str, String>),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(fields) => json!({"error": self.to_string(), "fields": fields}),
            ApiError::RateLimited => json!({"error": self.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}
