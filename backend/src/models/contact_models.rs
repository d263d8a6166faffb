use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub message: String,
}

/// Analytics beacon sent by the page for every tracked event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRequest {
    pub category: String,
    pub action: String,
    pub label: String,
}
