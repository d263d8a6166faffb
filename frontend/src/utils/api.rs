use crate::config;
use crate::error::FrontendError;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::RequestCredentials;

/// Thin client for the landing backend. Paths are joined onto
/// [`config::get_backend_url`].
pub struct Api;

/// Request wrapper that turns non-2xx responses into errors.
pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn post(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = Request::post(&full_url).credentials(RequestCredentials::SameOrigin);

        Self {
            request,
            path: path.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, FrontendError> {
        let body = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    /// Send the request. Any status outside 200..=299 becomes
    /// [`FrontendError::Status`].
    pub async fn send(self) -> Result<Response, FrontendError> {
        let response = self.request.send().await?;
        if !response.ok() {
            log::warn!("{} returned {}", self.path, response.status());
            return Err(FrontendError::Status(response.status()));
        }
        Ok(response)
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::post(path)
    }
}
