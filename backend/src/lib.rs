use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;

pub mod handlers {
    pub mod contact_handlers;
    pub mod event_handlers;
}

pub mod models {
    pub mod contact_models;
}

pub mod utils {
    pub mod client_key;
    pub mod rate_limit;
    pub mod validation;
}

use config::ServerConfig;
use handlers::{contact_handlers, event_handlers};
use governor::Quota;
use nonzero_ext::nonzero;
use utils::rate_limit::{self, KeyedLimiter};

pub struct AppState {
    pub config: ServerConfig,
    /// 5 contact submissions per minute per client.
    pub contact_limiter: KeyedLimiter,
    /// 60 analytics events per minute per client.
    pub event_limiter: KeyedLimiter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            contact_limiter: rate_limit::keyed(Quota::per_minute(nonzero!(5u32))),
            event_limiter: rate_limit::keyed(Quota::per_minute(nonzero!(60u32))),
        }
    }

    pub fn prune_limiters(&self) {
        rate_limit::prune(&self.contact_limiter);
        rate_limit::prune(&self.event_limiter);
        tracing::debug!(
            contact_clients = self.contact_limiter.len(),
            event_clients = self.event_limiter.len(),
            "rate limiters pruned"
        );
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/api/events", post(event_handlers::record_event));

    Router::new()
        .merge(api_routes)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(state.config.frontend_url.clone()))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                .allow_credentials(true),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, StatusCode};
    use std::net::SocketAddr;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppState::new(ServerConfig::default())))
    }

    fn peer(ip: &str) -> SocketAddr {
        format!("{ip}:40000").parse().unwrap()
    }

    fn post_json(uri: &str, client: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .extension(ConnectInfo(peer(client)))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_forwarded(uri: &str, client: &str, forwarded_for: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", forwarded_for)
            .extension(ConnectInfo(peer(client)))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "service": "Portfolio Management",
            "message": "Hello there"
        })
    }

    #[tokio::test]
    async fn health_check_says_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn valid_contact_gets_an_id() {
        let response = test_app()
            .oneshot(post_json("/api/contact", "10.0.0.1", contact()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn invalid_contact_lists_fields() {
        let mut bad = contact();
        bad["email"] = json!("not-an-email");
        bad["message"] = json!("  ");
        let response = test_app()
            .oneshot(post_json("/api/contact", "10.0.0.2", bad))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["fields"]["email"].is_string());
        assert!(body["fields"]["message"].is_string());
        assert!(body["fields"].get("name").is_none());
    }

    #[tokio::test]
    async fn sixth_contact_in_a_minute_is_rejected() {
        let app = test_app();
        for _ in 0..5 {
            let response = app
                .clone()
                .oneshot(post_json("/api/contact", "10.0.0.3", contact()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = app
            .clone()
            .oneshot(post_json("/api/contact", "10.0.0.3", contact()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let other = app
            .oneshot(post_json("/api/contact", "10.0.0.4", contact()))
            .await
            .unwrap();
        assert_eq!(other.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn events_are_accepted_without_content() {
        let response = test_app()
            .oneshot(post_json(
                "/api/events",
                "10.0.0.5",
                json!({"category": "Button", "action": "Click", "label": "Back to Top"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn rotating_forwarded_for_does_not_reset_the_limit() {
        let state = Arc::new(AppState::new(ServerConfig::default()));
        let app = app(state.clone());
        for i in 0..5 {
            let response = app
                .clone()
                .oneshot(post_forwarded("/api/contact", "10.0.0.6", &format!("1.2.3.{i}"), contact()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = app
            .oneshot(post_forwarded("/api/contact", "10.0.0.6", "1.2.3.99", contact()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(state.contact_limiter.len(), 1);
    }

    #[tokio::test]
    async fn trusted_proxy_keys_on_the_forwarded_client() {
        let config = ServerConfig {
            trust_proxy: true,
            ..ServerConfig::default()
        };
        let state = Arc::new(AppState::new(config));
        let app = app(state.clone());
        for _ in 0..5 {
            let response = app
                .clone()
                .oneshot(post_forwarded("/api/contact", "10.0.0.7", "1.2.3.4, 10.0.0.7", contact()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let limited = app
            .clone()
            .oneshot(post_forwarded("/api/contact", "10.0.0.7", "1.2.3.4", contact()))
            .await
            .unwrap();
        assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

        let other = app
            .oneshot(post_forwarded("/api/contact", "10.0.0.7", "5.6.7.8", contact()))
            .await
            .unwrap();
        assert_eq!(other.status(), StatusCode::OK);
        assert_eq!(state.contact_limiter.len(), 2);
    }
}
