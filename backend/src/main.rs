use dotenvy::dotenv;
use landing_backend::config::ServerConfig;
use landing_backend::{app, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,landing_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        environment = %config.environment,
        static_dir = %config.static_dir.display(),
        production = config.is_production(),
        trust_proxy = config.trust_proxy,
        "configuration loaded"
    );

    let state = Arc::new(AppState::new(config));
    let pruned = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            pruned.prune_limiters();
        }
    });

    let app = app(state);
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
