use anyhow::Context;
use axum::http::HeaderValue;
use std::path::PathBuf;

/// Runtime settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_url: HeaderValue,
    pub static_dir: PathBuf,
    pub environment: String,
    /// Read the client address from forwarding headers. Only safe behind a
    /// proxy that overwrites them.
    pub trust_proxy: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().with_context(|| format!("PORT is not a port number: {raw}"))?,
            Err(_) => 3000,
        };
        let frontend_url = std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let frontend_url = frontend_url
            .parse()
            .with_context(|| format!("Invalid FRONTEND_URL: {frontend_url}"))?;
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "../frontend/dist".to_string());
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let trust_proxy = std::env::var("TRUSTED_PROXY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            port,
            frontend_url,
            static_dir: PathBuf::from(static_dir),
            environment,
            trust_proxy,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment != "development"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            frontend_url: HeaderValue::from_static("http://localhost:8080"),
            static_dir: PathBuf::from("../frontend/dist"),
            environment: "development".to_string(),
            trust_proxy: false,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_flag_accepts_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("Yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!ServerConfig::default().trust_proxy);
    }
}
