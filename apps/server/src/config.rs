use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub holiday_api_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("VT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid VT_LISTEN_ADDR");
        let holiday_api_url = std::env::var("VT_HOLIDAY_API_URL")
            .unwrap_or_else(|_| "https://api.dagsmart.se".into());
        let cors_allow = std::env::var("VT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("VT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "15000".into())
            .parse()
            .unwrap_or(15000);
        Self {
            listen_addr,
            holiday_api_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
