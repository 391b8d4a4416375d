/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Lower bound of the mock scorer's artificial latency, in milliseconds.
    pub mock_latency_min_ms: u64,
    /// Upper bound of the mock scorer's artificial latency, in milliseconds.
    pub mock_latency_max_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `HOST`                | `0.0.0.0`               |
    /// | `PORT`                | `3000`                  |
    /// | `CORS_ORIGINS`        | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`| `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                   |
    /// | `MOCK_LATENCY_MIN_MS` | `400`                   |
    /// | `MOCK_LATENCY_MAX_MS` | `1200`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let mock_latency_min_ms: u64 = std::env::var("MOCK_LATENCY_MIN_MS")
            .unwrap_or_else(|_| "400".into())
            .parse()
            .expect("MOCK_LATENCY_MIN_MS must be a valid u64");

        let mock_latency_max_ms: u64 = std::env::var("MOCK_LATENCY_MAX_MS")
            .unwrap_or_else(|_| "1200".into())
            .parse()
            .expect("MOCK_LATENCY_MAX_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            mock_latency_min_ms,
            mock_latency_max_ms,
        }
    }
}
