/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// the breakdown API credential, which has no default: without it the
/// breakdown endpoints report a distinct "credential missing" status.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// External breakdown (LLM) service settings.
    pub breakdown: BreakdownConfig,
}

/// Settings for the external breakdown service.
#[derive(Debug, Clone)]
pub struct BreakdownConfig {
    /// Chat-completions base URL.
    pub base_url: String,
    /// Bearer credential; `None` when unset.
    pub api_key: Option<String>,
    /// Model identifiers tried in order.
    pub models: Vec<String>,
    /// How long finished analysis jobs remain pollable, in seconds.
    pub job_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                         |
    /// |--------------------------|---------------------------------|
    /// | `HOST`                   | `0.0.0.0`                       |
    /// | `PORT`                   | `3000`                          |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                            |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                            |
    /// | `BREAKDOWN_BASE_URL`     | `https://openrouter.ai/api/v1`  |
    /// | `BREAKDOWN_API_KEY`      | unset                           |
    /// | `BREAKDOWN_MODELS`       | see [`default_models`]          |
    /// | `BREAKDOWN_JOB_TTL_SECS` | `3600`                          |
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

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            breakdown: BreakdownConfig::from_env(),
        }
    }
}

impl BreakdownConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("BREAKDOWN_BASE_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".into());

        let api_key = std::env::var("BREAKDOWN_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let models: Vec<String> = std::env::var("BREAKDOWN_MODELS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_models());

        let job_ttl_secs: u64 = std::env::var("BREAKDOWN_JOB_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("BREAKDOWN_JOB_TTL_SECS must be a valid u64");

        Self {
            base_url,
            api_key,
            models,
            job_ttl_secs,
        }
    }
}

/// Default model fallback order when `BREAKDOWN_MODELS` is unset.
pub fn default_models() -> Vec<String> {
    vec![
        "google/gemini-2.0-flash-001".to_string(),
        "openai/gpt-4o-mini".to_string(),
    ]
}
