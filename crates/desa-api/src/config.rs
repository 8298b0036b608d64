use std::env;
use std::path::PathBuf;

/// Macro view cache lifetime when DESA_MACRO_CACHE_SECS is unset
pub const DEFAULT_MACRO_CACHE_SECS: u64 = 300;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub macro_cache_secs: u64,
    /// Optional TOML file for the data layer configuration
    pub config_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("DESA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        let cors_origin =
            env::var("DESA_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let macro_cache_secs = env::var("DESA_MACRO_CACHE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MACRO_CACHE_SECS);

        let config_file = env::var("DESA_CONFIG").ok().map(PathBuf::from);

        Self {
            port,
            cors_origin,
            macro_cache_secs,
            config_file,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
