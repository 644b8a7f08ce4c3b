use std::path::PathBuf;

use crate::session::SessionConfig;

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
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `javascripts/` and `stylesheets/`.
    pub static_dir: PathBuf,
    /// Session cookie and expiry settings.
    pub session: SessionConfig,
    /// Log line format (default: `pretty`).
    pub log_format: LogFormat,
}

/// How `main` formats log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    #[default]
    Pretty,
    /// One JSON object per line, for log collectors.
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Matching is case-insensitive; `None` for
    /// unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `STATIC_DIR`           | the crate's `public/` folder |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)         |
    ///
    /// Session variables are documented on [`SessionConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());

        let session = SessionConfig::from_env();

        let log_format = std::env::var("LOG_FORMAT")
            .map(|value| {
                LogFormat::parse(&value).expect("LOG_FORMAT must be `pretty` or `json`")
            })
            .unwrap_or_default();

        Self {
            host,
            port,
            request_timeout_secs,
            static_dir,
            session,
            log_format,
        }
    }
}

/// The `public/` directory shipped next to this crate's manifest.
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}
