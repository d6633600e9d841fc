//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, health route paths, logging format, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The health endpoint is polled by orchestrators and load balancers. Every cache
// signal HTTP offers is set, since intermediaries differ in which one they honor:
// - Cache-Control: HTTP/1.1 caches (browsers, proxies)
// - Pragma: HTTP/1.0 caches
// - Expires: caches that prefer Expires over Cache-Control
// - Surrogate-Control: CDN edge caches
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html

/// Cache-Control for responses that must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Legacy HTTP/1.0 cache directive
pub const PRAGMA_NO_CACHE: &str = "no-cache";

/// Expires value marking the response as already stale
pub const EXPIRES_IMMEDIATELY: &str = "0";

/// Surrogate-Control for CDN edge caches
pub const SURROGATE_CONTROL_NO_STORE: &str = "no-store";

/// Content type of JSON API responses
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Demo page - static markup, client-side state only
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_PAGE_SWR: u32 = 30;

/// Static assets (CSS, JS)
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 3600;

pub const CACHE_CONTROL_PAGE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_PAGE_MAX_AGE,
    HTTP_CACHE_PAGE_SWR
);

pub const CACHE_CONTROL_STATIC: &str = formatcp!("public, max-age={}", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Routes
// =============================================================================

/// Path prefix of the JSON API namespace
pub const API_BASE_PATH: &str = "/api";

/// Health route, relative to the API namespace
pub const HEALTH_ROUTE: &str = "/health";

/// Fully qualified health path
pub const HEALTH_PATH: &str = formatcp!("{}{}", API_BASE_PATH, HEALTH_ROUTE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "heartbeat=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Seconds to wait for in-flight connections on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Deployment settings
    #[serde(default)]
    pub app: AppSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Which routing layer owns the health path
    #[serde(default)]
    pub health_binding: HealthBinding,
    /// Directory served under /static
    #[serde(default = "HttpServerConfig::default_static_dir")]
    pub static_dir: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            health_binding: HealthBinding::default(),
            static_dir: Self::default_static_dir(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_static_dir() -> String {
        STATIC_DIR.to_string()
    }
}

/// Routing layer that serves the health endpoint.
///
/// Exactly one binding is registered per process. Both invoke the same handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBinding {
    /// `/api/health` registered directly on the root router (GET, HEAD)
    #[default]
    Native,
    /// Sub-router nested at `/api` registering `/health` (GET, HEAD, POST)
    ApiRouter,
}

impl fmt::Display for HealthBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthBinding::Native => f.write_str("native"),
            HealthBinding::ApiRouter => f.write_str("api_router"),
        }
    }
}

impl FromStr for HealthBinding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(HealthBinding::Native),
            "api_router" | "api-router" => Ok(HealthBinding::ApiRouter),
            other => Err(ConfigError::Validation(format!(
                "Unknown health binding '{}', expected 'native' or 'api_router'",
                other
            ))),
        }
    }
}

/// Deployment settings resolved once at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    /// Environment label reported by the health endpoint (e.g. "production")
    pub mode: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load the config file, falling back to defaults when `allow_missing` is set
    /// and the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P, allow_missing: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if allow_missing && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;

        // Treat an empty mode the same as an absent one
        if config.app.mode.as_deref().is_some_and(|m| m.trim().is_empty()) {
            config.app.mode = None;
        }

        match config.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown log format '{}', expected 'text' or 'json'",
                    other
                )))
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
