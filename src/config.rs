//! Configuration management for askllm
//!
//! Parses TOML configuration files and provides typed access to settings.
//! Every section has defaults, so an empty file yields a usable config.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Model used when `[llm].model` is not set
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// OpenAI-compatible API root used when `[llm].base_url` is not set
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key when `[llm].api_key_env` is not set
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Address to bind, built from `host` and `port`
    ///
    /// `host` must be a literal IPv4 or IPv6 address. Hostnames such as
    /// `localhost` are rejected rather than resolved.
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let ip: IpAddr = self.host.trim().parse().map_err(|_| {
            AppError::Config(format!(
                "server.host must be an IP address such as 127.0.0.1 or 0.0.0.0 (got '{}')",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Completion provider configuration
///
/// Fields are private; values are only produced by deserialization and
/// checked by `Config::validate()`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_api_key_env")]
    api_key_env: String,
}

impl LlmConfig {
    /// Model identifier sent with every completion request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// API root, e.g. `https://api.openai.com/v1`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the environment variable the API key is read from
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|source| AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            })?;

        config
            .validate()
            .map_err(|e| AppError::ConfigValidationFailed {
                path: path_display,
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Validate configuration after parsing
    ///
    /// Called by `from_file()`. The API key is deliberately not checked here:
    /// a missing key only surfaces when the provider rejects the first call.
    pub fn validate(&self) -> AppResult<()> {
        self.server.socket_addr()?;

        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }

        if self.llm.model.trim().is_empty() {
            return Err(AppError::Config("llm.model cannot be empty".to_string()));
        }

        if !self.llm.base_url.starts_with("http://") && !self.llm.base_url.starts_with("https://")
        {
            return Err(AppError::Config(format!(
                "llm.base_url must start with http:// or https:// (got '{}')",
                self.llm.base_url
            )));
        }

        if self.llm.api_key_env.trim().is_empty() {
            return Err(AppError::Config(
                "llm.api_key_env cannot be empty".to_string(),
            ));
        }

        let level = self.observability.log_level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::Config(format!(
                "observability.log_level must be one of {} (got '{}')",
                VALID_LOG_LEVELS.join(", "),
                self.observability.log_level
            )));
        }

        Ok(())
    }
}
