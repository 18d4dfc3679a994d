use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8880;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset variables
    /// fall back to their defaults; a missing `GROQ_API_KEY` is an empty key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "UPSTREAM_TIMEOUT_SECS must be a number, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let base_url = lookup("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        check_base_url(&base_url)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key: lookup("GROQ_API_KEY").unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid address {}:{}", self.host, self.port)))
    }
}

fn check_base_url(raw: &str) -> Result<(), AppError> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| AppError::Config(format!("GROQ_BASE_URL '{}' is not a valid URL: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(AppError::Config(format!(
            "GROQ_BASE_URL '{}' must be an http(s) URL with a host",
            raw
        ))),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
