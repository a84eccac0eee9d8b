//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// An environment variable is set but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream prediction API base URL, without a trailing `/`.
    pub api_host: String,
    pub timeouts: ApiTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `CARALYTIX_API_HOST`: `http://` or `https://` base URL
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CARALYTIX_API_TIMEOUT_SECS`: default 30
    /// - `CARALYTIX_API_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_host = parse_api_host(std::env::var("CARALYTIX_API_HOST").ok().as_deref())?;
        let timeouts = ApiTimeouts {
            request_secs: env_parse("CARALYTIX_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS),
            connect_secs: env_parse("CARALYTIX_API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { port, api_host, timeouts })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() }),
    }
}

fn parse_api_host(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing { var: "CARALYTIX_API_HOST" })?;
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "CARALYTIX_API_HOST",
            reason: format!("expected an http:// or https:// URL, got '{value}'"),
        });
    }
    let trimmed = value.trim_end_matches('/');
    if trimmed.ends_with(':') || trimmed.ends_with("//") {
        return Err(ConfigError::Invalid { var: "CARALYTIX_API_HOST", reason: "missing host".to_owned() });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
