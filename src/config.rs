/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, 認証ヘッダ名, HTTP 制限値など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    /// Header carrying the Bearer credentials.
    pub auth_field: HeaderName,

    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key → value source (env in production, a map in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match get("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(get("APP_ENV").as_deref());

        let auth_field = match get("AUTH_FIELD_NAME") {
            Some(name) => HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| ConfigError::Invalid("AUTH_FIELD_NAME"))?,
            None => header::AUTHORIZATION,
        };

        let request_timeout = get("REQUEST_TIMEOUT_SECONDS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let request_body_limit_bytes = get("REQUEST_BODY_LIMIT_BYTES")
            .map(|v| v.trim().parse::<usize>())
            .transpose()
            .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?
            .unwrap_or(1024 * 1024);

        Ok(Self {
            addr,
            app_env,
            auth_field,
            request_timeout,
            request_body_limit_bytes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            auth_field: header::AUTHORIZATION,
            request_timeout: Duration::from_secs(30),
            request_body_limit_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.auth_field, header::AUTHORIZATION);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn test_custom_auth_field_is_normalized() {
        let config = config_from(&[("AUTH_FIELD_NAME", "X-My-Authorization")]).unwrap();
        assert_eq!(config.auth_field.as_str(), "x-my-authorization");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("AUTH_FIELD_NAME", "bad name")]),
            Err(ConfigError::Invalid("AUTH_FIELD_NAME"))
        ));
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::Invalid("PORT"))
        ));
        assert!(matches!(
            config_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]),
            Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))
        ));
    }

    #[test]
    fn test_app_env() {
        assert_eq!(AppEnv::parse(Some("PROD")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("production")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("staging")), AppEnv::Development);
        assert!(!AppEnv::parse(None).is_production());
    }
}
