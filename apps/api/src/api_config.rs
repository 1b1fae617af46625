use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use newwork_core::AppError;
use newwork_infrastructure::DEFAULT_GEMINI_API_URL;
use tracing_subscriber::EnvFilter;

/// Runtime settings for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub app_env: String,
    pub enhancer: EnhancerConfig,
}

/// Settings for the feedback enhancer.
#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    /// `None` selects the passthrough enhancer.
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:5173".to_owned());
        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_owned());

        let api_key = lookup("GEMINI_API_KEY").filter(|value| !value.trim().is_empty());
        let api_url =
            lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_owned());
        let timeout_secs = match lookup("ENHANCER_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|error| {
                AppError::Validation(format!("invalid ENHANCER_TIMEOUT_SECS: {error}"))
            })?,
            None => 10,
        };

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            app_env,
            enhancer: EnhancerConfig {
                api_key,
                api_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use newwork_core::AppError;

    use super::ApiConfig;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap_or_else(|_| unreachable!());

        assert_eq!(config.api_port, 3001);
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.app_env, "development");
        assert!(config.enhancer.api_key.is_none());
        assert_eq!(config.enhancer.timeout, Duration::from_secs(10));
        assert_eq!(
            config.socket_address().map(|address| address.to_string()).ok(),
            Some("127.0.0.1:3001".to_owned())
        );
    }

    #[test]
    fn blank_api_key_selects_passthrough() {
        let config = load(&[("GEMINI_API_KEY", "   ")]).unwrap_or_else(|_| unreachable!());
        assert!(config.enhancer.api_key.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            load(&[("API_PORT", "eighty")]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn invalid_host_fails_at_bind_time() {
        let config = load(&[("API_HOST", "not-an-ip")]).unwrap_or_else(|_| unreachable!());
        assert!(matches!(config.socket_address(), Err(AppError::Internal(_))));
    }
}
