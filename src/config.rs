use crate::error::{Result, RiotError};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://na.api.pvp.net";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to build a [`crate::RiotApiClient`].
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Turn non-200 responses into [`RiotError::Http`] instead of only logging them.
    pub strict_status: bool,
}

impl Config {
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            region: region.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            strict_status: false,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            RiotError::InvalidConfiguration("RIOT_API_KEY not found in environment".to_string())
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na".to_string());
        let mut config = Config::new(api_key, region);

        if let Ok(base_url) = env::var("RIOT_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(secs) = env::var("RIOT_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }

        if let Ok(strict) = env::var("RIOT_STRICT_STATUS") {
            config.strict_status = matches!(strict.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

/// Whole seconds, at least one.
fn parse_timeout(secs: &str) -> Result<Duration> {
    match secs.trim().parse::<u64>() {
        Ok(0) => Err(RiotError::InvalidConfiguration(
            "RIOT_TIMEOUT_SECS must be at least 1".to_string(),
        )),
        Ok(n) => Ok(Duration::from_secs(n)),
        Err(_) => Err(RiotError::InvalidConfiguration(format!(
            "RIOT_TIMEOUT_SECS is not a number: {}",
            secs
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_production_defaults() {
        let config = Config::new("key", "euw");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.strict_status);
    }

    #[test]
    fn setters_override_defaults() {
        let config = Config::new("key", "na")
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(2))
            .strict_status(true);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(config.strict_status);
    }

    #[test]
    fn timeout_must_be_positive_whole_seconds() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(matches!(
            parse_timeout("0"),
            Err(RiotError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            parse_timeout("soon"),
            Err(RiotError::InvalidConfiguration(_))
        ));
    }
}
