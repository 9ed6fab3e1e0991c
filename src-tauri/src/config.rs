use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://aqi.shaxbozaka.cc/api/aqi/current";
pub const DEFAULT_DASHBOARD_URL: &str = "https://aqi.shaxbozaka.cc";

/// Runtime configuration. Defaults match the production endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub dashboard_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            poll_interval_secs: 300,  // 5 minutes
            request_timeout_secs: 10, // per request
        }
    }
}

macro_rules! env_or_default {
    ($config:expr, $field:ident, $lookup:expr, $env_var:expr) => {
        if let Some(val) = $lookup($env_var)
            && let Ok(parsed) = val.trim().parse()
        {
            $config.$field = parsed;
        }
    };
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        env_or_default!(config, api_url, lookup, "AQI_API_URL");
        env_or_default!(config, dashboard_url, lookup, "AQI_DASHBOARD_URL");
        env_or_default!(config, poll_interval_secs, lookup, "AQI_POLL_INTERVAL_SECS");
        env_or_default!(config, request_timeout_secs, lookup, "AQI_REQUEST_TIMEOUT_SECS");

        // Zero durations would spin or time out instantly
        let defaults = Self::default();
        if config.poll_interval_secs == 0 {
            config.poll_interval_secs = defaults.poll_interval_secs;
        }
        if config.request_timeout_secs == 0 {
            config.request_timeout_secs = defaults.request_timeout_secs;
        }

        config
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
