//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Number of items requested per page by list views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Static settings injected into the API client and the view models.
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// `chrono` format string used for dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// `chrono` format string used for date-times.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

fn default_app_name() -> String {
    "Rotary Club Mobile".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl ClientConfig {
    /// Builds a configuration pointing at `base_url` with every other field defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: default_api_prefix(),
            timeout_ms: default_timeout_ms(),
            page_size: default_page_size(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            app_name: default_app_name(),
            version: default_version(),
        }
    }

    /// Loads `config/default.yaml`, then `config/{app_env}.yaml`, then `APP_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        let config = settings.try_deserialize::<Self>()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Message("base_url must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Root of every API endpoint, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_matches('/')
        )
        .trim_end_matches('/')
        .to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
