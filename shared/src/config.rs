//! Runtime tunables the shell may override at start-up.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    resolver::is_http_url, DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_GENERATE_DELAY_MS,
    DEFAULT_UPLOAD_DELAY_MS, FALLBACK_IMAGE_URL,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },

    #[error("fallback image url is not an absolute http(s) url: {0:?}")]
    InvalidFallbackUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub carousel_interval_ms: u64,
    pub upload_delay_ms: u64,
    pub generate_delay_ms: u64,
    pub fallback_image_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            generate_delay_ms: DEFAULT_GENERATE_DELAY_MS,
            fallback_image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a partial JSON document; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("carousel_interval_ms", self.carousel_interval_ms),
            ("upload_delay_ms", self.upload_delay_ms),
            ("generate_delay_ms", self.generate_delay_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { field });
            }
        }

        if !is_http_url(&self.fallback_image_url) {
            return Err(ConfigError::InvalidFallbackUrl(
                self.fallback_image_url.clone(),
            ));
        }

        Ok(())
    }
}
