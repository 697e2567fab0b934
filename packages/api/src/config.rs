//! # Client configuration: `admin.toml`
//!
//! The only thing the client needs to know is where the profile API lives.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api/"
//! ```
//!
//! Resolution order, last one wins:
//!
//! 1. [`ApiConfig::default`] (`http://localhost:3000/api/`).
//! 2. The TOML file, parsed with [`ApiConfig::from_toml`]. The web shell embeds it at
//!    build time because a browser has no filesystem to read it from.
//! 3. `PROFILE_API_URL` captured at build time.
//! 4. On native targets only, `PROFILE_API_URL` at runtime (a `.env` file is honoured
//!    through `dotenvy`).
//!
//! Request paths (`profiles`, `profileTypes/`, ...) are joined onto the base URL, so
//! [`ApiConfig::base_url`] always hands out a URL ending in `/`.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "PROFILE_API_URL";

/// Top-level configuration stored in `admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api: EndpointConfig,
}

/// The `[api]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000/api/".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: EndpointConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Apply `PROFILE_API_URL` overrides (build time, then runtime on native).
    pub fn with_env_override(mut self) -> Self {
        if let Some(url) = option_env!("PROFILE_API_URL").filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.to_string();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BASE_URL_ENV) {
                if !url.trim().is_empty() {
                    self.api.base_url = url;
                }
            }
        }

        self
    }

    /// The parsed base URL, normalised to end with `/`.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let raw = self.api.base_url.trim();
        let normalised = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Url::parse(&normalised).map_err(|e| ApiError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }
}
