//! Endpoint Configuration
//!
//! Remote addresses used by the FAQ and translation screens. Defaults can be
//! overridden at build time with `FAQ_API_BASE` and `TRANSLATION_ENDPOINT`.

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_FAQ_API_BASE: &str = "https://faq-backend-production.up.railway.app:8080";
pub const DEFAULT_TRANSLATION_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} url `{value}`: {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{name} url `{value}` cannot be used as a base")]
    NotABase { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address of the FAQ store; `/api/faqs` is appended to it
    pub faq_api_base: Url,
    pub translation_endpoint: Url,
}

impl AppConfig {
    pub fn new(faq_api_base: &str, translation_endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            faq_api_base: parse_base("FAQ_API_BASE", faq_api_base)?,
            translation_endpoint: parse_base("TRANSLATION_ENDPOINT", translation_endpoint)?,
        })
    }

    /// Build-time overrides, falling back to the defaults when an override is unusable
    pub fn from_build_env() -> Self {
        let faq_api_base = option_env!("FAQ_API_BASE").unwrap_or(DEFAULT_FAQ_API_BASE);
        let translation_endpoint =
            option_env!("TRANSLATION_ENDPOINT").unwrap_or(DEFAULT_TRANSLATION_ENDPOINT);

        match Self::new(faq_api_base, translation_endpoint) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            faq_api_base: Url::parse(DEFAULT_FAQ_API_BASE).expect("default FAQ base is a valid url"),
            translation_endpoint: Url::parse(DEFAULT_TRANSLATION_ENDPOINT)
                .expect("default translation endpoint is a valid url"),
        }
    }
}

fn parse_base(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            name,
            value: value.to_string(),
        });
    }
    Ok(url)
}
