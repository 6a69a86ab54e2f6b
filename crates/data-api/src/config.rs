// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! A [`ClientConfig`] holds the API key and the base URL. It is built once,
//! handed to [`crate::DataApiClient::new`] and never changes afterwards. No
//! environment variables are consulted: values come from code or from an
//! explicitly named file.

use std::path::Path;

use config::{Config, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Production host of the data service
pub const DEFAULT_BASE_URL: &str = "https://data.solanatracker.io";

/// Errors raised while building a client or loading its configuration
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    /// The API key is empty or whitespace only
    #[error("API key cannot be empty")]
    EmptyApiKey,

    /// The base URL is not an absolute http(s) URL
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be created
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The configuration file is missing or malformed
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Immutable connection settings for one client
#[derive(Debug)]
pub struct ClientConfig {
    api_key: SecretString,
    base_url: Box<str>,
}

/// Shape of a configuration file before validation
#[derive(Debug, Deserialize)]
struct RawClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration pointing at the production host
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] when `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Point the configuration at another host
    ///
    /// A trailing `/` is dropped so that endpoint paths can be appended as is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// http(s) URL without query or fragment.
    pub fn with_base_url(self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url.as_ref())?,
            ..self
        })
    }

    /// Load a configuration file
    ///
    /// The format follows the file extension (JSON, TOML or YAML). `api_key`
    /// is required, `base_url` defaults to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when the file cannot be read or parsed,
    /// and the validation errors of [`ClientConfig::new`] and
    /// [`ClientConfig::with_base_url`] for bad values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .add_source(File::from(path.as_ref()))
            .build()?;

        let raw: RawClientConfig = settings.try_deserialize()?;
        Self::new(raw.api_key)?.with_base_url(raw.base_url)
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn parse_base_url(raw: &str) -> Result<Box<str>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(trimmed.into())
}
