// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request gateway
//!
//! The single call path shared by every endpoint: merge headers, send one
//! request to `base_url + path`, classify the status code.

use api_client::{ApiError, ApiResult, HttpMethod, RequestOptions};
use reqwest::{
    Client, Method,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ClientConfig, ConfigError};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

const USER_AGENT: &str = concat!("data-api/", env!("CARGO_PKG_VERSION"));

/// Sends requests on behalf of a client and maps their outcome
#[derive(Debug)]
pub(crate) struct Gateway {
    http: Client,
    config: ClientConfig,
}

impl Gateway {
    /// No timeout is configured, calls wait as long as the transport does
    pub(crate) fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ConfigError::Http)?;

        Ok(Self { http, config })
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one request and return the parsed JSON body
    pub(crate) async fn request(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        let url = format!("{}{}", self.config.base_url(), path);
        let headers = self.headers(&options)?;
        let method = match options.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        debug!(method = %options.method, url, "sending data API request");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(body) = options.payload() {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::transport)?;

        if status >= 400 {
            let error = ApiError::from_response(status, &text);
            debug!(status, code = error.code(), path, "data API request failed");

            if let ApiError::RateLimited {
                retry_after_seconds,
                ..
            } = &error
                && !options.disable_logs
            {
                warn!(path, retry_after_seconds, "data API rate limit exceeded");
            }
            return Err(error);
        }

        parse_body(status, &text)
    }

    /// Default headers with the caller's merged on top
    fn headers(&self, options: &RequestOptions) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, self.config.api_key())?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::validation(format!("Invalid header name: {name}")))?;
            headers.insert(header_name, header_value(name, value)?);
        }

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> ApiResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiError::validation(format!("Invalid value for header {name}")))
}

fn parse_body(status: u16, text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::invalid_response(status, e))
}
