// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error values returned by data API calls
//!
//! Every failed call surfaces as one of three [`ApiError`] variants. Each variant
//! carries a message, an HTTP status and a short machine readable service code.
//! The rate limit variant also carries the number of seconds to wait before
//! retrying. Nothing in this crate retries on its own.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for data API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Service code for caller side contract violations and upstream `400`s
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Service code for upstream `429`s
pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
/// Service code used when an error body carries no `code`
pub const API_ERROR: &str = "API_ERROR";
/// Service code for connection, DNS and TLS failures
pub const TRANSPORT_ERROR: &str = "CURL_ERROR";
/// Service code for a success response whose body is not JSON
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";

/// Retry delay assumed when a `429` body carries no usable `retryAfter`
pub const DEFAULT_RETRY_AFTER_SECONDS: u64 = 1;

/// Status reported by errors that never reached the server
pub const TRANSPORT_STATUS: u16 = 0;

const BAD_REQUEST: u16 = 400;
const TOO_MANY_REQUESTS: u16 = 429;

/// Failure of a single data API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// Invalid arguments, rejected either locally or by the service with a `400`
    #[error("{message}")]
    Validation { message: String },

    /// The service answered `429`
    #[error("{message} (retry after {retry_after_seconds}s)")]
    RateLimited {
        message: String,
        retry_after_seconds: u64,
    },

    /// Transport failure, any other error status, or an unreadable success body
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        code: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation<T: ToString>(message: T) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limited<T: ToString>(message: T, retry_after_seconds: u64) -> Self {
        Self::RateLimited {
            message: message.to_string(),
            retry_after_seconds,
        }
    }

    /// Create a generic API error
    pub fn api<T: ToString, C: ToString>(message: T, status: u16, code: C) -> Self {
        Self::Api {
            message: message.to_string(),
            status,
            code: code.to_string(),
        }
    }

    /// Create an error for a request that failed below HTTP
    pub fn transport<E: std::fmt::Display>(error: E) -> Self {
        Self::api(
            format!("Request failed: {error}"),
            TRANSPORT_STATUS,
            TRANSPORT_ERROR,
        )
    }

    /// Create an error for a success response whose body could not be parsed
    pub fn invalid_response<E: std::fmt::Display>(status: u16, error: E) -> Self {
        Self::api(
            format!("Invalid JSON in response: {error}"),
            status,
            INVALID_RESPONSE,
        )
    }

    /// Map an error status and its raw body to the matching variant
    ///
    /// The body is read leniently. Fields that are missing or have the wrong
    /// type fall back to defaults, and a body that is not JSON is treated as an
    /// empty object.
    ///
    /// * `429` reads `message` and `retryAfter`, which may be a whole number of
    ///   seconds as an integer, a float or a numeric string
    /// * `400` reads `message` only, the upstream `code` is replaced by
    ///   [`VALIDATION_ERROR`]
    /// * anything else reads `message` and `code`
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);
        let default_message = || format!("API request failed: {status}");

        match status {
            TOO_MANY_REQUESTS => Self::rate_limited(
                field("message").unwrap_or_else(|| "Rate limit exceeded".to_string()),
                body.get("retryAfter")
                    .and_then(retry_after_seconds)
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS),
            ),
            BAD_REQUEST => Self::validation(field("message").unwrap_or_else(default_message)),
            _ => Self::api(
                field("message").unwrap_or_else(default_message),
                status,
                field("code").unwrap_or_else(|| API_ERROR.to_string()),
            ),
        }
    }

    /// Human readable description of the failure
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::RateLimited { message, .. }
            | Self::Api { message, .. } => message,
        }
    }

    /// HTTP status of the failure, `0` when the request never completed
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation { .. } => BAD_REQUEST,
            Self::RateLimited { .. } => TOO_MANY_REQUESTS,
            Self::Api { status, .. } => *status,
        }
    }

    /// Machine readable service code
    pub fn code(&self) -> &str {
        match self {
            Self::Validation { .. } => VALIDATION_ERROR,
            Self::RateLimited { .. } => RATE_LIMIT_EXCEEDED,
            Self::Api { code, .. } => code,
        }
    }

    /// How long to wait before retrying, only set for rate limit errors
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited {
                retry_after_seconds,
                ..
            } => Some(Duration::from_secs(*retry_after_seconds)),
            _ => None,
        }
    }

    /// Whether the caller can fix this error by changing its input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether the service asked the caller to slow down
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Whole seconds in a `retryAfter` value such as `5`, `5.0` or `"5"`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn retry_after_seconds(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|secs| *secs >= 0.0 && secs.fract() == 0.0 && *secs <= u64::MAX as f64)
                .map(|secs| secs as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
