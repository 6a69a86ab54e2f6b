// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-call request options

use std::{collections::BTreeMap, fmt};

use serde_json::Value;

/// HTTP methods used by the data API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// Read only query, never carries a body
    #[default]
    Get,
    /// Query whose arguments travel as a JSON body
    Post,
}

impl HttpMethod {
    /// Upper case method name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single call, built fresh for every request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method
    pub method: HttpMethod,
    /// JSON body, only sent with [`HttpMethod::Post`]
    pub body: Option<Value>,
    /// Extra headers, merged over the client defaults
    pub headers: BTreeMap<String, String>,
    /// Skip the warning normally logged when the service rate limits the call
    pub disable_logs: bool,
}

impl RequestOptions {
    /// Options for a `GET` request
    pub fn get() -> Self {
        Self::default()
    }

    /// Options for a `POST` request carrying `body`
    pub fn post(body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            ..Self::default()
        }
    }

    /// Add or replace a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Do not log rate limit events for this call
    #[must_use]
    pub fn without_logs(mut self) -> Self {
        self.disable_logs = true;
        self
    }

    /// The body to send, `None` for `GET` even if one was set
    pub fn payload(&self) -> Option<&Value> {
        match self.method {
            HttpMethod::Post => self.body.as_ref(),
            HttpMethod::Get => None,
        }
    }
}
