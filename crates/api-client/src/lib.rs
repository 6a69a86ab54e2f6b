// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Generic request and error types for data API clients
//!
//! This crate holds the transport agnostic half of the client: what a request
//! looks like before it is sent, and how a failed response is classified.
//!
//! # Core Abstractions
//!
//! - **[`RequestOptions`]**: method, optional JSON body, extra headers and the
//!   rate limit logging switch for one call
//! - **[`ApiError`]**: closed set of failure kinds (validation, rate limit,
//!   generic API failure) built through factory functions
//! - **[`ApiError::from_response`]**: status code and body to error mapping

pub mod error;
pub mod request;

pub use error::*;
pub use request::*;
