// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Solana token, price and wallet data API
//!
//! This crate wraps the REST API served at [`DEFAULT_BASE_URL`]. Each public
//! method checks its arguments locally, sends one request carrying the API key
//! and returns the JSON body, or one of the [`ApiError`] variants.
//!
//! # Architecture
//!
//! - **Configuration**: [`ClientConfig`] - API key and base URL, immutable once built
//! - **Endpoint table**: [`Endpoint`] - path, method, body and validators of every call
//! - **Gateway**: header merging, the HTTP call and status code classification
//! - **Client**: [`DataApiClient`] - one async method per endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use data_api::{ClientConfig, DataApiClient, SolanaAddress};
//!
//! async fn wrapped_sol() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataApiClient::new(ClientConfig::new("my-api-key")?)?;
//!
//!     let mint: SolanaAddress = "So11111111111111111111111111111111111111112".parse()?;
//!     let token = client.get_token_info(&mint).await?;
//!     println!("{token}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Failed calls return an [`ApiError`]. Rate limit errors carry the delay the
//! service asked for, and the client never retries on its own.

pub mod client;
pub mod config;
pub mod endpoint;
mod gateway;
pub mod search;
mod validation;

pub use api_client::{ApiError, ApiResult, HttpMethod, RequestOptions};
pub use client::DataApiClient;
pub use crate::config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use gateway::API_KEY_HEADER;
pub use search::SearchFilters;
pub use shared_types::{SolanaAddress, Timeframe};
