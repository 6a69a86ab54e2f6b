// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint descriptors
//!
//! Each public client method is one [`Endpoint`] variant. A variant knows which
//! validators apply to its arguments, which HTTP method it uses, how its path
//! and query string are built and, for `POST`s, what its JSON body is.
//! [`crate::DataApiClient`] runs every descriptor through the same dispatch
//! routine.

use api_client::{ApiResult, HttpMethod, RequestOptions};
use serde_json::{Value, json};

use crate::{search::SearchFilters, validation};

/// Highest page served by the latest tokens feed
pub const MAX_LATEST_PAGE: u32 = 10;
/// Largest batch accepted by the multi token endpoint
pub const MAX_TOKENS_PER_REQUEST: usize = 20;
/// Largest batch accepted by the multi price endpoints
pub const MAX_PRICE_TOKENS_PER_REQUEST: usize = 100;
/// Largest page of wallet trades
pub const MAX_TRADES_LIMIT: u32 = 100;

/// One call against the data API, with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Endpoint<'a> {
    /// `GET /tokens/{token}`
    TokenInfo { token: &'a str },
    /// `GET /tokens/pool/{pool}`
    TokenByPool { pool: &'a str },
    /// `GET /tokens/{token}/holders`
    TokenHolders { token: &'a str },
    /// `GET /tokens/{token}/holders/top`
    TopHolders { token: &'a str },
    /// `GET /tokens/{token}/ath`
    AllTimeHigh { token: &'a str },
    /// `GET /deployer/{wallet}`
    TokensByDeployer { wallet: &'a str },
    /// `GET /search?{filters}`
    Search { filters: &'a SearchFilters },
    /// `GET /tokens/latest?page={page}`
    LatestTokens { page: u32 },
    /// `POST /tokens/multi`
    MultipleTokens { tokens: Vec<&'a str> },
    /// `GET /tokens/trending[/{timeframe}]`
    TrendingTokens { timeframe: Option<&'a str> },
    /// `GET /tokens/volume[/{timeframe}]`
    TokensByVolume { timeframe: Option<&'a str> },
    /// `GET /tokens/overview`
    TokenOverview,
    /// `GET /tokens/multi/graduated`
    GraduatedTokens,
    /// `GET /price?token={token}`
    Price { token: &'a str, price_changes: bool },
    /// `POST /price`
    PostPrice { token: &'a str, price_changes: bool },
    /// `GET /price/history?token={token}`
    PriceHistory { token: &'a str },
    /// `GET /price/history/timestamp?token={token}&timestamp={timestamp}`
    PriceAtTimestamp { token: &'a str, timestamp: u64 },
    /// `GET /price/history/range?token={token}&time_from={from}&time_to={to}`
    PriceRange {
        token: &'a str,
        time_from: u64,
        time_to: u64,
    },
    /// `GET /price/multi?tokens={a,b,c}`
    MultiplePrices {
        tokens: Vec<&'a str>,
        price_changes: bool,
    },
    /// `POST /price/multi`
    PostMultiplePrices {
        tokens: Vec<&'a str>,
        price_changes: bool,
    },
    /// `GET /wallet/{owner}`
    Wallet { owner: &'a str },
    /// `GET /wallet/{owner}/basic`
    WalletBasic { owner: &'a str },
    /// `GET /wallet/{owner}/tokens`
    WalletTokens { owner: &'a str },
    /// `GET /wallet/{owner}/trades?limit={limit}[&before={before}]`
    WalletTrades {
        owner: &'a str,
        limit: u32,
        before: Option<u64>,
    },
    /// `GET /first-buyers/{token}`
    FirstBuyers { token: &'a str },
}

impl Endpoint<'_> {
    /// Check the arguments without touching the network
    pub fn validate(&self) -> ApiResult<()> {
        match self {
            Self::TokenInfo { token }
            | Self::TokenHolders { token }
            | Self::TopHolders { token }
            | Self::AllTimeHigh { token }
            | Self::Price { token, .. }
            | Self::PostPrice { token, .. }
            | Self::PriceHistory { token }
            | Self::PriceAtTimestamp { token, .. }
            | Self::PriceRange { token, .. }
            | Self::FirstBuyers { token } => validation::address("tokenAddress", token),
            Self::TokenByPool { pool } => validation::address("poolAddress", pool),
            Self::TokensByDeployer { wallet } => validation::address("wallet", wallet),
            Self::Wallet { owner } | Self::WalletBasic { owner } | Self::WalletTokens { owner } => {
                validation::address("owner", owner)
            }
            Self::WalletTrades { owner, limit, .. } => {
                validation::address("owner", owner)?;
                validation::in_range("limit", *limit, 1, MAX_TRADES_LIMIT)
            }
            Self::LatestTokens { page } => validation::in_range("page", *page, 1, MAX_LATEST_PAGE),
            Self::MultipleTokens { tokens } => {
                validation::batch_size(tokens.len(), MAX_TOKENS_PER_REQUEST)?;
                validation::addresses("tokens", tokens)
            }
            Self::MultiplePrices { tokens, .. } | Self::PostMultiplePrices { tokens, .. } => {
                validation::batch_size(tokens.len(), MAX_PRICE_TOKENS_PER_REQUEST)?;
                validation::addresses("tokens", tokens)
            }
            Self::TrendingTokens { timeframe } | Self::TokensByVolume { timeframe } => {
                validation::timeframe(*timeframe).map(|_| ())
            }
            Self::Search { .. } | Self::TokenOverview | Self::GraduatedTokens => Ok(()),
        }
    }

    /// HTTP method of the endpoint
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::MultipleTokens { .. } | Self::PostPrice { .. } | Self::PostMultiplePrices { .. } => {
                HttpMethod::Post
            }
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the base URL, including the query string
    ///
    /// Arguments are interpolated as given, so call [`Endpoint::validate`]
    /// first. Only search filters are form encoded.
    pub fn path(&self) -> String {
        match self {
            Self::TokenInfo { token } => format!("/tokens/{token}"),
            Self::TokenByPool { pool } => format!("/tokens/pool/{pool}"),
            Self::TokenHolders { token } => format!("/tokens/{token}/holders"),
            Self::TopHolders { token } => format!("/tokens/{token}/holders/top"),
            Self::AllTimeHigh { token } => format!("/tokens/{token}/ath"),
            Self::TokensByDeployer { wallet } => format!("/deployer/{wallet}"),
            Self::Search { filters } if filters.is_empty() => "/search".to_string(),
            Self::Search { filters } => format!("/search?{}", filters.to_query_string()),
            Self::LatestTokens { page } => format!("/tokens/latest?page={page}"),
            Self::MultipleTokens { .. } => "/tokens/multi".to_string(),
            Self::TrendingTokens { timeframe } => with_timeframe("/tokens/trending", *timeframe),
            Self::TokensByVolume { timeframe } => with_timeframe("/tokens/volume", *timeframe),
            Self::TokenOverview => "/tokens/overview".to_string(),
            Self::GraduatedTokens => "/tokens/multi/graduated".to_string(),
            Self::Price {
                token,
                price_changes,
            } => with_price_changes(format!("/price?token={token}"), *price_changes),
            Self::PostPrice { .. } => "/price".to_string(),
            Self::PriceHistory { token } => format!("/price/history?token={token}"),
            Self::PriceAtTimestamp { token, timestamp } => {
                format!("/price/history/timestamp?token={token}&timestamp={timestamp}")
            }
            Self::PriceRange {
                token,
                time_from,
                time_to,
            } => format!(
                "/price/history/range?token={token}&time_from={time_from}&time_to={time_to}"
            ),
            Self::MultiplePrices {
                tokens,
                price_changes,
            } => with_price_changes(
                format!("/price/multi?tokens={}", tokens.join(",")),
                *price_changes,
            ),
            Self::PostMultiplePrices { .. } => "/price/multi".to_string(),
            Self::Wallet { owner } => format!("/wallet/{owner}"),
            Self::WalletBasic { owner } => format!("/wallet/{owner}/basic"),
            Self::WalletTokens { owner } => format!("/wallet/{owner}/tokens"),
            Self::WalletTrades {
                owner,
                limit,
                before,
            } => match before {
                Some(before) => format!("/wallet/{owner}/trades?limit={limit}&before={before}"),
                None => format!("/wallet/{owner}/trades?limit={limit}"),
            },
            Self::FirstBuyers { token } => format!("/first-buyers/{token}"),
        }
    }

    /// JSON body for `POST` endpoints
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::MultipleTokens { tokens } => Some(json!({ "tokens": tokens })),
            Self::PostPrice {
                token,
                price_changes,
            } => Some(json!({ "token": token, "priceChanges": price_changes })),
            Self::PostMultiplePrices {
                tokens,
                price_changes,
            } => Some(json!({ "tokens": tokens, "priceChanges": price_changes })),
            _ => None,
        }
    }

    /// Request options for the gateway
    pub fn options(&self) -> RequestOptions {
        match (self.method(), self.body()) {
            (HttpMethod::Post, Some(body)) => RequestOptions::post(body),
            _ => RequestOptions::get(),
        }
    }
}

fn with_timeframe(base: &str, timeframe: Option<&str>) -> String {
    match timeframe {
        Some(timeframe) => format!("{base}/{timeframe}"),
        None => base.to_string(),
    }
}

fn with_price_changes(path: String, price_changes: bool) -> String {
    if price_changes {
        format!("{path}&priceChanges=true")
    } else {
        path
    }
}
