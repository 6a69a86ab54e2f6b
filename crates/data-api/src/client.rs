// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Public method surface of the data API
//!
//! Every method builds an [`Endpoint`] and hands it to [`DataApiClient::call`],
//! which validates the arguments before any traffic is sent. Addresses are
//! accepted as anything that is `AsRef<str>`, including
//! [`SolanaAddress`](shared_types::SolanaAddress). Responses are returned as
//! untyped JSON, exactly as the service produced them.

use api_client::{ApiResult, RequestOptions};
use serde_json::Value;

use crate::{
    config::{ClientConfig, ConfigError},
    endpoint::Endpoint,
    gateway::Gateway,
    search::SearchFilters,
};

/// Async client for the Solana token, price and wallet data API
///
/// The client holds immutable configuration and a pooled HTTP client, so it
/// can be shared between tasks by reference or behind an `Arc`.
#[derive(Debug)]
pub struct DataApiClient {
    gateway: Gateway,
}

impl DataApiClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Http`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            gateway: Gateway::new(config)?,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        self.gateway.config()
    }

    /// Send a raw request to `path`, which must start with `/` and carry its
    /// own query string
    ///
    /// Use this for endpoints without a dedicated method, to add headers, or to
    /// silence rate limit logging with [`RequestOptions::without_logs`].
    pub async fn request(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.gateway.request(path, options).await
    }

    /// Validate an endpoint and dispatch it through the gateway
    pub async fn call(&self, endpoint: Endpoint<'_>) -> ApiResult<Value> {
        self.call_with(endpoint, RequestOptions::default()).await
    }

    /// Like [`call`](Self::call), with caller headers and logging preference
    ///
    /// The method and body always come from `endpoint`. Only `headers` and
    /// `disable_logs` are taken from `options`, so any endpoint can carry extra
    /// headers or keep a rate limit quiet.
    pub async fn call_with(
        &self,
        endpoint: Endpoint<'_>,
        options: RequestOptions,
    ) -> ApiResult<Value> {
        endpoint.validate()?;
        let options = RequestOptions {
            headers: options.headers,
            disable_logs: options.disable_logs,
            ..endpoint.options()
        };
        self.gateway.request(&endpoint.path(), options).await
    }

    /// Token details, pools and events for a mint
    pub async fn get_token_info(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::TokenInfo {
            token: token.as_ref(),
        })
        .await
    }

    /// Token details looked up by one of its pool addresses
    pub async fn get_token_by_pool(&self, pool: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::TokenByPool {
            pool: pool.as_ref(),
        })
        .await
    }

    /// Holders of a token
    pub async fn get_token_holders(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::TokenHolders {
            token: token.as_ref(),
        })
        .await
    }

    /// Largest holders of a token
    pub async fn get_top_holders(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::TopHolders {
            token: token.as_ref(),
        })
        .await
    }

    /// All time high price of a token
    pub async fn get_all_time_high(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::AllTimeHigh {
            token: token.as_ref(),
        })
        .await
    }

    /// Tokens created by a deployer wallet
    pub async fn get_tokens_by_deployer(
        &self,
        wallet: impl AsRef<str>,
    ) -> ApiResult<Value> {
        self.call(Endpoint::TokensByDeployer {
            wallet: wallet.as_ref(),
        })
        .await
    }

    /// Search tokens, filters are passed through as query parameters
    pub async fn search(&self, filters: &SearchFilters) -> ApiResult<Value> {
        self.call(Endpoint::Search { filters }).await
    }

    /// Most recently created tokens, `page` in `1..=10`
    pub async fn get_latest_tokens(&self, page: u32) -> ApiResult<Value> {
        self.call(Endpoint::LatestTokens { page }).await
    }

    /// Details for up to 20 tokens in one call, returned in request order
    pub async fn get_multiple_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> ApiResult<Value> {
        self.call(Endpoint::MultipleTokens {
            tokens: as_strs(tokens),
        })
        .await
    }

    /// Trending tokens, over the service default window when `timeframe` is `None`
    pub async fn get_trending_tokens(&self, timeframe: Option<&str>) -> ApiResult<Value> {
        self.call(Endpoint::TrendingTokens { timeframe }).await
    }

    /// Tokens ranked by volume, over the service default window when `timeframe` is `None`
    pub async fn get_tokens_by_volume(&self, timeframe: Option<&str>) -> ApiResult<Value> {
        self.call(Endpoint::TokensByVolume { timeframe }).await
    }

    /// Latest, graduating and graduated tokens
    pub async fn get_token_overview(&self) -> ApiResult<Value> {
        self.call(Endpoint::TokenOverview).await
    }

    /// Tokens that graduated from their launch curve
    pub async fn get_graduated_tokens(&self) -> ApiResult<Value> {
        self.call(Endpoint::GraduatedTokens).await
    }

    /// Current price of a token
    pub async fn get_price(
        &self,
        token: impl AsRef<str>,
        price_changes: bool,
    ) -> ApiResult<Value> {
        self.call(Endpoint::Price {
            token: token.as_ref(),
            price_changes,
        })
        .await
    }

    /// Current price of a token, arguments sent as a JSON body
    pub async fn post_price(
        &self,
        token: impl AsRef<str>,
        price_changes: bool,
    ) -> ApiResult<Value> {
        self.call(Endpoint::PostPrice {
            token: token.as_ref(),
            price_changes,
        })
        .await
    }

    /// Historic prices of a token
    pub async fn get_price_history(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::PriceHistory {
            token: token.as_ref(),
        })
        .await
    }

    /// Price of a token closest to a unix timestamp
    pub async fn get_price_at_timestamp(
        &self,
        token: impl AsRef<str>,
        timestamp: u64,
    ) -> ApiResult<Value> {
        self.call(Endpoint::PriceAtTimestamp {
            token: token.as_ref(),
            timestamp,
        })
        .await
    }

    /// Lowest and highest price of a token between two unix timestamps
    pub async fn get_price_range(
        &self,
        token: impl AsRef<str>,
        time_from: u64,
        time_to: u64,
    ) -> ApiResult<Value> {
        self.call(Endpoint::PriceRange {
            token: token.as_ref(),
            time_from,
            time_to,
        })
        .await
    }

    /// Prices for up to 100 tokens in one call
    pub async fn get_multiple_prices<S: AsRef<str>>(
        &self,
        tokens: &[S],
        price_changes: bool,
    ) -> ApiResult<Value> {
        self.call(Endpoint::MultiplePrices {
            tokens: as_strs(tokens),
            price_changes,
        })
        .await
    }

    /// Prices for up to 100 tokens, arguments sent as a JSON body
    pub async fn post_multiple_prices<S: AsRef<str>>(
        &self,
        tokens: &[S],
        price_changes: bool,
    ) -> ApiResult<Value> {
        self.call(Endpoint::PostMultiplePrices {
            tokens: as_strs(tokens),
            price_changes,
        })
        .await
    }

    /// Every token held by a wallet, with values
    pub async fn get_wallet(&self, owner: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::Wallet {
            owner: owner.as_ref(),
        })
        .await
    }

    /// Lightweight view of the tokens held by a wallet
    pub async fn get_wallet_basic(&self, owner: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::WalletBasic {
            owner: owner.as_ref(),
        })
        .await
    }

    /// Token accounts of a wallet
    pub async fn get_wallet_tokens(&self, owner: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::WalletTokens {
            owner: owner.as_ref(),
        })
        .await
    }

    /// Trades made by a wallet, newest first
    ///
    /// `limit` must be in `1..=100`. `before` is a unix timestamp cursor for
    /// fetching older pages.
    pub async fn get_wallet_trades(
        &self,
        owner: impl AsRef<str>,
        limit: u32,
        before: Option<u64>,
    ) -> ApiResult<Value> {
        self.call(Endpoint::WalletTrades {
            owner: owner.as_ref(),
            limit,
            before,
        })
        .await
    }

    /// First buyers of a token
    pub async fn get_first_buyers(&self, token: impl AsRef<str>) -> ApiResult<Value> {
        self.call(Endpoint::FirstBuyers {
            token: token.as_ref(),
        })
        .await
    }
}

fn as_strs<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    values.iter().map(AsRef::as_ref).collect()
}
