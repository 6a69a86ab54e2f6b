// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `DataApiClient`
//!
//! These tests use wiremock to stand in for the data service and check the
//! path, method and body each public method produces, and that invalid
//! arguments are rejected before anything is sent.

use api_client::VALIDATION_ERROR;
use data_api::{ApiError, DataApiClient, Endpoint, RequestOptions, SearchFilters, SolanaAddress};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param, query_param_is_missing},
};

use fixtures::*;

/// Mount a mock answering `GET {expected_path}` with an empty object
async fn expect_get(mock_server: &MockServer, expected_path: &str) {
    Mock::given(method("GET"))
        .and(path(expected_path))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn get_token_info_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(format!("/tokens/{WRAPPED_SOL}")))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_info_response(WRAPPED_SOL)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = assert_ok!(client.get_token_info(WRAPPED_SOL).await);
    assert_eq!(token, token_info_response(WRAPPED_SOL));
    assert_eq!(token["pools"][0]["market"], "raydium");
}

#[tokio::test]
async fn address_paths() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    expect_get(&mock_server, &format!("/tokens/pool/{SOL_USDC_POOL}")).await;
    expect_get(&mock_server, &format!("/tokens/{USDC}/holders")).await;
    expect_get(&mock_server, &format!("/tokens/{USDC}/holders/top")).await;
    expect_get(&mock_server, &format!("/tokens/{USDC}/ath")).await;
    expect_get(&mock_server, &format!("/deployer/{OWNER}")).await;
    expect_get(&mock_server, &format!("/wallet/{OWNER}")).await;
    expect_get(&mock_server, &format!("/wallet/{OWNER}/basic")).await;
    expect_get(&mock_server, &format!("/wallet/{OWNER}/tokens")).await;
    expect_get(&mock_server, &format!("/first-buyers/{USDC}")).await;

    assert_ok!(client.get_token_by_pool(SOL_USDC_POOL).await);
    assert_ok!(client.get_token_holders(USDC).await);
    assert_ok!(client.get_top_holders(USDC).await);
    assert_ok!(client.get_all_time_high(USDC).await);
    assert_ok!(client.get_tokens_by_deployer(OWNER).await);
    assert_ok!(client.get_wallet(OWNER).await);
    assert_ok!(client.get_wallet_basic(OWNER).await);
    assert_ok!(client.get_wallet_tokens(OWNER).await);
    assert_ok!(client.get_first_buyers(USDC).await);
}

#[tokio::test]
async fn fixed_paths() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    expect_get(&mock_server, "/tokens/overview").await;
    expect_get(&mock_server, "/tokens/multi/graduated").await;

    assert_ok!(client.get_token_overview().await);
    assert_ok!(client.get_graduated_tokens().await);
}

/// Every address accepting method must refuse malformed input locally
#[tokio::test]
async fn invalid_addresses_never_reach_the_network() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    expect_no_requests(&mock_server).await;

    for &bad in INVALID_ADDRESSES {
        let results = [
            client.get_token_info(bad).await,
            client.get_token_by_pool(bad).await,
            client.get_token_holders(bad).await,
            client.get_top_holders(bad).await,
            client.get_all_time_high(bad).await,
            client.get_tokens_by_deployer(bad).await,
            client.get_multiple_tokens(&[USDC, bad]).await,
            client.get_price(bad, false).await,
            client.post_price(bad, true).await,
            client.get_price_history(bad).await,
            client.get_price_at_timestamp(bad, 1_690_000_000).await,
            client.get_price_range(bad, 1_690_000_000, 1_690_086_400).await,
            client.get_multiple_prices(&[bad], false).await,
            client.post_multiple_prices(&[bad], true).await,
            client.get_wallet(bad).await,
            client.get_wallet_basic(bad).await,
            client.get_wallet_tokens(bad).await,
            client.get_wallet_trades(bad, 10, None).await,
            client.get_first_buyers(bad).await,
        ];

        for result in results {
            let error = assert_err!(result);
            assert!(error.is_validation(), "{bad:?}: {error:?}");
            assert!(error.message().contains(bad), "{bad:?}: {error:?}");
        }
    }
}

#[tokio::test]
async fn latest_tokens_page_range() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/tokens/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(10)
        .mount(&mock_server)
        .await;

    for page in 1..=10 {
        assert_ok!(client.get_latest_tokens(page).await);
    }

    for page in [0, 11, 100] {
        let error = assert_err!(client.get_latest_tokens(page).await);
        assert!(error.is_validation());
    }

    let requests = mock_server.received_requests().await.unwrap();
    let queries: Vec<_> = requests
        .iter()
        .map(|request| request.url.query().unwrap_or_default().to_string())
        .collect();
    let expected: Vec<_> = (1..=10).map(|page| format!("page={page}")).collect();
    assert_eq!(queries, expected);
}

#[tokio::test]
async fn multiple_tokens_posts_in_input_order() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let tokens: Vec<&str> = (0..20)
        .map(|i| if i % 2 == 0 { USDC } else { WRAPPED_SOL })
        .collect();

    Mock::given(method("POST"))
        .and(path("/tokens/multi"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "tokens": tokens })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tokens": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_multiple_tokens(&tokens).await);
}

#[tokio::test]
async fn multiple_tokens_rejects_oversized_batch() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    expect_no_requests(&mock_server).await;

    let tokens = vec![USDC.to_string(); 21];
    let error = assert_err!(client.get_multiple_tokens(&tokens).await);
    assert_eq!(
        error,
        ApiError::validation("Maximum of 20 tokens per request")
    );
}

#[tokio::test]
async fn price_batches_allow_one_hundred_tokens() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let hundred = vec![USDC; 100];
    let joined = hundred.join(",");

    Mock::given(method("GET"))
        .and(path("/price/multi"))
        .and(query_param("tokens", joined.as_str()))
        .and(query_param("priceChanges", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/price/multi"))
        .and(body_json(json!({ "tokens": hundred, "priceChanges": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_multiple_prices(&hundred, true).await);
    assert_ok!(client.post_multiple_prices(&hundred, false).await);

    let oversized = vec![USDC; 101];
    for result in [
        client.get_multiple_prices(&oversized, false).await,
        client.post_multiple_prices(&oversized, false).await,
    ] {
        let error = assert_err!(result);
        assert_eq!(error.message(), "Maximum of 100 tokens per request");
    }
}

#[tokio::test]
async fn multiple_prices_without_changes_omits_flag() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/price/multi"))
        .and(query_param("tokens", format!("{USDC},{WRAPPED_SOL}").as_str()))
        .and(query_param_is_missing("priceChanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_multiple_prices(&[USDC, WRAPPED_SOL], false).await);
}

#[tokio::test]
async fn single_price_endpoints() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/price"))
        .and(query_param("token", USDC))
        .and(query_param("priceChanges", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/price"))
        .and(body_json(json!({ "token": USDC, "priceChanges": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let price = assert_ok!(client.get_price(USDC, true).await);
    assert_eq!(price["price"], 151.2);
    assert_ok!(client.post_price(USDC, false).await);
}

#[tokio::test]
async fn price_history_endpoints() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/price/history"))
        .and(query_param("token", USDC))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": 1.0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/price/history/timestamp"))
        .and(query_param("token", USDC))
        .and(query_param("timestamp", "1690000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/price/history/range"))
        .and(query_param("token", USDC))
        .and(query_param("time_from", "1690000000"))
        .and(query_param("time_to", "1690086400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_price_history(USDC).await);
    assert_ok!(client.get_price_at_timestamp(USDC, 1_690_000_000).await);
    assert_ok!(client.get_price_range(USDC, 1_690_000_000, 1_690_086_400).await);
}

#[tokio::test]
async fn wallet_trades_query() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let trades_path = format!("/wallet/{OWNER}/trades");

    Mock::given(method("GET"))
        .and(path(trades_path.as_str()))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("before"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"trades": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(trades_path.as_str()))
        .and(query_param("limit", "100"))
        .and(query_param("before", "1690000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"trades": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_wallet_trades(OWNER, 50, None).await);
    assert_ok!(client.get_wallet_trades(OWNER, 100, Some(1_690_000_000)).await);

    for limit in [0, 101] {
        let error = assert_err!(client.get_wallet_trades(OWNER, limit, None).await);
        assert!(error.is_validation(), "limit {limit}");
    }
}

#[tokio::test]
async fn trending_and_volume_timeframes() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    expect_get(&mock_server, "/tokens/trending").await;
    expect_get(&mock_server, "/tokens/trending/1h").await;
    expect_get(&mock_server, "/tokens/volume").await;
    expect_get(&mock_server, "/tokens/volume/24h").await;

    assert_ok!(client.get_trending_tokens(None).await);
    assert_ok!(client.get_trending_tokens(Some("1h")).await);
    assert_ok!(client.get_tokens_by_volume(None).await);
    assert_ok!(client.get_tokens_by_volume(Some("24h")).await);
}

#[tokio::test]
async fn unknown_timeframe_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    expect_no_requests(&mock_server).await;

    for result in [
        client.get_trending_tokens(Some("2h")).await,
        client.get_tokens_by_volume(Some("1d")).await,
    ] {
        let error = assert_err!(result);
        assert_eq!(error.code(), VALIDATION_ERROR);
        assert!(
            error
                .message()
                .ends_with("Valid timeframes are: 5m, 15m, 30m, 1h, 6h, 12h, 24h"),
            "{error}"
        );
    }
}

#[tokio::test]
async fn search_passes_filters_through() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "dog wif hat"))
        .and(query_param("minLiquidity", "10000"))
        .and(query_param("market", "raydium,orca"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filters = SearchFilters::new()
        .with("query", "dog wif hat")
        .with("minLiquidity", 10_000)
        .with_list("market", ["raydium", "orca"]);

    let results = assert_ok!(client.search(&filters).await);
    assert_eq!(results, json!({"data": []}));
}

#[tokio::test]
async fn search_without_filters() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    expect_get(&mock_server, "/search").await;

    assert_ok!(client.search(&SearchFilters::new()).await);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn client_is_shareable_across_tasks() {
    let mock_server = MockServer::start().await;
    let client = std::sync::Arc::new(create_test_client(&mock_server));

    Mock::given(method("GET"))
        .and(path(format!("/tokens/{USDC}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_info_response(USDC)))
        .expect(4)
        .mount(&mock_server)
        .await;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = std::sync::Arc::clone(&client);
            tokio::spawn(async move { client.get_token_info(USDC).await })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }
}

#[tokio::test]
async fn typed_addresses_are_accepted() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let usdc: SolanaAddress = USDC.parse().unwrap();
    let owner = SolanaAddress::new(OWNER).unwrap();

    expect_get(&mock_server, &format!("/tokens/{USDC}")).await;
    expect_get(&mock_server, &format!("/wallet/{OWNER}")).await;
    Mock::given(method("POST"))
        .and(path("/tokens/multi"))
        .and(body_json(json!({"tokens": [WRAPPED_SOL, USDC]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(client.get_token_info(&usdc).await);
    assert_ok!(client.get_wallet(owner).await);

    let batch = vec![SolanaAddress::new(WRAPPED_SOL).unwrap(), usdc];
    assert_ok!(client.get_multiple_tokens(&batch).await);
}

#[tokio::test]
async fn call_with_sends_caller_headers() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(format!("/tokens/{USDC}/holders/top")))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("x-request-id", "req-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = RequestOptions::get().with_header("x-request-id", "req-7");
    assert_ok!(
        client
            .call_with(Endpoint::TopHolders { token: USDC }, options)
            .await
    );
}

#[tokio::test]
async fn call_with_keeps_endpoint_method_and_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/price"))
        .and(header("x-request-id", "req-8"))
        .and(body_json(json!({"token": USDC, "priceChanges": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = RequestOptions::get()
        .with_header("x-request-id", "req-8")
        .without_logs();
    let endpoint = Endpoint::PostPrice {
        token: USDC,
        price_changes: true,
    };
    assert_ok!(client.call_with(endpoint, options).await);
}

#[tokio::test]
async fn call_with_still_validates() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    expect_no_requests(&mock_server).await;

    let error = assert_err!(
        client
            .call_with(
                Endpoint::TokenInfo { token: "not-an-address" },
                RequestOptions::get().without_logs(),
            )
            .await
    );
    assert!(error.is_validation());
}

fn _assert_client_is_send_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<DataApiClient>();
}
