//! Integration tests for client construction and the information cache.
//!
//! These tests run the client against a local mock server and verify the
//! secret check, the single-fetch cache and the favicon enrichment.

use serde_json::json;
use tebex_api::clients::{HttpError, SECRET_HEADER};
use tebex_api::{BaseUrl, ConfigError, Secret, TebexClient, TebexConfig, TebexError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &str = "test-secret";

fn create_config(base_url: &str, favicon_lookup: bool) -> TebexConfig {
    TebexConfig::builder()
        .secret(Secret::new(SECRET).unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .favicon_lookup(favicon_lookup)
        .build()
        .unwrap()
}

fn information_body(domain: &str) -> serde_json::Value {
    json!({
        "account": {
            "id": 1,
            "domain": domain,
            "name": "Test Store",
            "currency": {"iso_4217": "USD", "symbol": "$"},
            "online_mode": true,
            "game_type": "Minecraft: Java Edition",
            "log_events": false
        },
        "server": {"id": 2, "name": "Survival"}
    })
}

async fn mount_information(server: &MockServer, domain: &str) {
    Mock::given(method("GET"))
        .and(path("/information"))
        .and(header(SECRET_HEADER, SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(information_body(domain)))
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}

#[tokio::test]
async fn test_construction_fetches_information_once() {
    let server = MockServer::start().await;
    mount_information(&server, "https://store.invalid").await;

    let client = TebexClient::with_config(create_config(&server.uri(), false))
        .await
        .unwrap();

    assert_eq!(request_count(&server).await, 1);

    for _ in 0..3 {
        let info = client.information().await.unwrap();
        assert_eq!(info.domain(), Some("https://store.invalid"));
    }

    // Cache hits never reach the server
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_information_has_placeholder_favicon_when_lookup_disabled() {
    let server = MockServer::start().await;
    mount_information(&server, "https://store.invalid").await;

    let client = TebexClient::with_config(create_config(&server.uri(), false))
        .await
        .unwrap();
    let info = client.information().await.unwrap();

    assert_eq!(info.favicon, "?");
    assert_eq!(info.to_value()["favicon"], "?");
    assert_eq!(info.to_value()["server"]["name"], "Survival");
}

#[tokio::test]
async fn test_information_includes_discovered_favicon() {
    let server = MockServer::start().await;
    mount_information(&server, &server.uri()).await;

    Mock::given(method("GET"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0_u8, 0, 1, 0]))
        .expect(1)
        .mount(&server)
        .await;

    let client = TebexClient::with_config(create_config(&server.uri(), true))
        .await
        .unwrap();
    let info = client.information().await.unwrap();

    assert_eq!(info.favicon, format!("{}/favicon.ico", server.uri()));
}

#[tokio::test]
async fn test_missing_favicon_falls_back_to_placeholder() {
    let server = MockServer::start().await;
    mount_information(&server, &server.uri()).await;

    Mock::given(method("GET"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = TebexClient::with_config(create_config(&server.uri(), true))
        .await
        .unwrap();

    assert_eq!(client.information().await.unwrap().favicon, "?");
}

#[tokio::test]
async fn test_rejected_secret_fails_construction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/information"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"error_code": 403, "error_message": "Invalid secret"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = TebexClient::with_config(create_config(&server.uri(), false)).await;

    match result {
        Err(TebexError::InvalidSecret { source }) => {
            let api_error = source.api_error().expect("expected an API error");
            assert_eq!(api_error.code, 403);
            assert_eq!(api_error.message, "Invalid secret");
        }
        other => panic!("expected InvalidSecret, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_fails_construction_with_network_source() {
    // Nothing listens on port 1
    let result = TebexClient::with_config(create_config("http://127.0.0.1:1", false)).await;

    match result {
        Err(TebexError::InvalidSecret { source }) => {
            assert!(matches!(*source, TebexError::Http(HttpError::Network(_))));
        }
        other => panic!("expected InvalidSecret, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_information_page_fails_construction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/information"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let result = TebexClient::with_config(create_config(&server.uri(), false)).await;

    match result {
        Err(TebexError::InvalidSecret { source }) => {
            assert!(matches!(
                *source,
                TebexError::Http(HttpError::InvalidResponse { code: 200, .. })
            ));
        }
        other => panic!("expected InvalidSecret, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_secret_is_a_config_error() {
    let result = TebexClient::new("").await;

    assert!(matches!(
        result,
        Err(TebexError::Config(ConfigError::EmptySecret))
    ));
}

#[tokio::test]
async fn test_requests_carry_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/information"))
        .and(header(SECRET_HEADER, SECRET))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(information_body("x")))
        .expect(1)
        .mount(&server)
        .await;

    let client = TebexClient::with_config(create_config(&server.uri(), false)).await;
    assert!(client.is_ok());
}
