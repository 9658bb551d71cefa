//! Integration tests for `BestBuyClient` using wiremock HTTP mocks.

use serde_json::json;
use stockcheck_bestbuy::{BestBuyClient, BestBuyConfig, BestBuyError};
use stockcheck_core::normalize_postal_code;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> BestBuyClient {
    BestBuyClient::new(&BestBuyConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        user_agent: "stockcheck-test/0.1".to_string(),
    })
    .expect("client construction should not fail")
}

fn store_json(store_id: &str, distance: f64) -> serde_json::Value {
    json!({
        "storeID": store_id,
        "name": "Richmond West Broad",
        "address": "9901 W Broad St",
        "city": "Glen Allen",
        "state": "VA",
        "postalCode": "23060",
        "storeType": "Big Box",
        "minPickupHours": 1,
        "lowStock": false,
        "distance": distance
    })
}

#[tokio::test]
async fn fetch_availability_returns_parsed_stores() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/6364255/stores.json"))
        .and(query_param("postalCode", "23223"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ispuEligible": true,
            "stores": [store_json("1118", 7.83), store_json("281", 12.4)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    let stores = client
        .fetch_availability(zip, "6364255")
        .await
        .expect("should parse stores");

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].store_id, "1118");
    assert_eq!(stores[1].store_id, "281");
    assert!((stores[1].distance - 12.4).abs() < f64::EPSILON);
}

#[tokio::test]
async fn missing_stores_key_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/54321/stores.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ispuEligible": true})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    let stores = client
        .fetch_availability(zip, "54321")
        .await
        .expect("empty body is not an error");
    assert!(stores.is_empty());
}

#[tokio::test]
async fn null_and_empty_stores_yield_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1/stores.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stores": null})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/2/stores.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stores": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    assert!(client.fetch_availability(zip, "1").await.unwrap().is_empty());
    assert!(client.fetch_availability(zip, "2").await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_http_error_without_the_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errorCode": "403",
            "errorMessage": "The provided API Key is invalid."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    let err = client
        .fetch_availability(zip, "6364255")
        .await
        .expect_err("403 should fail");

    assert!(matches!(err, BestBuyError::Http(_)), "got: {err:?}");
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    let err = client
        .fetch_availability(zip, "6364255")
        .await
        .expect_err("html body should fail");

    match err {
        BestBuyError::Deserialize { context, .. } => {
            assert!(context.contains("sku=6364255"));
            assert!(!context.contains("test-key"));
        }
        other => panic!("expected Deserialize, got: {other:?}"),
    }
}

#[tokio::test]
async fn failed_request_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let zip = normalize_postal_code("23223").unwrap();
    assert!(client.fetch_availability(zip, "6364255").await.is_err());
}
