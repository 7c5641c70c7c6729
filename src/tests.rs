//! End-to-end handler tests.
//!
//! Requests go through the real router; Dwolla and Plaid are `wiremock`
//! servers, so every outbound call can be inspected.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Config;
use crate::routes::build_router;
use crate::services::dwolla_client::DwollaClient;
use crate::services::plaid_client::PlaidClient;
use crate::services::webhook_service::{SIGNATURE_HEADER, generate_signature};
use crate::state::AppState;

const TOKEN: &str = "test-token";
const WEBHOOK_SECRET: &str = "whsec_demo";

struct Harness {
    dwolla: MockServer,
    plaid: MockServer,
    state: AppState,
}

impl Harness {
    async fn new() -> Self {
        Self::with_webhook_config(None, None).await
    }

    async fn with_webhook_config(secret: Option<&str>, base_url: Option<&str>) -> Self {
        let dwolla = MockServer::start().await;
        let plaid = MockServer::start().await;

        let config = Config {
            dwolla_app_key: "key".to_string(),
            dwolla_app_secret: "secret".to_string(),
            dwolla_env: "sandbox".to_string(),
            dwolla_base_url: dwolla.uri(),
            plaid_api_url: plaid.uri(),
            app_port: 8001,
            dwolla_webhook_secret: secret.map(str::to_string),
            webhook_base_url: base_url.map(str::to_string),
            upstream_timeout_secs: 5,
        };

        let http = reqwest::Client::new();
        let state = AppState::new(
            config,
            DwollaClient::with_token(http.clone(), dwolla.uri(), TOKEN),
            PlaidClient::new(http, plaid.uri()),
        );

        Self {
            dwolla,
            plaid,
            state,
        }
    }

    fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn dwolla_calls(&self) -> usize {
        self.dwolla.received_requests().await.unwrap().len()
    }

    async fn plaid_calls(&self) -> usize {
        self.plaid.received_requests().await.unwrap().len()
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_webhook(body: &str, signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/dwolla/webhook")
        .header("content-type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn created_at(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(201).insert_header("Location", location)
}

// ───────────────────────────────────────────────────────────────
// Health and accounts
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_upstream_urls() {
    let harness = Harness::new().await;

    let (status, body) = harness.send(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dwolla_env"], "sandbox");
    assert_eq!(body["dwolla_url"], harness.dwolla.uri());
    assert_eq!(body["plaid_url"], harness.plaid.uri());
}

#[tokio::test]
async fn accounts_returns_master_account_url() {
    let harness = Harness::new().await;
    let account_url = format!("{}/accounts/master", harness.dwolla.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_links": { "account": { "href": account_url } }
        })))
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness.send(get("/api/dwolla/accounts")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account_url"], account_url);
    assert_eq!(body["_links"]["account"]["href"], account_url);
}

// ───────────────────────────────────────────────────────────────
// Customers and funding sources
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_customer_returns_location() {
    let harness = Harness::new().await;
    let customer_url = format!("{}/customers/c-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com"
        })))
        .respond_with(created_at(&customer_url))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/customer",
            json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "customer_url": customer_url, "status": "created" }));
}

#[tokio::test]
async fn create_customer_without_email_never_calls_dwolla() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/customer",
            json!({ "firstName": "Jane", "lastName": "Doe" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn create_customer_relays_upstream_rejection() {
    let harness = Harness::new().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "ValidationError",
            "message": "Validation error(s) present."
        })))
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/customer",
            json!({ "firstName": "Jane", "lastName": "Doe", "email": "taken@example.com" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "upstream_error");
    assert_eq!(body["error"]["message"], "Failed to create customer");
    assert_eq!(body["error"]["details"]["code"], "ValidationError");
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let harness = Harness::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/dwolla/customer")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = harness.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn create_funding_source_uses_plaid_processor_token() {
    let harness = Harness::new().await;
    let customer_url = format!("{}/customers/c-1", harness.dwolla.uri());
    let funding_source_url = format!("{}/funding-sources/fs-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/api/sandbox/processor_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "processor_token": "processor-sandbox-abc",
            "account_id": "acc",
            "item_id": "item"
        })))
        .expect(1)
        .mount(&harness.plaid)
        .await;

    Mock::given(method("POST"))
        .and(path("/customers/c-1/funding-sources"))
        .and(body_json(json!({
            "plaidToken": "processor-sandbox-abc",
            "name": "Bank Account"
        })))
        .respond_with(created_at(&funding_source_url))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/funding-source",
            json!({ "customer_url": customer_url }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["funding_source_url"], funding_source_url);
    assert_eq!(body["status"], "created");
}

#[tokio::test]
async fn create_funding_source_without_customer_url_calls_nothing() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/funding-source",
            json!({ "name": "Checking" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert_eq!(harness.plaid_calls().await, 0);
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn funding_source_fails_when_plaid_fails() {
    let harness = Harness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/sandbox/processor_token"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&harness.plaid)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/funding-source",
            json!({ "customer_url": format!("{}/customers/c-1", harness.dwolla.uri()) }),
        ))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"]["message"],
        "Failed to get processor token from Plaid"
    );
    assert!(
        body["error"]["details"]
            .as_str()
            .unwrap()
            .contains("status: 503")
    );
    assert_eq!(harness.dwolla_calls().await, 0);
}

// ───────────────────────────────────────────────────────────────
// Transfers and simulations
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_transfer_formats_amount_and_defaults_currency() {
    let harness = Harness::new().await;
    let transfer_url = format!("{}/transfers/t-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/transfers"))
        .and(body_json(json!({
            "_links": {
                "source": { "href": "https://dwolla.test/funding-sources/a" },
                "destination": { "href": "https://dwolla.test/funding-sources/b" }
            },
            "amount": { "currency": "USD", "value": "10.50" }
        })))
        .respond_with(created_at(&transfer_url))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/transfer",
            json!({
                "source": "https://dwolla.test/funding-sources/a",
                "destination": "https://dwolla.test/funding-sources/b",
                "amount": 10.5
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "transfer_url": transfer_url, "status": "created" }));
}

#[tokio::test]
async fn create_transfer_without_amount_is_rejected() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/transfer",
            json!({ "source": "a", "destination": "b" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "amount is required");
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn get_transfer_passes_resource_through() {
    let harness = Harness::new().await;
    let resource = json!({
        "id": "t-1",
        "status": "pending",
        "amount": { "value": "10.50", "currency": "USD" }
    });

    Mock::given(method("GET"))
        .and(path("/transfers/t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource.clone()))
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness.send(get("/api/dwolla/transfer/t-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, resource);
}

#[tokio::test]
async fn get_transfer_rejects_id_leaving_transfers() {
    let harness = Harness::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_embedded": {} })))
        .mount(&harness.dwolla)
        .await;

    for uri in [
        "/api/dwolla/transfer/..%2Fcustomers",
        "/api/dwolla/transfer/..",
        "/api/dwolla/transfer/t-1%3Flimit=5",
    ] {
        let (status, body) = harness.send(get(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "invalid_request");
    }
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn get_transfer_encodes_id_as_one_segment() {
    let harness = Harness::new().await;

    Mock::given(method("GET"))
        .and(path("/transfers/t%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "t 1" })))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness.send(get("/api/dwolla/transfer/t%201")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "t 1");
}

#[tokio::test]
async fn expired_token_is_relayed_without_refresh() {
    let harness = Harness::new().await;

    Mock::given(method("GET"))
        .and(path("/transfers/t-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "ExpiredAccessToken",
            "message": "Invalid access token."
        })))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness.send(get("/api/dwolla/transfer/t-1")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["details"]["code"], "ExpiredAccessToken");

    // One call, and no attempt to fetch a new token
    let requests = harness.dwolla.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests.iter().all(|r| r.url.path() != "/token"));
}

#[tokio::test]
async fn unreachable_dwolla_is_an_internal_error() {
    let harness = Harness::new().await;
    let mut state = harness.state.clone();
    state.dwolla = DwollaClient::with_token(reqwest::Client::new(), "http://127.0.0.1:1", TOKEN);

    let response = build_router(state)
        .oneshot(get("/api/dwolla/transfer/t-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn simulate_fail_sends_failure_code() {
    let harness = Harness::new().await;
    let transfer_url = format!("{}/transfers/t-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/sandbox-simulations"))
        .and(body_json(json!({
            "_links": { "transfer": { "href": transfer_url } },
            "failureCode": "R01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 1 })))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/simulate-transfer",
            json!({ "transfer_url": transfer_url, "action": "fail" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "simulated");
    assert_eq!(body["action"], "fail");
    assert_eq!(
        body["message"],
        "Transfer simulation initiated. Webhook should trigger transfer_failed event."
    );
}

#[tokio::test]
async fn simulate_defaults_to_process_without_failure_code() {
    let harness = Harness::new().await;
    let transfer_url = format!("{}/transfers/t-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/sandbox-simulations"))
        .and(body_json(json!({
            "_links": { "transfer": { "href": transfer_url } }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/simulate-transfer",
            json!({ "transfer_url": transfer_url }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "process");
    assert_eq!(body["transfer_url"], transfer_url);
}

#[tokio::test]
async fn simulate_rejects_unknown_action() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/simulate-transfer",
            json!({ "transfer_url": "https://dwolla.test/transfers/t-1", "action": "refund" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "action must be 'process' or 'fail'");
    assert_eq!(harness.dwolla_calls().await, 0);
}

// ───────────────────────────────────────────────────────────────
// Webhook subscriptions
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscription_without_url_or_defaults_is_rejected() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json("/api/dwolla/webhook-subscription", json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "webhook URL not provided and WEBHOOK_BASE_URL not set"
    );
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn subscription_without_secret_or_default_is_rejected() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_json(
            "/api/dwolla/webhook-subscription",
            json!({ "url": "https://demo.example.com/api/dwolla/webhook" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "webhook secret not provided and DWOLLA_WEBHOOK_SECRET not set"
    );
    assert_eq!(harness.dwolla_calls().await, 0);
}

#[tokio::test]
async fn subscription_uses_configured_defaults() {
    let harness =
        Harness::with_webhook_config(Some(WEBHOOK_SECRET), Some("https://demo.example.com")).await;
    let subscription_url = format!("{}/webhook-subscriptions/ws-1", harness.dwolla.uri());

    Mock::given(method("POST"))
        .and(path("/webhook-subscriptions"))
        .and(body_json(json!({
            "url": "https://demo.example.com/api/dwolla/webhook",
            "secret": WEBHOOK_SECRET
        })))
        .respond_with(created_at(&subscription_url))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(post_json("/api/dwolla/webhook-subscription", json!({})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscription_url"], subscription_url);
    assert_eq!(
        body["webhook_url"],
        "https://demo.example.com/api/dwolla/webhook"
    );
    assert_eq!(body["status"], "created");
}

#[tokio::test]
async fn list_subscriptions_passes_collection_through() {
    let harness = Harness::new().await;
    let collection = json!({ "_embedded": { "webhook-subscriptions": [] }, "total": 0 });

    Mock::given(method("GET"))
        .and(path("/webhook-subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection.clone()))
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness.send(get("/api/dwolla/webhook-subscriptions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, collection);
}

#[tokio::test]
async fn delete_subscription_accepts_no_content() {
    let harness = Harness::new().await;

    Mock::given(method("DELETE"))
        .and(path("/webhook-subscriptions/ws-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(delete("/api/dwolla/webhook-subscription/ws-1"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted", "subscription_id": "ws-1" }));
}

#[tokio::test]
async fn delete_subscription_relays_not_found() {
    let harness = Harness::new().await;

    Mock::given(method("DELETE"))
        .and(path("/webhook-subscriptions/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "code": "NotFound" })))
        .mount(&harness.dwolla)
        .await;

    let (status, body) = harness
        .send(delete("/api/dwolla/webhook-subscription/missing"))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Failed to delete webhook subscription");
}

#[tokio::test]
async fn delete_subscription_rejects_id_leaving_collection() {
    let harness = Harness::new().await;

    for uri in [
        "/api/dwolla/webhook-subscription/..%2F..%2Fcustomers%2Fc-1",
        "/api/dwolla/webhook-subscription/s-1%23frag",
    ] {
        let (status, body) = harness.send(delete(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "invalid_request");
    }
    assert_eq!(harness.dwolla_calls().await, 0);
}

// ───────────────────────────────────────────────────────────────
// Webhook receipt
// ───────────────────────────────────────────────────────────────

const NOTIFICATION: &str = r#"{"id":"evt-1","topic":"transfer_completed","timestamp":"2026-01-01T00:00:00.000Z","_links":{"resource":{"href":"https://api-sandbox.dwolla.com/transfers/t-1"}}}"#;

#[tokio::test]
async fn signed_webhook_is_recorded() {
    let harness = Harness::with_webhook_config(Some(WEBHOOK_SECRET), None).await;
    let signature = generate_signature(WEBHOOK_SECRET, NOTIFICATION.as_bytes());

    let (status, body) = harness
        .send(post_webhook(NOTIFICATION, Some(&signature)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "received", "event_id": "evt-1", "topic": "transfer_completed" })
    );

    let (status, events) = harness.send(get("/api/dwolla/webhook-events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["id"], "evt-1");
}

#[tokio::test]
async fn bad_signature_is_unauthorized_and_not_recorded() {
    let harness = Harness::with_webhook_config(Some(WEBHOOK_SECRET), None).await;
    let signature = generate_signature("wrong-secret", NOTIFICATION.as_bytes());

    let (status, body) = harness
        .send(post_webhook(NOTIFICATION, Some(&signature)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "invalid_signature");

    let (status, _) = harness.send(post_webhook(NOTIFICATION, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert!(harness.state.events.snapshot().is_empty());
}

#[tokio::test]
async fn unsigned_webhook_accepted_without_secret() {
    let harness = Harness::new().await;

    let (status, body) = harness
        .send(post_webhook(NOTIFICATION, Some("anything")))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_id"], "evt-1");
    assert_eq!(harness.state.events.snapshot().len(), 1);
}

#[tokio::test]
async fn non_object_webhook_body_is_rejected() {
    let harness = Harness::new().await;

    let (status, body) = harness.send(post_webhook("[1,2,3]", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid JSON payload");
    assert!(harness.state.events.snapshot().is_empty());
}

#[tokio::test]
async fn webhook_events_keep_latest_fifty() {
    let harness = Harness::new().await;

    for n in 1..=51 {
        let body = json!({ "id": format!("e{n}"), "topic": "customer_created" }).to_string();
        let (status, _) = harness.send(post_webhook(&body, None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, events) = harness.send(get("/api/dwolla/webhook-events")).await;
    let ids: Vec<&str> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();

    let expected: Vec<String> = (2..=51).map(|n| format!("e{n}")).collect();
    assert_eq!(ids, expected);
}
