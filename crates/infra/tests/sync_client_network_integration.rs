//! Integration tests for HttpSyncClient against a mock remote service
//!
//! **Coverage:**
//! - Request shape: method, path, bearer token, content type, JSON body
//! - Status classification: 2xx succeeds, everything else fails
//! - Body normalization: per-line trimming
//! - Transport failures: timeout and refused connection become failed outcomes
//! - Config read at call time: endpoint and timeout changes apply immediately

#[path = "support.rs"]
mod support;

use std::time::Duration;

use ranksync_core::SyncTransport;
use ranksync_domain::{EventKind, Payload};
use serde_json::{json, Value};
use support::{client, config_for, TEST_TOKEN};
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice_join() -> Payload {
    Payload::new(
        Uuid::from_u128(1),
        "Alice",
        Some("vip".into()),
        vec!["vip".into(), "default".into()],
        EventKind::PlayerJoin,
    )
}

async fn only_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).unwrap()
}

#[tokio::test]
async fn notify_join_posts_payload_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/player-join"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server.uri());
    let payload = alice_join();
    let outcome = client.notify_join(&payload).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.body(), r#"{"success":true}"#);

    let body = only_request_body(&server).await;
    assert_eq!(body["uuid"], Uuid::from_u128(1).to_string());
    assert_eq!(body["playerName"], "Alice");
    assert_eq!(body["primaryGroup"], "vip");
    assert_eq!(body["groups"], json!(["vip", "default"]));
    assert_eq!(body["eventType"], "PLAYER_JOIN");
    assert_eq!(body["timestamp"], payload.created_at());
}

#[tokio::test]
async fn rank_change_without_primary_omits_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rank-update"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (client, _) = client(&server.uri());
    let payload =
        Payload::new(Uuid::from_u128(2), "Unknown", None, vec![], EventKind::GroupRemove);
    let outcome = client.notify_rank_change(&payload).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.body(), "");
    let body = only_request_body(&server).await;
    assert!(body.get("primaryGroup").is_none());
    assert_eq!(body["eventType"], "GROUP_REMOVE");
    assert_eq!(body["groups"], json!([]));
}

#[tokio::test]
async fn link_and_unlink_send_camel_case_records() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/link"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/unlink"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"Account not linked"}"#),
        )
        .mount(&server)
        .await;

    let (client, _) = client(&server.uri());
    let id = Uuid::from_u128(3);

    assert!(client.link(id, "Alice", "ABC123").await.succeeded());
    let unlinked = client.unlink(id).await;
    assert!(!unlinked.succeeded());
    assert_eq!(unlinked.body(), r#"{"error":"Account not linked"}"#);

    let requests = server.received_requests().await.unwrap();
    let link: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(link, json!({"uuid": id.to_string(), "playerName": "Alice", "linkCode": "ABC123"}));
    let unlink: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(unlink, json!({"uuid": id.to_string()}));
}

#[tokio::test]
async fn check_linked_is_a_bodyless_get() {
    let id = Uuid::from_u128(4);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/linked/{id}")))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{\n  \"linked\":true,\n  \"discordId\":\"9\"\n}\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server.uri());
    let outcome = client.check_linked(id).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.body(), r#"{"linked":true,"discordId":"9"}"#);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn classifies_only_2xx_as_success() {
    let cases: [(u16, bool); 6] =
        [(200, true), (201, true), (299, true), (300, false), (400, false), (500, false)];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rank-update"))
            .respond_with(ResponseTemplate::new(status).set_body_string("  status body  "))
            .mount(&server)
            .await;

        let (client, _) = client(&server.uri());
        let outcome = client.notify_rank_change(&alice_join()).await;

        assert_eq!(outcome.succeeded(), expected, "status {status}");
        assert_eq!(outcome.body(), "status body", "status {status}");
    }
}

#[tokio::test]
async fn slow_response_times_out_into_failed_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/player-join"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let (client, store) = client(&server.uri());
    let mut config = config_for(&server.uri());
    config.api.timeout = 200;
    store.replace(config);

    let started = std::time::Instant::now();
    let outcome = client.notify_join(&alice_join()).await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.body(), "Error: Timeout after 200ms");
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn refused_connection_is_contained() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (client, _) = client(&format!("http://{addr}"));
    let outcome = client.link(Uuid::from_u128(5), "Alice", "CODE").await;

    assert!(!outcome.succeeded());
    assert!(outcome.body().starts_with("Error: "), "{}", outcome.body());
}

#[tokio::test]
async fn endpoint_is_resolved_per_call() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    for server in [&first, &second] {
        Mock::given(method("POST"))
            .and(path("/api/unlink"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(server)
            .await;
    }

    let (client, store) = client(&first.uri());
    assert!(client.unlink(Uuid::from_u128(6)).await.succeeded());

    store.replace(config_for(&format!("{}/", second.uri())));
    assert!(client.unlink(Uuid::from_u128(6)).await.succeeded());
}

#[tokio::test]
async fn zero_timeout_means_no_timeout() {
    let id = Uuid::from_u128(7);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/linked/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"linked":true}"#)
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client(&server.uri());
    let mut config = config_for(&server.uri());
    config.api.timeout = 0;
    store.replace(config);

    let outcome = client.check_linked(id).await;

    assert!(outcome.succeeded(), "{}", outcome.body());
    assert_eq!(outcome.body(), r#"{"linked":true}"#);
}
