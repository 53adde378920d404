//! Wire-level tests for the request dispatcher using wiremock
//!
//! Each test mounts the verbs it must NOT see with `.expect(0)` so an eager
//! dispatch of several verbs would fail verification.

mod common;

use messagebird::{Error, ResponseBody, ResponseFormat};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERBS: [&str; 5] = ["GET", "DELETE", "PATCH", "POST", "PUT"];

/// Mount a catch-all mock with `.expect(0)` for every verb except `allowed`
async fn forbid_other_verbs(server: &MockServer, allowed: &str) {
    for verb in VERBS.iter().filter(|v| **v != allowed) {
        Mock::given(method(*verb))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .named(format!("unexpected {}", verb))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_get_sends_params_in_query_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("a", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"count\":0}"))
        .expect(1)
        .mount(&mock_server)
        .await;
    forbid_other_verbs(&mock_server, "GET").await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let body = dispatcher
        .request(
            "messages",
            "GET",
            &common::params(json!({"a": "1"})),
            ResponseFormat::Text,
        )
        .await
        .expect("Request failed");

    assert_eq!(body, ResponseBody::Text("{\"count\":0}".to_string()));

    let received = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert_eq!(received[0].url.query(), Some("a=1"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_post_sends_params_as_json_body_without_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({"a": "1"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"id\":\"msg\"}"))
        .expect(1)
        .mount(&mock_server)
        .await;
    forbid_other_verbs(&mock_server, "POST").await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let body = dispatcher
        .request(
            "messages",
            "POST",
            &common::params(json!({"a": "1"})),
            ResponseFormat::Text,
        )
        .await
        .expect("Request failed");

    assert_eq!(body.as_text(), Some("{\"id\":\"msg\"}"));

    let received = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);

    mock_server.verify().await;
}

#[rstest]
#[case("DELETE")]
#[case("PATCH")]
#[case("POST")]
#[case("PUT")]
#[tokio::test]
async fn test_body_verbs_issue_exactly_one_request(#[case] verb: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method(verb))
        .and(path("/contacts/123"))
        .and(body_json(json!({"firstName": "Foo", "custom1": 7})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    forbid_other_verbs(&mock_server, verb).await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let body = dispatcher
        .request(
            "contacts/123",
            verb,
            &common::params(json!({"firstName": "Foo", "custom1": 7})),
            ResponseFormat::Text,
        )
        .await
        .expect("Request failed");

    assert_eq!(body.as_text(), Some(""));
    mock_server.verify().await;
}

#[rstest]
#[case("GET")]
#[case("DELETE")]
#[case("PATCH")]
#[case("POST")]
#[case("PUT")]
#[tokio::test]
async fn test_every_verb_sends_fixed_headers(#[case] verb: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method(verb))
        .and(header("accept", "application/json"))
        .and(header(
            "authorization",
            format!("AccessKey {}", common::TEST_ACCESS_KEY).as_str(),
        ))
        .and(header("user-agent", common::TEST_USER_AGENT))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    dispatcher
        .request("balance", verb, &messagebird::Params::new(), ResponseFormat::Binary)
        .await
        .expect("Request failed");

    mock_server.verify().await;
}

#[rstest]
#[case(200)]
#[case(201)]
#[case(401)]
#[case(404)]
#[case(405)]
#[case(422)]
#[tokio::test]
async fn test_allowed_statuses_return_body(#[case] status: u16) {
    let mock_server = MockServer::start().await;
    let payload = json!({"errors": [{"code": 20, "description": "message not found"}]});

    Mock::given(method("GET"))
        .and(path("/messages/unknown"))
        .respond_with(ResponseTemplate::new(status).set_body_json(&payload))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let text = dispatcher
        .get("messages/unknown")
        .await
        .expect("allow-listed status must not be an error");

    let decoded: serde_json::Value = serde_json::from_str(&text).expect("JSON body");
    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn test_not_found_text_and_binary_carry_same_content() {
    let mock_server = MockServer::start().await;
    let payload = "{\"errors\":[{\"code\":20,\"description\":\"Niet gevonden \u{2013} caf\u{e9}\"}]}";

    Mock::given(method("GET"))
        .and(path("/messages/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(payload))
        .expect(2)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let params = messagebird::Params::new();

    let text = dispatcher
        .request("messages/missing", "GET", &params, ResponseFormat::Text)
        .await
        .expect("404 is allow-listed");
    let binary = dispatcher
        .request("messages/missing", "GET", &params, ResponseFormat::Binary)
        .await
        .expect("404 is allow-listed");

    assert!(matches!(text, ResponseBody::Text(_)));
    assert!(matches!(binary, ResponseBody::Binary(_)));
    assert_eq!(text.as_text(), Some(payload));
    assert_eq!(binary.as_bytes(), payload.as_bytes());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_text_is_decoded_with_declared_charset() {
    let mock_server = MockServer::start().await;
    forbid_other_verbs(&mock_server, "GET").await;

    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"caf\xe9".to_vec(), "text/plain; charset=iso-8859-1"),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let params = messagebird::Params::new();

    let text = dispatcher
        .request("x", "GET", &params, ResponseFormat::Text)
        .await
        .expect("request failed");
    let binary = dispatcher
        .request("x", "GET", &params, ResponseFormat::Binary)
        .await
        .expect("request failed");

    assert_eq!(text.as_text(), Some("caf\u{e9}"));
    assert_eq!(binary.as_bytes(), b"caf\xe9");
}

#[rstest]
#[case(ResponseFormat::Text)]
#[case(ResponseFormat::Binary)]
#[tokio::test]
async fn test_server_error_is_rejected(#[case] format: ResponseFormat) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let result = dispatcher
        .request("balance", "GET", &messagebird::Params::new(), format)
        .await;

    match result {
        Err(Error::HttpTransport { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(
                message,
                format!(
                    "500 Server Error: Internal Server Error for url: {}/balance",
                    mock_server.uri()
                )
            );
        }
        other => panic!("Expected HttpTransport error, got {:?}", other),
    }
}

#[rstest]
#[case(400)]
#[case(403)]
#[case(429)]
#[case(502)]
#[tokio::test]
async fn test_statuses_outside_allow_list_are_rejected(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = common::dispatcher_for(&mock_server);
    let err = dispatcher
        .request("messages", "POST", &messagebird::Params::new(), ResponseFormat::Text)
        .await
        .expect_err("status outside the allow-list");

    assert_eq!(err.status(), Some(status));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_absolute_path_replaces_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/calls"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The configured endpoint is never contacted.
    let dispatcher = messagebird::RequestDispatcher::with_transport(
        "http://unreachable.invalid/",
        common::TEST_ACCESS_KEY,
        common::TEST_USER_AGENT,
        std::sync::Arc::new(
            messagebird::transport::HttpTransport::with_config(
                messagebird::transport::HttpTransportConfig {
                    https_only: false,
                    ..Default::default()
                },
            )
            .expect("Failed to build transport"),
        ),
    );

    let body = dispatcher
        .get(&format!("{}/v1/calls", mock_server.uri()))
        .await
        .expect("Request failed");

    assert_eq!(body, "[]");
    mock_server.verify().await;
}
