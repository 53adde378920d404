//! Common test utilities and fixtures
//!
//! - wiremock for HTTP mocking (isolated, parallel-safe)
//! - a recording in-memory transport for assertions that need no network

use std::sync::{Arc, Mutex};

use messagebird::transport::{
    HeaderMap, HttpRequest, HttpResponse, HttpTransport, HttpTransportConfig, Result, Transport,
};
use messagebird::{JsonValue, Params, RequestDispatcher, async_trait};
use wiremock::MockServer;

/// Access key used by every test dispatcher
#[allow(dead_code)]
pub const TEST_ACCESS_KEY: &str = "test_gshuPaZoeEG6ovbc8M79w0QyM";

/// User agent used by every test dispatcher
#[allow(dead_code)]
pub const TEST_USER_AGENT: &str = "MessageBird/ApiClient/test";

/// Install a tracing subscriber honouring `RUST_LOG`; repeated calls are no-ops
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Dispatcher pointed at a wiremock server over plain HTTP
#[allow(dead_code)]
pub fn dispatcher_for(server: &MockServer) -> RequestDispatcher {
    init_tracing();
    let transport = HttpTransport::with_config(HttpTransportConfig {
        https_only: false,
        ..Default::default()
    })
    .expect("Failed to build transport");

    RequestDispatcher::with_transport(
        format!("{}/", server.uri()),
        TEST_ACCESS_KEY,
        TEST_USER_AGENT,
        Arc::new(transport),
    )
}

/// Build params from a `json!` object literal
#[allow(dead_code)]
pub fn params(value: JsonValue) -> Params {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("params fixture must be an object, got {}", other),
    }
}

/// Transport that records requests and answers with a canned response
#[allow(dead_code)]
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: Vec<u8>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().expect("lock poisoned").push(request);
        Ok(HttpResponse::new(
            self.status,
            HeaderMap::new(),
            self.body.clone(),
        ))
    }
}

/// Dispatcher backed by a [`RecordingTransport`]
#[allow(dead_code)]
pub fn recording_dispatcher(transport: Arc<RecordingTransport>) -> RequestDispatcher {
    RequestDispatcher::with_transport(
        "https://rest.messagebird.com/",
        TEST_ACCESS_KEY,
        TEST_USER_AGENT,
        transport,
    )
}
