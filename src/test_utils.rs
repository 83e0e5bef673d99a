//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting transport doubles and sample
//! payloads across tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::client::http::Transport;
use crate::client::lisk::LiskClient;
use crate::config::ServiceConfig;
use crate::domain::ServiceError;
use crate::report::OutputSink;

/// Base URL used by every test client.
pub const TEST_BASE_URL: &str = "http://lisk.test/api/v3";

// ============================================================================
// Transport double
// ============================================================================

/// Canned reply for a [`MockTransport`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Status(u16),
    Unparseable,
}

/// In-memory transport that records every URL it is asked for.
///
/// Routes are keyed by full URL; anything unrouted answers with the
/// fallback reply (404 unless overridden).
#[derive(Debug, Clone)]
pub struct MockTransport {
    routes: HashMap<String, MockReply>,
    fallback: MockReply,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: MockReply::Status(404),
            calls: Arc::default(),
        }
    }
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request with `reply`.
    #[must_use]
    pub fn always(reply: MockReply) -> Self {
        Self {
            fallback: reply,
            ..Self::default()
        }
    }

    /// Answer `path_and_query` (relative to [`TEST_BASE_URL`]) with `body`.
    #[must_use]
    pub fn route(mut self, path_and_query: &str, body: Value) -> Self {
        self.routes.insert(
            format!("{TEST_BASE_URL}{path_and_query}"),
            MockReply::Json(body),
        );
        self
    }

    /// URLs requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> Result<Value, ServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        match self.routes.get(url).unwrap_or(&self.fallback) {
            MockReply::Json(body) => Ok(body.clone()),
            MockReply::Status(status) => Err(ServiceError::status(*status, "")),
            MockReply::Unparseable => Err(ServiceError::parse("expected value at line 1 column 1")),
        }
    }
}

/// Client wired to a transport double at [`TEST_BASE_URL`].
#[must_use]
pub fn mock_client(transport: MockTransport) -> LiskClient<MockTransport> {
    LiskClient::with_transport(ServiceConfig::new(TEST_BASE_URL), transport)
}

// ============================================================================
// Output sink double
// ============================================================================

/// One line written to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEntry {
    Payload { label: String, payload: Value },
    Failure { context: String, message: String },
}

/// Sink that keeps everything it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<SinkEntry>,
}

impl OutputSink for RecordingSink {
    fn payload(&mut self, label: &str, payload: &Value) {
        self.entries.push(SinkEntry::Payload {
            label: label.to_string(),
            payload: payload.clone(),
        });
    }

    fn failure(&mut self, context: &str, error: &ServiceError) {
        self.entries.push(SinkEntry::Failure {
            context: context.to_string(),
            message: error.to_string(),
        });
    }
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Sample Lisk Service response bodies.
pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn generators() -> Value {
        json!({
            "data": [{
                "address": "lsk24cd35u4jdq8szo3pnsqe5dsxwrnazyqqqg5eu",
                "name": "genesis_84",
                "publicKey": "5d4ad9a3d7fb8ac2d1c0b8e1c7a4b3c3b5c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4",
                "nextAllocatedTime": 1_700_000_000,
                "status": "active"
            }],
            "meta": {"count": 1, "offset": 0, "total": 1}
        })
    }

    #[must_use]
    pub fn blocks() -> Value {
        json!({
            "data": [{"height": 23_390_117, "numberOfTransactions": 0}],
            "meta": {"count": 1, "offset": 0, "total": 23_390_117}
        })
    }

    #[must_use]
    pub fn transaction() -> Value {
        json!({
            "data": [{
                "id": "533fdf2261c0bcf84c175f15b528aee31bef206f68a2d33913a0f398e01df04a",
                "moduleCommand": "token:transfer",
                "executionStatus": "successful"
            }],
            "meta": {"count": 1, "offset": 0, "total": 1}
        })
    }

    #[must_use]
    pub fn account_exists() -> Value {
        json!({"data": {"isExists": true}, "meta": {}})
    }

    #[must_use]
    pub fn token_balances() -> Value {
        json!({
            "data": [{
                "tokenID": "0200000000000000",
                "availableBalance": "100000000",
                "lockedBalances": []
            }],
            "meta": {"address": "lskdwsyfmcko6mcd357446yatromr9vzgu7eb8y99", "count": 1, "offset": 0, "total": 1}
        })
    }

    #[must_use]
    pub fn token_constants() -> Value {
        json!({
            "data": {
                "extraCommandFees": {"userAccountInitializationFee": "5000000", "escrowAccountInitializationFee": "5000000"}
            },
            "meta": {}
        })
    }

    #[must_use]
    pub fn blockchain_apps() -> Value {
        json!({
            "data": [{"chainID": "02000001", "chainName": "enevti", "status": "activated"}],
            "meta": {"count": 1, "offset": 0, "total": 1}
        })
    }

    #[must_use]
    pub fn market_prices() -> Value {
        json!({
            "data": [{"code": "LSK_USD", "from": "LSK", "to": "USD", "rate": "0.95"}],
            "meta": {"count": 1}
        })
    }
}
