//! HTTP transport for Lisk Service requests.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::domain::ServiceError;

// ============================================================================
// Constants
// ============================================================================

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Per-request timeout. `None` leaves requests unbounded, which is also
    /// reqwest's own default.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

// ============================================================================
// Traits
// ============================================================================

/// A way of performing one GET request and decoding its JSON body.
///
/// The real implementation is [`HttpClient`]; tests substitute a recording
/// double so request construction can be checked without a network.
pub trait Transport: Send + Sync {
    /// GET `url` and decode the body as JSON.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ServiceError>> + Send;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ClientInit` if the underlying client cannot be
    /// built (e.g., TLS backend unavailable).
    pub fn with_config(config: HttpConfig) -> Result<Self, ServiceError> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ServiceError::client_init(e.to_string()))?;
        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.inner.get(url).header("accept", "application/json");

        match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}

impl Transport for HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, ServiceError> {
        let response = self.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::status(status.as_u16(), body));
        }

        response.json().await.map_err(|e| {
            if e.is_decode() {
                ServiceError::parse(e.to_string())
            } else {
                ServiceError::Network(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::with_config(HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_no_timeout_by_default() {
        assert_eq!(client().config().timeout, None);
        assert_eq!(
            HttpConfig::with_timeout(Duration::from_secs(2)).timeout,
            Some(Duration::from_secs(2))
        );
    }

    async fn slow_prices_server(delay: Duration) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/market/prices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": [], "meta": {"count": 0}}))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_slow_response_succeeds_without_timeout() {
        let server = slow_prices_server(Duration::from_millis(1500)).await;

        let body = client()
            .get_json(&format!("{}/market/prices", server.uri()))
            .await
            .unwrap();
        assert_eq!(body["meta"]["count"], 0);
    }

    #[tokio::test]
    async fn test_configured_timeout_cuts_slow_response() {
        let server = slow_prices_server(Duration::from_millis(1500)).await;
        let client =
            HttpClient::with_config(HttpConfig::with_timeout(Duration::from_millis(200))).unwrap();

        let err = client
            .get_json(&format!("{}/market/prices", server.uri()))
            .await
            .unwrap_err();
        match err {
            ServiceError::Network(e) => assert!(e.is_timeout(), "{e:?}"),
            other => panic!("Expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_json_sends_accept_header_and_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/generators"))
            .and(query_param("limit", "5"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": [], "meta": {"count": 0}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/api/v3/generators?limit=5&offset=0", server.uri());
        let body = client().get_json(&url).await.unwrap();
        assert_eq!(body["meta"]["count"], 0);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blocks"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client()
            .get_json(&format!("{}/blocks", server.uri()))
            .await
            .unwrap_err();
        match err {
            ServiceError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/market/prices"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client()
            .get_json(&format!("{}/market/prices", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Parse { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_network_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let err = client()
            .get_json("http://127.0.0.1:9/blocks")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Network(_)), "{err:?}");
    }
}
