//! Trip planner HTTP client.
//!
//! Provides an async method for querying the TfNSW trip endpoint.
//! Handles authentication, the request timeout and decoding of the
//! response body.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, info};

use super::error::TfnswError;
use super::query::TripQuery;
use super::types::TripPlanResponse;

/// Default base URL for the TfNSW Open Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.transport.nsw.gov.au";

/// Upper bound on a single trip planner call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Path of the trip endpoint, relative to the base URL.
const TRIP_PATH: &str = "/v1/tp/trip";

/// Configuration for the trip planner client.
#[derive(Debug, Clone)]
pub struct TfnswConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production TfNSW)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl TfnswConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// TfNSW trip planner client.
///
/// Cheap to clone; clones share one connection pool. Dropping the future
/// returned by [`TfnswClient::fetch_trips`] aborts the outbound request.
#[derive(Debug, Clone)]
pub struct TfnswClient {
    http: reqwest::Client,
    trip_url: Url,
}

impl TfnswClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TfnswConfig) -> Result<Self, TfnswError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("apikey {}", config.api_key))
            .map_err(|_| TfnswError::Request("invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let base = config.base_url.trim_end_matches('/');
        let trip_url = Url::parse(&format!("{base}{TRIP_PATH}"))
            .map_err(|e| TfnswError::Request(format!("invalid base URL {base:?}: {e}")))?;

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, trip_url })
    }

    /// Ask the planner for trips matching `query`.
    ///
    /// Any 2xx response whose body decodes is a success, even if it holds
    /// no journeys.
    pub async fn fetch_trips(&self, query: &TripQuery) -> Result<TripPlanResponse, TfnswError> {
        debug!(url = %self.trip_url, params = ?query.params(), "calling trip planner");

        let response = self
            .http
            .get(self.trip_url.clone())
            .query(query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TfnswError::Status {
                status: status.as_u16(),
            });
        }

        info!(
            status = status.as_u16(),
            origin = query.get("name_origin").unwrap_or_default(),
            destination = query.get("name_destination").unwrap_or_default(),
            "transport nsw api success"
        );

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            let snippet: String = String::from_utf8_lossy(&body).chars().take(500).collect();
            debug!(body = %snippet, "undecodable trip planner response");
            TfnswError::Json {
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TripRequest;
    use chrono::NaiveDate;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_query() -> TripQuery {
        let request = TripRequest::new("Redfern", "Town Hall", Some(3)).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 1, 17)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        TripQuery::new(&request, now)
    }

    fn client_for(server: &MockServer) -> TfnswClient {
        TfnswClient::new(TfnswConfig::new("test-key").with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = TfnswConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn config_defaults() {
        let config = TfnswConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn client_creation() {
        let client = TfnswClient::new(TfnswConfig::new("test-key")).unwrap();
        assert_eq!(
            client.trip_url.as_str(),
            "https://api.transport.nsw.gov.au/v1/tp/trip"
        );
    }

    #[test]
    fn trailing_slash_in_base_url() {
        let config = TfnswConfig::new("k").with_base_url("http://127.0.0.1:9000/");
        let client = TfnswClient::new(config).unwrap();
        assert_eq!(client.trip_url.as_str(), "http://127.0.0.1:9000/v1/tp/trip");
    }

    #[test]
    fn rejects_bad_key_and_url() {
        let err = TfnswClient::new(TfnswConfig::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, TfnswError::Request(_)));

        let err = TfnswClient::new(TfnswConfig::new("k").with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, TfnswError::Request(_)));
    }

    #[tokio::test]
    async fn sends_query_and_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/tp/trip"))
            .and(header("authorization", "apikey test-key"))
            .and(header("accept", "application/json"))
            .and(query_param("outputFormat", "rapidJSON"))
            .and(query_param("name_origin", "Redfern"))
            .and(query_param("name_destination", "Town Hall"))
            .and(query_param("calcNumberOfTrips", "3"))
            .and(query_param("itdDate", "20260117"))
            .and(query_param("itdTime", "1845"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"journeys":[{"legs":[{"origin":{"disassembledName":"Redfern"},"destination":{}}]}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).fetch_trips(&sample_query()).await.unwrap();
        assert_eq!(response.journeys().len(), 1);
        assert_eq!(
            response.journeys()[0].legs()[0].origin.display_name(),
            "Redfern"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_trips(&sample_query())
            .await
            .unwrap_err();
        assert!(matches!(err, TfnswError::Status { status: 401 }));
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_trips(&sample_query())
            .await
            .unwrap_err();
        assert!(matches!(err, TfnswError::Json { .. }));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"journeys":[]}"#)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = TfnswConfig::new("test-key")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(200));
        let client = TfnswClient::new(config).unwrap();

        let err = client.fetch_trips(&sample_query()).await.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err}");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Nothing listens on the discard port
        let config = TfnswConfig::new("test-key").with_base_url("http://127.0.0.1:9");
        let client = TfnswClient::new(config).unwrap();

        let err = client.fetch_trips(&sample_query()).await.unwrap_err();
        assert!(matches!(err, TfnswError::Http(_)));
    }
}
