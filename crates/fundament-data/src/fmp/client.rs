//! Financial Modeling Prep HTTP client with rate-limit retries.

use crate::config::{ApiConfig, FmpConfig, RetryPolicy};
use crate::error::{DataError, Result};
use crate::request::DataRequest;
use polars::prelude::DataFrame;
use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Provider field carrying an error description inside a 200 response.
const ERROR_MESSAGE_FIELD: &str = "Error Message";

/// FMP API client.
///
/// Wraps a caller-supplied [`reqwest::Client`] so that connection pools are
/// shared with the rest of the application.
#[derive(Debug, Clone)]
pub struct FmpClient {
    http: reqwest::Client,
    fmp: FmpConfig,
    retry: RetryPolicy,
}

impl FmpClient {
    /// Create a client from the `api` configuration section.
    pub fn new(http: reqwest::Client, api: &ApiConfig) -> Self {
        Self {
            http,
            fmp: api.fmp.clone(),
            retry: api.retry,
        }
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.fmp.base
    }

    /// Retry policy applied to rate-limited responses.
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Fetch a request's payload and normalize it.
    pub async fn fetch(&self, request: &DataRequest) -> Result<DataFrame> {
        info!(request = %request, "fetching from provider");
        let raw = self.get_json(&request.endpoint(), &request.query()).await?;
        request.normalize(&raw)
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// HTTP 429 is retried according to the [`RetryPolicy`]; every other
    /// failure is returned immediately as [`DataError::Api`].
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.fmp.base.trim_end_matches('/'), path);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            debug!(path, attempt, "requesting");
            let response = self
                .http
                .get(&url)
                .query(&[("apikey", self.fmp.key.as_str())])
                .query(query)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt >= max_attempts {
                    return Err(DataError::api(format!(
                        "rate limit exceeded for {} after {} attempts",
                        path, attempt
                    )));
                }
                let delay = self.retry.delay_for(attempt, retry_after(&response));
                warn!(path, attempt, delay_secs = delay.as_secs_f64(), "rate limited, retrying");
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            if !status.is_success() {
                return Err(DataError::api(format!("HTTP {} for {}", status, path)));
            }

            let body = response.bytes().await?;
            let value: Value = serde_json::from_slice(&body)?;
            if let Some(message) = value.get(ERROR_MESSAGE_FIELD) {
                let message = message.as_str().map_or_else(|| message.to_string(), str::to_string);
                return Err(DataError::Api(message));
            }
            return Ok(value);
        }
    }
}

fn retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, max_attempts: u32) -> FmpClient {
        let mut config = Config::default().with_key_override(Some("test-key".to_string()));
        config.api.fmp.base = server.uri();
        config.api.retry = RetryPolicy {
            retry_delay: 0.01,
            max_attempts,
            max_delay: 0.05,
        };
        FmpClient::new(reqwest::Client::new(), &config.api)
    }

    #[tokio::test]
    async fn test_api_key_sent_as_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/AAPL"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "symbol": "AAPL" }])))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server, 3).get_json("/profile/AAPL", &[]).await.unwrap();
        assert_eq!(value[0]["symbol"], "AAPL");
    }

    #[tokio::test]
    async fn test_rate_limit_then_success() {
        let server = MockServer::start().await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "symbol": "AAPL" }])))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server, 5).get_json("/profile/AAPL", &[]).await.unwrap();
        assert!(value.is_array());
    }

    #[tokio::test]
    async fn test_rate_limit_exhausted() {
        let server = MockServer::start().await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let err = client_for(&server, 3)
            .get_json("/profile/AAPL", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("APIError:"));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server, 5)
            .get_json("/profile/AAPL", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Api(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_error_message_payload() {
        let server = MockServer::start().await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "Error Message": "Invalid API KEY." })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, 1)
            .get_json("/profile/AAPL", &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "APIError: Invalid API KEY.");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(path("/profile/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, 1)
            .get_json("/profile/AAPL", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Api(_)));
    }

    #[tokio::test]
    async fn test_fetch_passes_request_query() {
        let server = MockServer::start().await;
        Mock::given(path("/income-statement/AAPL"))
            .and(query_param("period", "quarter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "date": "2024-06-29", "symbol": "AAPL", "revenue": 85777000000i64 }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let request =
            DataRequest::income_statement("AAPL", crate::kind::Period::Quarter).unwrap();
        let frame = client_for(&server, 1).fetch(&request).await.unwrap();
        assert_eq!(frame.height(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_hides_key() {
        let mut config = Config::default().with_key_override(Some("secret-key".to_string()));
        config.api.fmp.base = "http://127.0.0.1:1".to_string();
        let client = FmpClient::new(reqwest::Client::new(), &config.api);

        let err = client.get_json("/profile/AAPL", &[]).await.unwrap_err();
        assert!(matches!(err, DataError::Api(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
