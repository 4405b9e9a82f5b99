//! Generic HTTP client tools
//!
//! Shared request processing for every backend endpoint:
//! sending requests, logging, mapping status codes and reading responses.
//!
//! # design principles
//! - **Each endpoint builds its own `RequestBuilder`** - query, form, JSON or text bodies differ
//! - **Unified HTTP processing flow** - sending, logging, status mapping
//! - **Retries only where safe** - idempotent reads opt in, mutations never retry

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::types::ErrorBody;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (for logs)
    /// * `path` - endpoint path (for logs)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any HTTP response except 502/503/504
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {path} -> {status_code}");

        // Gateway errors are transient
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Server error (HTTP {status_code}) on {path}");
            return Err(ApiError::NetworkError {
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx status into an error, pulling `detail` out of the body
    pub fn ensure_success(status_code: u16, response_text: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        let detail = serde_json::from_str::<ErrorBody>(response_text)
            .ok()
            .and_then(ErrorBody::into_message);

        let error = match status_code {
            401 | 403 => ApiError::Unauthorized { detail },
            _ => ApiError::HttpStatus {
                status: status_code,
                detail,
            },
        };

        if error.is_expected() {
            log::warn!("Request rejected: {error}");
        } else {
            log::error!("Request failed: {error}");
        }
        Err(error)
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with retries
    ///
    /// Retries transport errors using exponential backoff.
    /// Callers must only use this for idempotent requests.
    ///
    /// # Retry strategy
    /// - Only `NetworkError` and `Timeout` are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    /// - HTTP status errors are returned immediately
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, path).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("Cannot clone request for {path}, disabling retry");
                return Self::execute_request(request_builder, method_name, path).await;
            };

            match Self::execute_request(req, method_name, path).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Determine whether the error can be retried
fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NetworkError { .. } | ApiError::Timeout { .. }
    )
}

/// Calculate exponential backoff delay
///
/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ...
/// Maximum delay limit is 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        let e = ApiError::NetworkError {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_timeout() {
        let e = ApiError::Timeout {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn not_retryable_http_status() {
        let e = ApiError::HttpStatus {
            status: 400,
            detail: None,
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_unauthorized() {
        assert!(!is_retryable(&ApiError::Unauthorized { detail: None }));
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_grows_exponentially() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_is_capped() {
        assert_eq!(backoff_delay(10), Duration::from_secs(10));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_secs(10));
    }

    // ---- ensure_success ----

    #[test]
    fn success_range_passes() {
        assert!(HttpUtils::ensure_success(200, "").is_ok());
        assert!(HttpUtils::ensure_success(204, "").is_ok());
    }

    #[test]
    fn unauthorized_maps_with_detail() {
        let err = HttpUtils::ensure_success(401, r#"{"detail":"Could not validate credentials"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: Some("Could not validate credentials".to_string())
            }
        );
    }

    #[test]
    fn non_json_error_body_has_no_detail() {
        let err = HttpUtils::ensure_success(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpStatus {
                status: 500,
                detail: None
            }
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_reports_parse_error() {
        let err = HttpUtils::parse_json::<crate::types::BannedList>("not json").unwrap_err();
        assert!(matches!(err, ApiError::ParseError { .. }));
    }
}
