//! Authenticated JSON transport for the Meet API
//!
//! One call is one GET with the caller's bearer token. Transient failures
//! (connect errors, timeouts, 429 and retryable 5xx) are retried under the
//! [`RetryPolicy`]; anything else maps straight to a domain error.

use std::time::Duration;

use meetline_domain::{AccessToken, MeetApiConfig, MeetlineError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::retry::{is_retryable_status, retry_after, RetryPolicy};
use crate::errors::{status_error, InfraError};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("meetline/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()
            .map_err(InfraError::from)?;
        Ok(Self { client, retry })
    }

    pub fn from_config(config: &MeetApiConfig) -> Result<Self> {
        Self::new(Duration::from_secs(config.timeout_secs), RetryPolicy::from_config(config))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// GET `url` with `query` and decode the JSON body.
    pub async fn get_json<T>(
        &self,
        url: &str,
        token: &AccessToken,
        query: &[(&str, String)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 1;
        loop {
            let (error, hint) = match self.try_get(url, token, query).await {
                Ok(response) => {
                    return response
                        .json::<T>()
                        .await
                        .map_err(|e| MeetlineError::from(InfraError::from(e)));
                }
                Err(Failure::Fatal(error)) => return Err(error),
                Err(Failure::Transient { error, hint }) => (error, hint),
            };

            if attempt >= self.retry.max_attempts() {
                return Err(error);
            }
            let delay = self.retry.delay(attempt, hint);
            warn!(url, attempt, delay_ms = delay.as_millis() as u64, error = %error, "retrying Meet API call");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn try_get(
        &self,
        url: &str,
        token: &AccessToken,
        query: &[(&str, String)],
    ) -> std::result::Result<reqwest::Response, Failure> {
        let sent = self.client.get(url).bearer_auth(token.secret()).query(query).send().await;

        let response = match sent {
            Ok(response) => response,
            Err(err) if err.is_timeout() || err.is_connect() => {
                return Err(Failure::Transient { error: InfraError::from(err).into(), hint: None });
            }
            Err(err) => return Err(Failure::Fatal(InfraError::from(err).into())),
        };

        let status = response.status();
        debug!(url, %status, "Meet API response");
        if status.is_success() {
            return Ok(response);
        }

        let hint = retry_after(response.headers());
        let body = response.text().await.ok();
        let error = status_error(status, body.as_deref());
        if is_retryable_status(status) {
            Err(Failure::Transient { error, hint })
        } else {
            Err(Failure::Fatal(error))
        }
    }
}

enum Failure {
    Transient { error: MeetlineError, hint: Option<Duration> },
    Fatal(MeetlineError),
}
