//! HTTP backend abstraction for the vendor advisory pages.
//!
//! The production implementation uses reqwest with optional retry of
//! transient errors. Tests inject a [`testing::FakeBackend`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::config::{MAX_RETRY_DELAY, PsirtClientConfig};
use crate::error::{PsirtError, PsirtResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that fetch page bodies.
///
/// This is an implementation detail - external code should use the
/// `AdvisorySource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch a URL and return the response body as text.
    async fn get_text(&self, url: &Url) -> PsirtResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// 5xx responses and network errors are retried with exponential backoff
/// when retries are configured. Everything else fails immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PsirtClientConfig) -> PsirtResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> PsirtResult<reqwest::Response> {
        let mut attempt: u8 = 0;
        loop {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay, attempt);
                debug!(%url, attempt, ?delay, "Retrying request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        attempt += 1;
                        continue;
                    }

                    return Err(PsirtError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

/// Sleep before retry `attempt` (1-based): `base * 2^(attempt - 1)`, capped at
/// [`MAX_RETRY_DELAY`].
fn backoff_delay(base: Duration, attempt: u8) -> Duration {
    let factor = 2u32
        .checked_pow(u32::from(attempt.saturating_sub(1)))
        .unwrap_or(u32::MAX);
    base.saturating_mul(factor).min(MAX_RETRY_DELAY)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> PsirtResult<String> {
        info!(%url, "Fetching advisory page");
        let response = self.fetch_with_retry(url).await?;
        Ok(response.text().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
