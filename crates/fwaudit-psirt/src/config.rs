//! Public configuration for the PSIRT client.

use std::time::Duration;

use fwaudit_core::AuditMode;

/// User agent sent with every request. Some vendor portals refuse requests
/// without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Upper bound on retry attempts per request.
pub const MAX_RETRIES: u8 = 10;

/// Upper bound on a single backoff sleep.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Configuration for the PSIRT client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use fwaudit_core::AuditMode;
/// use fwaudit_psirt::PsirtClientConfig;
/// use std::time::Duration;
///
/// let config = PsirtClientConfig::for_mode(AuditMode::Advisory)
///     .with_max_retries(2)
///     .with_retry_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct PsirtClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PsirtClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(15),
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl PsirtClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for an audit mode: 15 second timeout for branch audits,
    /// 20 seconds for advisory audits whose CVE pages are heavier.
    #[must_use]
    pub fn for_mode(mode: AuditMode) -> Self {
        let timeout = match mode {
            AuditMode::Branch => Duration::from_secs(15),
            AuditMode::Advisory => Duration::from_secs(20),
        };
        Self::default().with_timeout(timeout)
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for 5xx and network errors.
    ///
    /// Defaults to no retries. Values above [`MAX_RETRIES`] are clamped.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = if retries > MAX_RETRIES {
            MAX_RETRIES
        } else {
            retries
        };
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// The configured request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
