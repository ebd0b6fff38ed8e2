//! CLI bootstrap - the composition root.
//!
//! The only place where the advisory source is chosen and wired into the
//! audit service. Handlers receive the composed [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use fwaudit_core::{AdvisorySource, AuditMode, AuditService, NoopAdvisorySource};
use fwaudit_psirt::{DefaultPsirtClient, PsirtClientConfig};
use tracing::debug;

use crate::commands::AuditArgs;
use crate::error::CliError;

/// Bootstrap configuration for an audit run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Recommendation mode.
    pub mode: AuditMode,
    /// Per-request timeout; the mode default when `None`.
    pub timeout: Option<Duration>,
    /// Retries for transient HTTP failures.
    pub retries: u8,
    /// Use the offline advisory source.
    pub offline: bool,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Arguments`] for a zero timeout.
    pub fn from_args(args: &AuditArgs) -> Result<Self, CliError> {
        let timeout = match args.timeout {
            Some(0) => {
                return Err(CliError::Arguments(
                    "--timeout must be at least 1 second".to_string(),
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        Ok(Self {
            mode: args.mode,
            timeout,
            retries: args.retries,
            offline: args.offline,
        })
    }

    /// HTTP client configuration for this run.
    #[must_use]
    pub fn psirt_config(&self) -> PsirtClientConfig {
        let config = PsirtClientConfig::for_mode(self.mode).with_max_retries(self.retries);
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

/// Fully composed context for the audit command.
pub struct CliContext {
    audit: AuditService,
}

impl CliContext {
    /// Access the audit service.
    pub const fn audit(&self) -> &AuditService {
        &self.audit
    }
}

/// Bootstrap the audit pipeline.
///
/// # Errors
///
/// Fails when the HTTP client cannot be constructed.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let source: Arc<dyn AdvisorySource> = if config.offline {
        debug!("Offline run, advisory lookups disabled");
        Arc::new(NoopAdvisorySource)
    } else {
        let psirt = config.psirt_config();
        debug!(
            mode = %config.mode,
            timeout = ?psirt.timeout(),
            retries = config.retries,
            "Using vendor PSIRT pages"
        );
        Arc::new(DefaultPsirtClient::new(&psirt).context("Failed to build HTTP client")?)
    };

    Ok(CliContext {
        audit: AuditService::new(source, config.mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwaudit_core::{BuiltinInventory, Device};

    use crate::commands::InventorySource;

    fn args(mode: AuditMode, timeout: Option<u64>) -> AuditArgs {
        AuditArgs {
            mode,
            output: "report.html".into(),
            source: InventorySource {
                inventory: None,
                builtin: BuiltinInventory::Production,
            },
            timeout,
            retries: 1,
            offline: true,
            json: false,
        }
    }

    #[test]
    fn test_mode_default_timeouts() {
        let config = CliConfig::from_args(&args(AuditMode::Branch, None)).unwrap();
        assert_eq!(config.psirt_config().timeout(), Duration::from_secs(15));

        let config = CliConfig::from_args(&args(AuditMode::Advisory, None)).unwrap();
        assert_eq!(config.psirt_config().timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_explicit_timeout_wins() {
        let config = CliConfig::from_args(&args(AuditMode::Advisory, Some(3))).unwrap();
        assert_eq!(config.psirt_config().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = CliConfig::from_args(&args(AuditMode::Branch, Some(0))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_offline_bootstrap_uses_fallbacks() {
        let config = CliConfig::from_args(&args(AuditMode::Branch, None)).unwrap();
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.audit().mode(), AuditMode::Branch);

        let row = ctx
            .audit()
            .audit_device(&Device::new("C5_RV_SW01", "Cisco Catalyst 9410R", "IOS-XE 17.9.4"))
            .await;
        assert_eq!(row.recommendation.primary(), "17.9.6a");
    }
}
